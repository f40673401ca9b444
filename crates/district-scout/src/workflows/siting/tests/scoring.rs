use super::common::*;
use crate::workflows::siting::domain::{
    BusinessType, CompetitionTier, Recommendation, TrafficTier,
};
use crate::workflows::siting::scoring::{
    score_district, DistrictDraws, DistrictScorer, DrawSource, RandomDraws, ScriptedDraws,
};

#[test]
fn reference_draws_produce_moderate_score() {
    let record = score_district("Arbat", &moderate_draws(), &BusinessType::CoffeeShop, 300);

    assert!((record.breakdown.raw - 56.0).abs() < 1e-9);
    assert_eq!(record.score, 56);
    assert_eq!(record.recommendation, Recommendation::Moderate);
    assert_eq!(record.competition, CompetitionTier::Favorable);
    assert_eq!(record.traffic_level, TrafficTier::High);
    assert_eq!(record.district, "Arbat");
}

#[test]
fn breakdown_itemises_each_term() {
    let record = score_district("Arbat", &moderate_draws(), &BusinessType::CoffeeShop, 300);
    let breakdown = record.breakdown;

    assert!((breakdown.traffic - 24.0).abs() < 1e-9);
    assert_eq!(breakdown.competition, -8.0);
    assert_eq!(breakdown.rent, -10.0);
    assert_eq!(breakdown.spend_gap, 30.0);
    assert_eq!(breakdown.business_bias, 15.0);
    assert_eq!(breakdown.jitter, 5.0);
}

#[test]
fn extreme_draws_are_clamped_to_ceiling() {
    let record = score_district("Center", &extreme_draws(), &BusinessType::CoffeeShop, 100);

    assert!(record.breakdown.raw > 100.0);
    assert_eq!(record.breakdown.clamped, 100.0);
    assert_eq!(record.score, 100);
    assert_eq!(record.recommendation, Recommendation::Favorable);
}

#[test]
fn poor_draws_are_clamped_to_floor() {
    let record = score_district("Outskirts", &poor_draws(), &BusinessType::ClothingStore, 5000);

    assert!(record.breakdown.raw < 0.0);
    assert_eq!(record.score, 0);
    assert_eq!(record.recommendation, Recommendation::Unfavorable);
    assert_eq!(record.traffic_level, TrafficTier::Low);
    assert_eq!(record.competition, CompetitionTier::Weak);
}

#[test]
fn spend_gap_never_subtracts() {
    let draws = DistrictDraws {
        area_avg_check: 300,
        ..moderate_draws()
    };
    let record = score_district("Arbat", &draws, &BusinessType::Restaurant, 4000);

    assert_eq!(record.breakdown.spend_gap, 0.0);
}

#[test]
fn unknown_business_type_adds_nothing() {
    let known = score_district("A", &moderate_draws(), &BusinessType::Restaurant, 300);
    let unknown = score_district(
        "A",
        &moderate_draws(),
        &BusinessType::Other("bakery".to_string()),
        300,
    );

    assert_eq!(known.score, unknown.score);
    assert_eq!(unknown.breakdown.business_bias, 0.0);
}

#[test]
fn tiers_are_independent_of_each_other() {
    let draws = DistrictDraws {
        traffic: 0.39,
        competitors: 1,
        rent: 1500,
        area_avg_check: 700,
        jitter: 9.9,
    };
    let record = score_district("Mixed", &draws, &BusinessType::CoffeeShop, 100);

    assert_eq!(record.traffic_level, TrafficTier::Low);
    assert_eq!(record.competition, CompetitionTier::Favorable);
    assert_eq!(record.recommendation, Recommendation::Favorable);
}

#[test]
fn scorer_keeps_input_order_and_duplicates() {
    let districts = vec!["B".to_string(), "A".to_string(), "B".to_string()];
    let mut scorer = DistrictScorer::new(ScriptedDraws::new([
        poor_draws(),
        extreme_draws(),
        moderate_draws(),
    ]));

    let records = scorer.score(&districts, &BusinessType::CoffeeShop, 300);

    let names: Vec<&str> = records.iter().map(|r| r.district.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "B"]);
    assert_eq!(records[0].score, 0);
    // 30 - 4 - 7.5 + 40 + 15 + 10 = 83.5
    assert_eq!(records[1].score, 84);
    assert_eq!(records[2].score, 56);
}

#[test]
fn scorer_draws_once_per_district() {
    let mut scorer = DistrictScorer::new(ScriptedDraws::new([
        moderate_draws(),
        moderate_draws(),
        moderate_draws(),
    ]));

    let records = scorer.score(
        &["A".to_string(), "B".to_string()],
        &BusinessType::Pharmacy,
        300,
    );

    assert_eq!(records.len(), 2);
    assert_eq!(scorer.into_source().remaining(), 1);
}

#[test]
fn empty_district_list_yields_empty_result() {
    let mut scorer = DistrictScorer::seeded(1);
    assert!(scorer.score(&[], &BusinessType::FastFood, 500).is_empty());
}

#[test]
fn random_scores_always_within_bounds() {
    let districts: Vec<String> = (0..500).map(|index| format!("district-{index}")).collect();
    let mut source = RandomDraws::seeded(0xD157_81C7);
    let mut scorer = DistrictScorer::new(RandomDraws::seeded(0xD157_81C7));

    for business_type in BusinessType::KNOWN {
        for avg_check in [100, 300, 5000] {
            for record in scorer.score(&districts, &business_type, avg_check) {
                assert!(record.score <= 100);
                assert!((0.0..=100.0).contains(&record.breakdown.clamped));
                assert!((1..=10).contains(&record.competitor_count));
                assert!((1500..=4000).contains(&record.rent));
                assert!((300..=700).contains(&record.area_avg_check));
            }
        }
    }

    // The scorer consumes draws in the same sequence as a bare source.
    let mut replay = DistrictScorer::new(RandomDraws::seeded(0xD157_81C7));
    let first = replay.score(&districts[..1], &BusinessType::CoffeeShop, 100);
    assert_eq!(first[0].traffic_value, source.draw().traffic);
}
