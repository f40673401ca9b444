mod draws;
mod rules;
mod tiers;

pub use draws::{
    DistrictDraws, DrawSource, RandomDraws, ScriptedDraws, AREA_AVG_CHECK_RANGE,
    COMPETITOR_RANGE, JITTER_SPAN, RENT_RANGE,
};
pub use tiers::{classify_competition, classify_score, classify_traffic};

use super::domain::{BusinessType, DistrictRecord};
use rand_chacha::ChaCha8Rng;
use rules::attractiveness;
use tracing::debug;

/// Produces one scored record per district from an injected draw source.
pub struct DistrictScorer<S> {
    source: S,
}

impl DistrictScorer<RandomDraws<ChaCha8Rng>> {
    pub fn from_entropy() -> Self {
        Self::new(RandomDraws::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RandomDraws::seeded(seed))
    }
}

impl<S: DrawSource> DistrictScorer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Scores districts in input order. Ranking is left to the caller.
    pub fn score(
        &mut self,
        districts: &[String],
        business_type: &BusinessType,
        avg_check: u32,
    ) -> Vec<DistrictRecord> {
        districts
            .iter()
            .map(|district| {
                let draws = self.source.draw();
                score_district(district, &draws, business_type, avg_check)
            })
            .collect()
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

/// Deterministic part of scoring: tiers and score from already-drawn metrics.
pub fn score_district(
    district: &str,
    draws: &DistrictDraws,
    business_type: &BusinessType,
    avg_check: u32,
) -> DistrictRecord {
    let breakdown = attractiveness(draws, business_type, avg_check);
    let record = DistrictRecord {
        district: district.to_string(),
        traffic_value: draws.traffic,
        traffic_level: classify_traffic(draws.traffic),
        competitor_count: draws.competitors,
        competition: classify_competition(draws.competitors),
        rent: draws.rent,
        area_avg_check: draws.area_avg_check,
        score: breakdown.rounded(),
        recommendation: classify_score(breakdown.clamped),
        breakdown,
    };

    debug!(
        district = %record.district,
        raw = record.breakdown.raw,
        score = record.score,
        "district scored"
    );

    record
}
