use super::super::domain::{BusinessType, ScoreBreakdown};
use super::draws::DistrictDraws;

const TRAFFIC_WEIGHT: f64 = 30.0;
const COMPETITOR_PENALTY: f64 = 4.0;
const RENT_DIVISOR: f64 = 200.0;
const SPEND_GAP_DIVISOR: f64 = 10.0;
pub const SCORE_FLOOR: f64 = 0.0;
pub const SCORE_CEILING: f64 = 100.0;

/// Applies the linear attractiveness formula to one district's draws.
///
/// Only a district whose typical check exceeds the target average check earns
/// spend-gap points; a lower district average never subtracts.
pub(crate) fn attractiveness(
    draws: &DistrictDraws,
    business_type: &BusinessType,
    avg_check: u32,
) -> ScoreBreakdown {
    let traffic = draws.traffic * TRAFFIC_WEIGHT;
    let competition = -(f64::from(draws.competitors) * COMPETITOR_PENALTY);
    let rent = -(f64::from(draws.rent) / RENT_DIVISOR);
    let spend_gap =
        (f64::from(draws.area_avg_check) - f64::from(avg_check)).max(0.0) / SPEND_GAP_DIVISOR;
    let business_bias = f64::from(business_type.multiplier());
    let jitter = draws.jitter;

    let raw = traffic + competition + rent + spend_gap + business_bias + jitter;
    let clamped = if raw.is_finite() {
        raw.clamp(SCORE_FLOOR, SCORE_CEILING)
    } else {
        SCORE_FLOOR
    };

    ScoreBreakdown {
        traffic,
        competition,
        rent,
        spend_gap,
        business_bias,
        jitter,
        raw,
        clamped,
    }
}
