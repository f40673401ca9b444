use super::super::domain::{CompetitionTier, Recommendation, TrafficTier};

pub const HIGH_TRAFFIC_MIN: f64 = 0.7;
pub const MEDIUM_TRAFFIC_MIN: f64 = 0.4;
pub const FAVORABLE_COMPETITORS_MAX: u8 = 3;
pub const MODERATE_COMPETITORS_MAX: u8 = 6;
pub const FAVORABLE_SCORE_MIN: f64 = 80.0;
pub const MODERATE_SCORE_MIN: f64 = 50.0;

/// Anything under the medium threshold is low, including draws below 0.1.
pub fn classify_traffic(traffic: f64) -> TrafficTier {
    if traffic >= HIGH_TRAFFIC_MIN {
        TrafficTier::High
    } else if traffic >= MEDIUM_TRAFFIC_MIN {
        TrafficTier::Medium
    } else {
        TrafficTier::Low
    }
}

pub fn classify_competition(competitors: u8) -> CompetitionTier {
    if competitors <= FAVORABLE_COMPETITORS_MAX {
        CompetitionTier::Favorable
    } else if competitors <= MODERATE_COMPETITORS_MAX {
        CompetitionTier::Moderate
    } else {
        CompetitionTier::Weak
    }
}

pub fn classify_score(score: f64) -> Recommendation {
    if score >= FAVORABLE_SCORE_MIN {
        Recommendation::Favorable
    } else if score >= MODERATE_SCORE_MIN {
        Recommendation::Moderate
    } else {
        Recommendation::Unfavorable
    }
}
