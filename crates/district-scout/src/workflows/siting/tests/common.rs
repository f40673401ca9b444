use std::sync::Arc;
use std::time::Duration;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::siting::domain::FormInput;
use crate::workflows::siting::locale::DisplayLocale;
use crate::workflows::siting::scoring::{DistrictDraws, DistrictScorer, ScriptedDraws};
use crate::workflows::siting::{siting_router, SiteAnalysisService};

pub(super) fn valid_form() -> FormInput {
    FormInput {
        city: "Moscow".to_string(),
        priorities: ["traffic", "low rent"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        min_area: "40".to_string(),
        max_area: "120".to_string(),
        max_rent: "3500".to_string(),
        avg_check: "300".to_string(),
        business_type: "coffee shop".to_string(),
        districts: "Arbat\nTverskoy\n\nBasmanny\n".to_string(),
    }
}

/// traffic=0.8, competitors=2, rent=2000, area avg check=600, jitter=5.
pub(super) fn moderate_draws() -> DistrictDraws {
    DistrictDraws {
        traffic: 0.8,
        competitors: 2,
        rent: 2000,
        area_avg_check: 600,
        jitter: 5.0,
    }
}

pub(super) fn extreme_draws() -> DistrictDraws {
    DistrictDraws {
        traffic: 1.0,
        competitors: 1,
        rent: 1500,
        area_avg_check: 700,
        jitter: 10.0,
    }
}

pub(super) fn poor_draws() -> DistrictDraws {
    DistrictDraws {
        traffic: 0.05,
        competitors: 10,
        rent: 4000,
        area_avg_check: 300,
        jitter: 0.0,
    }
}

pub(super) fn scripted_service(
    draws: Vec<DistrictDraws>,
    latency: Duration,
) -> SiteAnalysisService<ScriptedDraws> {
    SiteAnalysisService::new(
        DistrictScorer::new(ScriptedDraws::new(draws)),
        DisplayLocale::English,
        latency,
    )
}

pub(super) fn router_with_service(service: SiteAnalysisService<ScriptedDraws>) -> axum::Router {
    siting_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
