use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::warn;

use super::domain::{BusinessType, FormInput};
use super::locale::DisplayLocale;
use super::scoring::DrawSource;
use super::service::{AnalysisError, SiteAnalysisService};

/// Router builder exposing the site analysis endpoints.
pub fn siting_router<S>(service: Arc<SiteAnalysisService<S>>) -> Router
where
    S: DrawSource + Send + 'static,
{
    Router::new()
        .route("/api/v1/siting/analyze", post(analyze_handler::<S>))
        .route("/api/v1/siting/business-types", get(business_types_handler::<S>))
        .with_state(service)
}

pub(crate) async fn analyze_handler<S>(
    State(service): State<Arc<SiteAnalysisService<S>>>,
    payload: Result<axum::Json<FormInput>, JsonRejection>,
) -> Response
where
    S: DrawSource + Send + 'static,
{
    let form = match payload {
        Ok(axum::Json(form)) => form,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "site analysis form could not be decoded");
            let payload = json!({
                "errors": { "form": undecodable_form_message(service.locale()) },
            });
            return (rejection.status(), axum::Json(payload)).into_response();
        }
    };

    match service
        .analyze_with_latency(&form, std::future::pending())
        .await
    {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(AnalysisError::Invalid(errors)) => {
            let payload = json!({
                "errors": errors.messages(service.locale()),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, axum::Json(payload)).into_response()
        }
    }
}

fn undecodable_form_message(locale: DisplayLocale) -> &'static str {
    match locale {
        DisplayLocale::English => "the form could not be read; send a JSON object of form fields",
        DisplayLocale::Russian => "Не удалось прочитать форму; отправьте JSON-объект с полями формы",
    }
}

#[derive(Debug, Serialize)]
struct BusinessTypeView {
    key: String,
    label: String,
    multiplier: i32,
}

pub(crate) async fn business_types_handler<S>(
    State(service): State<Arc<SiteAnalysisService<S>>>,
) -> Response
where
    S: DrawSource + Send + 'static,
{
    let locale = service.locale();
    let types: Vec<BusinessTypeView> = BusinessType::KNOWN
        .iter()
        .map(|business_type| BusinessTypeView {
            key: business_type.key().to_string(),
            label: business_type.label(locale).to_string(),
            multiplier: business_type.multiplier(),
        })
        .collect();

    (StatusCode::OK, axum::Json(json!({ "business_types": types }))).into_response()
}
