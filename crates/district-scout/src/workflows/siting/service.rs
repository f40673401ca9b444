use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use rand_chacha::ChaCha8Rng;
use tracing::{info, warn};

use super::domain::FormInput;
use super::locale::DisplayLocale;
use super::ranking::rank_districts;
use super::report::AnalysisReport;
use super::scoring::{DistrictScorer, DrawSource, RandomDraws};
use super::validation::{FieldErrors, SiteCriteria};
use crate::config::AnalysisConfig;

/// Service backed by the ChaCha generator, as built from configuration.
pub type RandomAnalysisService = SiteAnalysisService<RandomDraws<ChaCha8Rng>>;

/// Service composing validation, scoring, ranking, and report building.
pub struct SiteAnalysisService<S> {
    scorer: Mutex<DistrictScorer<S>>,
    locale: DisplayLocale,
    latency: Duration,
}

impl RandomAnalysisService {
    /// Builds a service from configuration, seeding the draws when asked to.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let scorer = match config.seed {
            Some(seed) => DistrictScorer::seeded(seed),
            None => DistrictScorer::from_entropy(),
        };
        Self::new(scorer, config.locale, config.latency())
    }
}

impl<S: DrawSource> SiteAnalysisService<S> {
    pub fn new(scorer: DistrictScorer<S>, locale: DisplayLocale, latency: Duration) -> Self {
        Self {
            scorer: Mutex::new(scorer),
            locale,
            latency,
        }
    }

    pub fn locale(&self) -> DisplayLocale {
        self.locale
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Validate and score immediately.
    pub fn analyze(&self, form: &FormInput) -> Result<AnalysisReport, AnalysisError> {
        let criteria = self.criteria(form)?;
        Ok(self.score_criteria(&criteria))
    }

    /// Validate immediately, wait out the simulated latency, then score.
    ///
    /// Resolving `cancel` during the wait abandons the run before any draws are taken.
    pub async fn analyze_with_latency<C>(
        &self,
        form: &FormInput,
        cancel: C,
    ) -> Result<AnalysisReport, AnalysisError>
    where
        C: Future<Output = ()>,
    {
        let criteria = self.criteria(form)?;

        tokio::select! {
            _ = tokio::time::sleep(self.latency) => {}
            _ = cancel => {
                warn!(city = %criteria.city, "site analysis cancelled");
                return Err(AnalysisError::Cancelled);
            }
        }

        Ok(self.score_criteria(&criteria))
    }

    fn criteria(&self, form: &FormInput) -> Result<SiteCriteria, AnalysisError> {
        SiteCriteria::from_form(form).map_err(|errors| {
            info!(failed_fields = errors.len(), "site analysis rejected");
            AnalysisError::Invalid(errors)
        })
    }

    fn score_criteria(&self, criteria: &SiteCriteria) -> AnalysisReport {
        let records = {
            let mut scorer = self.scorer.lock().unwrap_or_else(PoisonError::into_inner);
            scorer.score(
                &criteria.districts,
                &criteria.business_type,
                criteria.avg_check,
            )
        };

        let ranked = rank_districts(records);
        info!(
            city = %criteria.city,
            business_type = criteria.business_type.key(),
            districts = ranked.len(),
            best_score = ranked.best().map(|record| record.score),
            "site analysis completed"
        );

        AnalysisReport::build(criteria, &ranked, self.locale)
    }
}

/// Error raised by the site analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("form validation failed: {0}")]
    Invalid(FieldErrors),
    #[error("analysis cancelled before scoring")]
    Cancelled,
}
