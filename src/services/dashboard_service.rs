use std::sync::Arc;

use chrono::Utc;
use rand::RngCore;
use tracing::{debug, info};

use crate::models::assessment::AssessmentRecord;
use crate::models::dashboard::{
    AiInsightsReport, DashboardMetrics, ElementScore, ExecutiveSummary, HealthComponents,
    HealthReport, SubElementInfo,
};
use crate::models::dimension::Dimension;
use crate::services::assessment_gateway::{fetch_snapshot, AssessmentGateway};
use crate::services::dimension_catalog;
use crate::services::element_scorer::ElementScorer;
use crate::services::fallback_generator::{self, DASHBOARD_TITLE};
use crate::services::insight_generator;
use crate::services::randomness::RandomSource;
use crate::services::score_aggregator::{self, NO_DATA_SCORE};
use crate::services::summary_cache::{CacheOperation, SummaryCache, SummaryCacheKey};

const HEALTH_SERVICE_NAME: &str = "executive-summary-dashboard";
const AGGREGATE_TOTAL_USERS: u32 = 1;
const AGGREGATE_AVERAGE_SCORE: i32 = 65;
const AGGREGATE_COMPLETION_RATE: f64 = 0.7;

/// Builds executive summary dashboards from a user's assessment snapshot.
#[derive(Clone)]
pub struct DashboardService {
    gateway: Arc<dyn AssessmentGateway>,
    scorer: ElementScorer,
    random: RandomSource,
    cache: Option<Arc<SummaryCache>>,
}

impl DashboardService {
    pub fn new(gateway: Arc<dyn AssessmentGateway>) -> Self {
        Self {
            gateway,
            scorer: ElementScorer::default(),
            random: RandomSource::default(),
            cache: None,
        }
    }

    pub fn with_random_source(mut self, random: RandomSource) -> Self {
        self.random = random;
        self
    }

    pub fn with_scorer(mut self, scorer: ElementScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_cache(mut self, cache: Arc<SummaryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    fn cache_key(user_id: &str) -> SummaryCacheKey {
        SummaryCacheKey::new(CacheOperation::ExecutiveSummary, user_id)
    }

    /// Summary for `user_id`, served from the cache when one is attached and fresh.
    pub fn generate_executive_summary(&self, user_id: &str) -> ExecutiveSummary {
        if let Some(cache) = &self.cache {
            if let Some(summary) = cache.get::<ExecutiveSummary>(&Self::cache_key(user_id)) {
                return summary;
            }
        }
        self.generate_uncached(user_id)
    }

    /// Regenerates the summary, discarding whatever was cached for the user.
    pub fn refresh_dashboard_data(&self, user_id: &str) -> ExecutiveSummary {
        if let Some(cache) = &self.cache {
            cache.invalidate(user_id);
        }
        info!(target: "app::dashboard", user_id, "refreshing dashboard data");
        self.generate_uncached(user_id)
    }

    fn generate_uncached(&self, user_id: &str) -> ExecutiveSummary {
        let mut rng = self.random.rng();
        let generated_at = Utc::now().to_rfc3339();
        let summary = self.generate_executive_summary_with(user_id, &mut rng, &generated_at);

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.put(&Self::cache_key(user_id), &summary) {
                debug!(target: "app::cache", user_id, error = %err, "summary not cached");
            }
        }
        summary
    }

    /// Summary built with an explicit generator and timestamp; never consults the cache.
    pub fn generate_executive_summary_with(
        &self,
        user_id: &str,
        rng: &mut dyn RngCore,
        generated_at: &str,
    ) -> ExecutiveSummary {
        match fetch_snapshot(self.gateway.as_ref(), user_id) {
            Some(records) => self.build_summary(&records, rng, generated_at),
            None => {
                info!(target: "app::dashboard", user_id, "serving fallback executive summary");
                fallback_generator::fallback_summary(generated_at)
            }
        }
    }

    pub fn build_summary(
        &self,
        records: &[AssessmentRecord],
        rng: &mut dyn RngCore,
        generated_at: &str,
    ) -> ExecutiveSummary {
        let overall = score_aggregator::compute_overall_score(records);

        let sub_elements = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                self.scorer
                    .compute_element_score(dimension, records, overall.score, rng)
            })
            .collect();

        debug!(
            target: "app::dashboard",
            overall_score = overall.score,
            completeness = overall.completeness,
            assessments = records.len(),
            "executive summary built"
        );

        ExecutiveSummary {
            component_title: DASHBOARD_TITLE.to_string(),
            overall_score: overall.score,
            data_completeness: overall.completeness,
            assessment_count: records.len(),
            generated_at: generated_at.to_string(),
            sub_elements,
            ai_insights: insight_generator::dashboard_insights(records, overall.score),
        }
    }

    /// One dimension of the user's summary, addressed by key or by its
    /// snake-cased title.
    pub fn get_sub_element_details(
        &self,
        user_id: &str,
        element_key: &str,
    ) -> Option<ElementScore> {
        let requested = element_key.trim().to_lowercase();
        self.generate_executive_summary(user_id)
            .sub_elements
            .into_iter()
            .find(|element| {
                element.key.key() == requested
                    || element.title.to_lowercase().replace(' ', "_") == requested
            })
    }

    pub fn list_sub_elements(&self) -> Vec<SubElementInfo> {
        Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let template = dimension_catalog::template(dimension);
                SubElementInfo {
                    key: dimension,
                    title: template.title.to_string(),
                    definition: template.definition.to_string(),
                }
            })
            .collect()
    }

    pub fn get_dashboard_metrics(&self, user_id: Option<&str>) -> DashboardMetrics {
        match user_id {
            Some(user_id) => {
                let summary = self.generate_executive_summary(user_id);
                DashboardMetrics::User {
                    user_score: summary.overall_score,
                    completeness: summary.data_completeness,
                    assessment_count: summary.assessment_count,
                }
            }
            None => DashboardMetrics::Aggregate {
                total_users: AGGREGATE_TOTAL_USERS,
                average_score: AGGREGATE_AVERAGE_SCORE,
                completion_rate: AGGREGATE_COMPLETION_RATE,
            },
        }
    }

    pub fn get_ai_insights(&self, user_id: &str) -> AiInsightsReport {
        let summary = self.generate_executive_summary(user_id);
        AiInsightsReport {
            insights: summary.ai_insights,
            overall_score: summary.overall_score,
            data_completeness: summary.data_completeness,
        }
    }

    pub fn health_check(&self) -> HealthReport {
        let gateway_ok = self.gateway.is_available();
        let scoring_ok = score_aggregator::compute_overall_score(&[]).score == NO_DATA_SCORE;
        let generator_ok =
            fallback_generator::fallback_summary("").sub_elements.len() == Dimension::ALL.len();

        let status = if gateway_ok && scoring_ok && generator_ok {
            "healthy"
        } else {
            "unhealthy"
        };

        HealthReport {
            status: status.to_string(),
            service: HEALTH_SERVICE_NAME.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            components: HealthComponents {
                gateway: if gateway_ok { "connected" } else { "unavailable" }.to_string(),
                scoring_engine: if scoring_ok { "operational" } else { "failing" }.to_string(),
                dashboard_generator: if generator_ok { "functional" } else { "failing" }
                    .to_string(),
            },
        }
    }
}
