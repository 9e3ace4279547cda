use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::models::assessment::AssessmentRecord;
use crate::models::recommendation::{
    ActionPlan, FounderProfileView, RecommendationReport, StrengthsView,
};
use crate::services::assessment_gateway::{fetch_snapshot, AssessmentGateway};
use crate::services::fallback_generator;
use crate::services::insight_generator;
use crate::services::profile_analyzer::analyze_profile;
use crate::services::score_aggregator::success_probability;
use crate::services::summary_cache::{CacheOperation, SummaryCache, SummaryCacheKey};

/// Turns a user's assessments into a founder profile and a prioritized plan.
#[derive(Clone)]
pub struct RecommendationService {
    gateway: Arc<dyn AssessmentGateway>,
    cache: Option<Arc<SummaryCache>>,
}

impl RecommendationService {
    pub fn new(gateway: Arc<dyn AssessmentGateway>) -> Self {
        Self {
            gateway,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<SummaryCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn generate_recommendations(&self, user_id: &str) -> RecommendationReport {
        let key = SummaryCacheKey::new(CacheOperation::Recommendations, user_id);
        if let Some(cache) = &self.cache {
            if let Some(report) = cache.get::<RecommendationReport>(&key) {
                return report;
            }
        }

        let report = self.generate_recommendations_at(user_id, &Utc::now().to_rfc3339());

        if let Some(cache) = &self.cache {
            if let Err(err) = cache.put(&key, &report) {
                debug!(target: "app::cache", user_id, error = %err, "report not cached");
            }
        }
        report
    }

    /// Report stamped with `generated_at`; never consults the cache.
    pub fn generate_recommendations_at(
        &self,
        user_id: &str,
        generated_at: &str,
    ) -> RecommendationReport {
        match fetch_snapshot(self.gateway.as_ref(), user_id) {
            Some(records) => build_report(user_id, &records, generated_at),
            None => {
                info!(
                    target: "app::recommendations",
                    user_id,
                    "serving onboarding recommendations"
                );
                fallback_generator::onboarding_recommendations(generated_at)
            }
        }
    }

    pub fn get_user_strengths(&self, user_id: &str) -> StrengthsView {
        StrengthsView::from(&self.generate_recommendations(user_id))
    }

    pub fn get_action_plan(&self, user_id: &str) -> ActionPlan {
        ActionPlan::from(&self.generate_recommendations(user_id))
    }
}

pub fn build_report(
    user_id: &str,
    records: &[AssessmentRecord],
    generated_at: &str,
) -> RecommendationReport {
    let profile = analyze_profile(records);
    let success = success_probability(records, &profile);
    let recommendations = insight_generator::personalized_recommendations(&profile, &success);
    let strengths = insight_generator::identify_strengths(records, &profile);
    let gaps = insight_generator::identify_gaps(records, &profile);
    let next_steps = insight_generator::next_steps(&gaps);
    let risks = insight_generator::assess_risks(records, &profile);
    let ai_confidence = insight_generator::recommendation_confidence(records);

    debug!(
        target: "app::recommendations",
        user_id,
        success_score = success.score,
        gaps = gaps.len(),
        ai_confidence,
        "recommendation report built"
    );

    RecommendationReport {
        user_id: Some(user_id.to_string()),
        generated_at: generated_at.to_string(),
        founder_profile: FounderProfileView::Assessed(profile),
        success_probability: success,
        strengths,
        gaps,
        recommendations,
        next_steps,
        risks,
        ai_confidence,
    }
}
