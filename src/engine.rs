use std::sync::Arc;

use tracing::info;

use crate::config::EngineConfig;
use crate::db::DbPool;
use crate::error::AppResult;
use crate::services::assessment_gateway::{AssessmentGateway, SqliteAssessmentGateway};
use crate::services::dashboard_service::DashboardService;
use crate::services::randomness::RandomSource;
use crate::services::recommendation_service::RecommendationService;
use crate::services::summary_cache::SummaryCache;

/// Dashboard and recommendation services wired to one gateway and a shared cache.
#[derive(Clone)]
pub struct ReadinessEngine {
    dashboard: Arc<DashboardService>,
    recommendations: Arc<RecommendationService>,
    cache: Arc<SummaryCache>,
}

impl ReadinessEngine {
    /// Opens the SQLite database named by the configuration.
    pub fn from_config(config: &EngineConfig) -> AppResult<Self> {
        let pool = DbPool::new(config.db_path.clone())?;
        let gateway: Arc<dyn AssessmentGateway> = Arc::new(SqliteAssessmentGateway::new(pool));
        Ok(Self::with_gateway(gateway, config))
    }

    pub fn with_gateway(gateway: Arc<dyn AssessmentGateway>, config: &EngineConfig) -> Self {
        let cache = Arc::new(SummaryCache::new(config.cache_capacity, config.cache_ttl));
        let random = RandomSource::from_seed(config.random_seed);

        info!(
            target: "app::scoring",
            seeded = config.random_seed.is_some(),
            cache_capacity = config.cache_capacity,
            cache_ttl_secs = config.cache_ttl.num_seconds(),
            "readiness engine ready"
        );

        let dashboard = DashboardService::new(Arc::clone(&gateway))
            .with_random_source(random)
            .with_cache(Arc::clone(&cache));
        let recommendations =
            RecommendationService::new(gateway).with_cache(Arc::clone(&cache));

        Self {
            dashboard: Arc::new(dashboard),
            recommendations: Arc::new(recommendations),
            cache,
        }
    }

    pub fn dashboard(&self) -> &DashboardService {
        &self.dashboard
    }

    pub fn recommendations(&self) -> &RecommendationService {
        &self.recommendations
    }

    pub fn cache(&self) -> &SummaryCache {
        &self.cache
    }

    /// Forgets every cached report for the user, e.g. after new answers were stored.
    pub fn invalidate_user(&self, user_id: &str) -> usize {
        self.cache.invalidate(user_id)
    }
}
