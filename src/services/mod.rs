pub mod assessment_gateway;
pub mod confidence_estimator;
pub mod dashboard_service;
pub mod dimension_catalog;
pub mod element_scorer;
pub mod fallback_generator;
pub mod insight_generator;
pub mod profile_analyzer;
pub mod randomness;
pub mod recommendation_service;
pub mod score_aggregator;
pub mod summary_cache;
