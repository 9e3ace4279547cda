use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::dimension::Dimension;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub trend: Trend,
}

impl Metric {
    pub fn new(label: impl Into<String>, value: impl Into<String>, trend: Trend) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            trend,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceKind {
    Assessment,
    AiAnalysis,
    Template,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataSource {
    pub name: String,
    pub percentage: f64,
    #[serde(rename = "type")]
    pub kind: DataSourceKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ElementStatus {
    Excellent,
    Good,
    Fair,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Critical,
    #[serde(rename = "Needs Assessment")]
    NeedsAssessment,
}

impl ElementStatus {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => ElementStatus::Excellent,
            s if s >= 70 => ElementStatus::Good,
            s if s >= 60 => ElementStatus::Fair,
            s if s >= 40 => ElementStatus::NeedsImprovement,
            _ => ElementStatus::Critical,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ElementStatus::Excellent => "Excellent",
            ElementStatus::Good => "Good",
            ElementStatus::Fair => "Fair",
            ElementStatus::NeedsImprovement => "Needs Improvement",
            ElementStatus::Critical => "Critical",
            ElementStatus::NeedsAssessment => "Needs Assessment",
        }
    }
}

impl fmt::Display for ElementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scored view of one business dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ElementScore {
    pub key: Dimension,
    pub title: String,
    pub score: i32,
    pub status: ElementStatus,
    pub definition: String,
    pub what_to_include: String,
    pub metrics: Vec<Metric>,
    pub narrative: String,
    pub confidence: i32,
    pub data_sources: Vec<DataSource>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AiInsights {
    pub overall_assessment: String,
    pub key_strengths: Vec<String>,
    pub growth_opportunities: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveSummary {
    pub component_title: String,
    pub overall_score: i32,
    pub data_completeness: f64,
    pub assessment_count: usize,
    pub generated_at: String,
    pub sub_elements: Vec<ElementScore>,
    pub ai_insights: AiInsights,
}

/// Insights enriched with the headline numbers they were derived from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiInsightsReport {
    #[serde(flatten)]
    pub insights: AiInsights,
    pub overall_score: i32,
    pub data_completeness: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubElementInfo {
    pub key: Dimension,
    pub title: String,
    pub definition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DashboardMetrics {
    #[serde(rename_all = "camelCase")]
    User {
        user_score: i32,
        completeness: f64,
        assessment_count: usize,
    },
    #[serde(rename_all = "camelCase")]
    Aggregate {
        total_users: u32,
        average_score: i32,
        completion_rate: f64,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthComponents {
    pub gateway: String,
    pub scoring_engine: String,
    pub dashboard_generator: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub components: HealthComponents,
}
