use serde::{Deserialize, Serialize};

use crate::models::profile::FounderProfile;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Recommended,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SuccessCategory {
    #[serde(rename = "High Success Potential")]
    HighSuccessPotential,
    #[serde(rename = "Strong Foundation")]
    StrongFoundation,
    #[serde(rename = "Growing Potential")]
    GrowingPotential,
    #[serde(rename = "Building Phase")]
    BuildingPhase,
    #[serde(rename = "Not Assessed")]
    NotAssessed,
}

impl SuccessCategory {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => SuccessCategory::HighSuccessPotential,
            s if s >= 65 => SuccessCategory::StrongFoundation,
            s if s >= 50 => SuccessCategory::GrowingPotential,
            _ => SuccessCategory::BuildingPhase,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthCard {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GapCard {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub timeframe: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RiskCard {
    pub category: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub mitigation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NextStep {
    pub step_number: usize,
    pub action: String,
    pub description: String,
    pub estimated_time: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessFactors {
    pub assessment_completion: i32,
    pub response_quality: i32,
    pub founder_readiness: i32,
    pub risk_alignment: i32,
    pub market_knowledge: i32,
}

impl SuccessFactors {
    pub fn total(&self) -> i32 {
        self.assessment_completion
            + self.response_quality
            + self.founder_readiness
            + self.risk_alignment
            + self.market_knowledge
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessProbability {
    pub score: i32,
    pub category: SuccessCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<SuccessFactors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Placeholder profile reported before any assessment exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingProfile {
    pub archetype: String,
    pub readiness_level: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FounderProfileView {
    Assessed(FounderProfile),
    Pending(PendingProfile),
}

impl FounderProfileView {
    pub fn assessed(&self) -> Option<&FounderProfile> {
        match self {
            FounderProfileView::Assessed(profile) => Some(profile),
            FounderProfileView::Pending(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub user_id: Option<String>,
    pub generated_at: String,
    pub founder_profile: FounderProfileView,
    pub success_probability: SuccessProbability,
    pub strengths: Vec<StrengthCard>,
    pub gaps: Vec<GapCard>,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<NextStep>,
    pub risks: Vec<RiskCard>,
    pub ai_confidence: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrengthsView {
    pub strengths: Vec<StrengthCard>,
    pub founder_profile: FounderProfileView,
    pub ai_confidence: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub gaps: Vec<GapCard>,
    pub next_steps: Vec<NextStep>,
    pub recommendations: Vec<Recommendation>,
    pub success_probability: SuccessProbability,
}

impl From<&RecommendationReport> for StrengthsView {
    fn from(report: &RecommendationReport) -> Self {
        Self {
            strengths: report.strengths.clone(),
            founder_profile: report.founder_profile.clone(),
            ai_confidence: report.ai_confidence,
        }
    }
}

impl From<&RecommendationReport> for ActionPlan {
    fn from(report: &RecommendationReport) -> Self {
        Self {
            gaps: report.gaps.clone(),
            next_steps: report.next_steps.clone(),
            recommendations: report.recommendations.clone(),
            success_probability: report.success_probability.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_buckets() {
        assert_eq!(SuccessCategory::from_score(95), SuccessCategory::HighSuccessPotential);
        assert_eq!(SuccessCategory::from_score(80), SuccessCategory::HighSuccessPotential);
        assert_eq!(SuccessCategory::from_score(79), SuccessCategory::StrongFoundation);
        assert_eq!(SuccessCategory::from_score(65), SuccessCategory::StrongFoundation);
        assert_eq!(SuccessCategory::from_score(64), SuccessCategory::GrowingPotential);
        assert_eq!(SuccessCategory::from_score(50), SuccessCategory::GrowingPotential);
        assert_eq!(SuccessCategory::from_score(49), SuccessCategory::BuildingPhase);
    }

    #[test]
    fn factors_sum() {
        let factors = SuccessFactors {
            assessment_completion: 12,
            response_quality: 10,
            founder_readiness: 15,
            risk_alignment: 10,
            market_knowledge: 5,
        };
        assert_eq!(factors.total(), 52);
    }
}
