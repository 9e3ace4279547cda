//! Fixed bundles returned when a user has no usable assessment data.

use crate::models::dashboard::{
    AiInsights, DataSource, DataSourceKind, ElementScore, ElementStatus, ExecutiveSummary, Metric,
    Trend,
};
use crate::models::dimension::Dimension;
use crate::models::recommendation::{
    FounderProfileView, GapCard, NextStep, PendingProfile, Priority, Recommendation,
    RecommendationReport, StepStatus, SuccessCategory, SuccessProbability,
};
use crate::services::confidence_estimator::NO_DATA_CONFIDENCE;
use crate::services::dimension_catalog;

pub const DASHBOARD_TITLE: &str = "Executive Summary Dashboard";
pub const FALLBACK_OVERALL_SCORE: i32 = 32;
pub const ONBOARDING_SUCCESS_SCORE: i32 = 30;

const FALLBACK_BASE_SCORE: i32 = 30;
const FALLBACK_SCORE_STEP: i32 = 2;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Placeholder element; scores step up with the dimension's presentation position.
pub fn fallback_element(dimension: Dimension) -> ElementScore {
    let template = dimension_catalog::template(dimension);
    let index = i32::try_from(dimension.position()).unwrap_or_default();

    ElementScore {
        key: dimension,
        title: template.title.to_string(),
        score: FALLBACK_BASE_SCORE + FALLBACK_SCORE_STEP * index,
        status: ElementStatus::NeedsAssessment,
        definition: template.definition.to_string(),
        what_to_include: template.what_to_include.to_string(),
        metrics: vec![
            Metric::new("Data Completeness", "0%", Trend::Neutral),
            Metric::new("Assessment Status", "Pending", Trend::Neutral),
        ],
        narrative: format!(
            "No assessment data available for {}. Complete relevant assessments to receive personalized AI insights and recommendations.",
            template.title
        ),
        confidence: NO_DATA_CONFIDENCE,
        data_sources: vec![DataSource {
            name: "Default Template".to_string(),
            percentage: 100.0,
            kind: DataSourceKind::Template,
        }],
        improvements: to_strings(&[
            "Complete relevant assessment phases",
            "Provide detailed responses to questions",
            "Review and update assessment data regularly",
        ]),
    }
}

pub fn fallback_insights() -> AiInsights {
    AiInsights {
        overall_assessment:
            "No assessment data available. Complete assessments to receive AI-generated business insights."
                .to_string(),
        key_strengths: to_strings(&["Ready to start entrepreneurial journey"]),
        growth_opportunities: to_strings(&["Complete comprehensive business assessments"]),
        next_steps: to_strings(&[
            "Begin with Self Discovery Assessment",
            "Complete all seven assessment phases",
            "Review AI-generated insights regularly",
        ]),
    }
}

pub fn fallback_summary(generated_at: impl Into<String>) -> ExecutiveSummary {
    ExecutiveSummary {
        component_title: DASHBOARD_TITLE.to_string(),
        overall_score: FALLBACK_OVERALL_SCORE,
        data_completeness: 0.0,
        assessment_count: 0,
        generated_at: generated_at.into(),
        sub_elements: Dimension::ALL.into_iter().map(fallback_element).collect(),
        ai_insights: fallback_insights(),
    }
}

pub fn onboarding_recommendations(generated_at: impl Into<String>) -> RecommendationReport {
    RecommendationReport {
        user_id: None,
        generated_at: generated_at.into(),
        founder_profile: FounderProfileView::Pending(PendingProfile {
            archetype: "Not Yet Assessed".to_string(),
            readiness_level: "Pre-Assessment".to_string(),
            message: "Complete assessments to receive personalized AI recommendations".to_string(),
        }),
        success_probability: SuccessProbability {
            score: ONBOARDING_SUCCESS_SCORE,
            category: SuccessCategory::NotAssessed,
            factors: None,
            message: Some(
                "Begin your journey by completing the Self Discovery Assessment".to_string(),
            ),
        },
        strengths: Vec::new(),
        gaps: vec![GapCard {
            title: "Start Your Assessment Journey".to_string(),
            description:
                "Complete the Self Discovery Assessment to unlock personalized AI insights."
                    .to_string(),
            priority: Priority::Critical,
            icon: "play-circle".to_string(),
        }],
        recommendations: vec![Recommendation {
            category: "Getting Started".to_string(),
            title: "Begin with Self Discovery".to_string(),
            description:
                "Understand your entrepreneurial profile, strengths, and motivations.".to_string(),
            priority: Priority::Critical,
            timeframe: "30-45 minutes".to_string(),
            resources: to_strings(&["Self Discovery Assessment"]),
        }],
        next_steps: vec![NextStep {
            step_number: 1,
            action: "Complete Self Discovery Assessment".to_string(),
            description:
                "Start your entrepreneurial journey with a comprehensive self-assessment."
                    .to_string(),
            estimated_time: "30-45 minutes".to_string(),
            status: StepStatus::Pending,
        }],
        risks: Vec::new(),
        ai_confidence: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_summary_shape() {
        let summary = fallback_summary("2026-01-01T00:00:00Z");
        assert_eq!(summary.overall_score, 32);
        assert_eq!(summary.data_completeness, 0.0);
        assert_eq!(summary.assessment_count, 0);
        assert_eq!(summary.sub_elements.len(), 9);

        let scores: Vec<i32> = summary.sub_elements.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 32, 34, 36, 38, 40, 42, 44, 46]);

        for element in &summary.sub_elements {
            assert_eq!(element.status, ElementStatus::NeedsAssessment);
            assert_eq!(element.confidence, 45);
            assert_eq!(element.data_sources.len(), 1);
            assert_eq!(element.data_sources[0].kind, DataSourceKind::Template);
            assert!(element.narrative.contains(&element.title));
        }
    }

    #[test]
    fn onboarding_bundle_shape() {
        let report = onboarding_recommendations("2026-01-01T00:00:00Z");
        assert!(report.user_id.is_none());
        assert!(report.founder_profile.assessed().is_none());
        assert_eq!(report.success_probability.score, 30);
        assert_eq!(report.success_probability.category, SuccessCategory::NotAssessed);
        assert!(report.strengths.is_empty());
        assert!(report.risks.is_empty());
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.next_steps.len(), 1);
        assert_eq!(report.ai_confidence, 0);
    }

    #[test]
    fn onboarding_serializes_pending_profile() {
        let value = serde_json::to_value(onboarding_recommendations("t")).unwrap();
        assert_eq!(value["founderProfile"]["archetype"], "Not Yet Assessed");
        assert_eq!(value["successProbability"]["category"], "Not Assessed");
        assert!(value["successProbability"].get("factors").is_none());
        assert!(value["userId"].is_null());
    }
}
