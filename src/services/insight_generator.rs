//! Template selection that turns scores and a founder profile into cards,
//! recommendations and next steps.

use crate::models::assessment::{total_responses, AssessmentPhase, AssessmentRecord};
use crate::models::dashboard::AiInsights;
use crate::models::profile::{
    Archetype, ExperienceLevel, FounderProfile, MarketUnderstanding, ReadinessLevel, RiskTolerance,
};
use crate::models::recommendation::{
    GapCard, Impact, NextStep, Priority, Recommendation, RiskCard, Severity, StepStatus,
    StrengthCard, SuccessProbability,
};

/// Phases whose absence always produces a gap card.
pub const REQUIRED_PHASES: [AssessmentPhase; 4] = [
    AssessmentPhase::SelfDiscovery,
    AssessmentPhase::IdeaDiscovery,
    AssessmentPhase::MarketResearch,
    AssessmentPhase::BusinessPillarsPlanning,
];

const COMPREHENSIVE_ASSESSMENT_COUNT: usize = 5;
const MIN_PREPARED_ASSESSMENT_COUNT: usize = 4;
const LOW_SUCCESS_THRESHOLD: i32 = 60;
const MAX_GAP_STEPS: usize = 3;

fn strength(
    title: impl Into<String>,
    description: impl Into<String>,
    impact: Impact,
    icon: &str,
) -> StrengthCard {
    StrengthCard {
        title: title.into(),
        description: description.into(),
        impact,
        icon: icon.to_string(),
    }
}

fn gap(title: impl Into<String>, description: &str, priority: Priority, icon: &str) -> GapCard {
    GapCard {
        title: title.into(),
        description: description.to_string(),
        priority,
        icon: icon.to_string(),
    }
}

pub fn identify_strengths(
    records: &[AssessmentRecord],
    profile: &FounderProfile,
) -> Vec<StrengthCard> {
    let mut strengths = Vec::new();

    if profile.archetype != Archetype::Unknown {
        let label = profile.archetype.label();
        strengths.push(strength(
            format!("{label} Profile"),
            format!(
                "Your {} profile indicates strong capabilities in innovation and strategic thinking.",
                label.to_lowercase()
            ),
            Impact::High,
            "brain",
        ));
    }

    if profile.risk_tolerance == RiskTolerance::High {
        strengths.push(strength(
            "High Risk Tolerance",
            "Your willingness to take calculated risks is essential for entrepreneurial success.",
            Impact::High,
            "trending-up",
        ));
    }

    let assessment_count = records.len();
    if assessment_count >= COMPREHENSIVE_ASSESSMENT_COUNT {
        strengths.push(strength(
            "Comprehensive Assessment",
            format!(
                "You've completed {assessment_count} assessments, showing strong commitment to preparation."
            ),
            Impact::Medium,
            "check-circle",
        ));
    }

    let market = profile.market_level();
    if matches!(market, MarketUnderstanding::Advanced | MarketUnderstanding::Intermediate) {
        strengths.push(strength(
            format!("{} Market Understanding", market.label()),
            "Your market research demonstrates solid understanding of your target audience.",
            Impact::High,
            "target",
        ));
    }

    strengths
}

pub fn identify_gaps(records: &[AssessmentRecord], profile: &FounderProfile) -> Vec<GapCard> {
    let mut gaps = Vec::new();

    for phase in REQUIRED_PHASES.iter() {
        let present = records
            .iter()
            .any(|record| record.phase.name_contains(phase.name()));
        if !present {
            gaps.push(gap(
                format!("Complete {}", phase.name()),
                "This assessment is crucial for validating your entrepreneurial readiness.",
                Priority::High,
                "alert-circle",
            ));
        }
    }

    if profile.readiness_level == ReadinessLevel::EarlyStage {
        gaps.push(gap(
            "Strengthen Business Foundation",
            "Focus on developing a clear value proposition and market positioning.",
            Priority::High,
            "build",
        ));
    }

    if profile.market_understanding == Some(MarketUnderstanding::Basic) {
        gaps.push(gap(
            "Deepen Market Knowledge",
            "Conduct more thorough competitive analysis and customer research.",
            Priority::Medium,
            "search",
        ));
    }

    gaps
}

fn recommendation(
    category: &str,
    title: &str,
    description: &str,
    priority: Priority,
    timeframe: &str,
    resources: &[&str],
) -> Recommendation {
    Recommendation {
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        timeframe: timeframe.to_string(),
        resources: resources.iter().map(|r| r.to_string()).collect(),
    }
}

pub fn personalized_recommendations(
    profile: &FounderProfile,
    success: &SuccessProbability,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    let archetype = profile.archetype.label();
    if archetype.contains("Tech") || archetype.contains("Innovator") {
        recommendations.push(recommendation(
            "Product Development",
            "Leverage Your Technical Expertise",
            "Focus on building an MVP that showcases your technical innovation. Start with core features that solve a specific problem.",
            Priority::High,
            "1-2 months",
            &["Y Combinator Startup School", "Lean Startup methodology"],
        ));
    }

    if profile.risk_tolerance == RiskTolerance::Conservative {
        recommendations.push(recommendation(
            "Risk Management",
            "Build Safety Nets",
            "Given your conservative risk profile, focus on maintaining financial stability while building your business part-time initially.",
            Priority::High,
            "Ongoing",
            &["Side Hustle strategies", "Bootstrap funding guides"],
        ));
    }

    if success.score < LOW_SUCCESS_THRESHOLD {
        recommendations.push(recommendation(
            "Founder Readiness",
            "Strengthen Your Foundation",
            "Complete remaining assessments to gain deeper insights into your entrepreneurial journey and increase success probability.",
            Priority::Critical,
            "2-3 weeks",
            &["Complete all 7 assessment phases"],
        ));
    }

    if matches!(
        profile.market_understanding,
        Some(MarketUnderstanding::Basic | MarketUnderstanding::Intermediate)
    ) {
        recommendations.push(recommendation(
            "Market Validation",
            "Conduct Customer Interviews",
            "Speak with 20-30 potential customers to validate your assumptions and refine your value proposition.",
            Priority::High,
            "3-4 weeks",
            &["The Mom Test by Rob Fitzpatrick", "Customer discovery templates"],
        ));
    }

    recommendations
}

fn risk(
    category: &str,
    title: &str,
    description: &str,
    severity: Severity,
    mitigation: &str,
) -> RiskCard {
    RiskCard {
        category: category.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        severity,
        mitigation: mitigation.to_string(),
    }
}

pub fn assess_risks(records: &[AssessmentRecord], profile: &FounderProfile) -> Vec<RiskCard> {
    let mut risks = Vec::new();

    if records.len() < MIN_PREPARED_ASSESSMENT_COUNT {
        risks.push(risk(
            "Preparation Risk",
            "Incomplete Assessment",
            "Limited assessment data may lead to blind spots in your business planning.",
            Severity::Medium,
            "Complete all 7 assessment phases for comprehensive insights.",
        ));
    }

    if profile.market_understanding == Some(MarketUnderstanding::Basic) {
        risks.push(risk(
            "Market Risk",
            "Limited Market Knowledge",
            "Insufficient market research may result in poor product-market fit.",
            Severity::High,
            "Conduct thorough competitive analysis and customer validation.",
        ));
    }

    if profile.experience_level == ExperienceLevel::Beginner {
        risks.push(risk(
            "Experience Gap",
            "Limited Entrepreneurial Experience",
            "First-time founders face a steep learning curve.",
            Severity::Medium,
            "Seek mentorship and join entrepreneur communities.",
        ));
    }

    risks
}

/// Top gaps as numbered steps, closed by a dashboard review step.
pub fn next_steps(gaps: &[GapCard]) -> Vec<NextStep> {
    let mut steps: Vec<NextStep> = gaps
        .iter()
        .take(MAX_GAP_STEPS)
        .enumerate()
        .map(|(index, gap)| NextStep {
            step_number: index + 1,
            action: gap.title.clone(),
            description: gap.description.clone(),
            estimated_time: "1-2 weeks".to_string(),
            status: StepStatus::Pending,
        })
        .collect();

    steps.push(NextStep {
        step_number: steps.len() + 1,
        action: "Review AI Executive Summary".to_string(),
        description:
            "Analyze your comprehensive business readiness dashboard for detailed insights."
                .to_string(),
        estimated_time: "30 minutes".to_string(),
        status: StepStatus::Recommended,
    });

    steps
}

/// Confidence in the recommendation bundle, bucketed on answer volume.
pub fn recommendation_confidence(records: &[AssessmentRecord]) -> i32 {
    match total_responses(records) {
        n if n >= 40 => 95,
        n if n >= 25 => 85,
        n if n >= 15 => 75,
        n if n >= 5 => 65,
        _ => 50,
    }
}

pub fn dashboard_insights(records: &[AssessmentRecord], overall_score: i32) -> AiInsights {
    let mut key_strengths = Vec::new();
    let mut growth_opportunities = Vec::new();

    if overall_score >= 70 {
        key_strengths.push("Strong strategic thinking and planning capabilities".to_string());
        key_strengths.push("Well-developed business acumen and market awareness".to_string());
    }

    if records.len() >= COMPREHENSIVE_ASSESSMENT_COUNT {
        key_strengths
            .push("Comprehensive assessment completion demonstrates commitment".to_string());
    }

    if overall_score < 60 {
        growth_opportunities.push("Focus on completing remaining assessment phases".to_string());
        growth_opportunities.push("Develop detailed business plan documentation".to_string());
    }

    let outlook = if overall_score >= 70 {
        "strong potential"
    } else if overall_score >= 50 {
        "good foundation with room for growth"
    } else {
        "early-stage development"
    };

    AiInsights {
        overall_assessment: format!(
            "Your business readiness score of {overall_score}/100 indicates {outlook}."
        ),
        key_strengths,
        growth_opportunities,
        next_steps: vec![
            "Complete any remaining assessment phases".to_string(),
            "Focus on areas with lowest scores".to_string(),
            "Develop detailed implementation plans".to_string(),
        ],
    }
}
