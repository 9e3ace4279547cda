use std::sync::Arc;

use founder_readiness_lib::models::assessment::{AssessmentRecord, ResponseRecord, ResponseType};
use founder_readiness_lib::models::profile::{
    Archetype, ExperienceLevel, IdeaClarity, MarketUnderstanding, ReadinessLevel, RiskTolerance,
};
use founder_readiness_lib::models::recommendation::{
    FounderProfileView, Priority, StepStatus, SuccessCategory,
};
use founder_readiness_lib::services::assessment_gateway::InMemoryAssessmentGateway;
use founder_readiness_lib::services::recommendation_service::{build_report, RecommendationService};

const FIXED_TIMESTAMP: &str = "2026-02-01T12:00:00+00:00";

fn scale(id: &str, value: &str) -> ResponseRecord {
    ResponseRecord::new(id, ResponseType::Scale, value)
}

fn text(id: &str, value: &str) -> ResponseRecord {
    ResponseRecord::new(id, ResponseType::Text, value)
}

fn multiple_choice(count: usize) -> Vec<ResponseRecord> {
    (0..count)
        .map(|i| ResponseRecord::new(format!("mc{i}"), ResponseType::MultipleChoice, "option"))
        .collect()
}

fn complete_founder() -> Vec<AssessmentRecord> {
    let long_idea =
        "We help independent clinics digitize intake forms with a privacy-first tablet workflow.";
    let long_market =
        "Our interviews with forty clinic managers show that paper intake costs them hours every week and creates compliance exposure they worry about.";

    vec![
        AssessmentRecord::new(
            "Self Discovery Assessment",
            100.0,
            vec![
                scale("risk_1", "5"),
                scale("risk_2", "5"),
                scale("risk_3", "4"),
                scale("risk_4", "4"),
                text("story", "I led a team of nurses and want to build something lasting"),
            ],
        ),
        AssessmentRecord::new(
            "Idea Discovery Assessment",
            100.0,
            vec![
                text("problem", long_idea),
                text("solution", long_idea),
                text("customer", long_idea),
            ],
        ),
        AssessmentRecord::new(
            "Market Research",
            100.0,
            vec![
                text("size", long_market),
                text("competition", long_market),
                text("trends", long_market),
            ],
        ),
        AssessmentRecord::new("Business Pillars Planning", 100.0, multiple_choice(6)),
        AssessmentRecord::new("Business Development", 90.0, multiple_choice(4)),
    ]
}

#[test]
fn complete_founder_profile_and_report() {
    let records = complete_founder();
    let report = build_report("clinic-founder", &records, FIXED_TIMESTAMP);

    let profile = report.founder_profile.assessed().expect("assessed profile");
    assert_eq!(profile.archetype, Archetype::VisionaryLeader);
    assert_eq!(profile.risk_tolerance, RiskTolerance::High);
    assert_eq!(profile.readiness_level, ReadinessLevel::IdeaValidationStage);
    assert_eq!(profile.idea_clarity, Some(IdeaClarity::High));
    assert_eq!(profile.market_understanding, Some(MarketUnderstanding::Advanced));
    assert_eq!(profile.experience_level, ExperienceLevel::Intermediate);

    // 5 phases * 3 = 15, 21 responses / 2 = 10, readiness 15, risk 15, market 15
    let factors = report.success_probability.factors.expect("factors");
    assert_eq!(factors.total(), 70);
    assert_eq!(report.success_probability.score, 95);
    assert_eq!(
        report.success_probability.category,
        SuccessCategory::HighSuccessPotential
    );

    assert!(report.gaps.is_empty());
    assert!(report.risks.is_empty());
    assert_eq!(report.next_steps.len(), 1);
    assert_eq!(report.next_steps[0].status, StepStatus::Recommended);
    assert_eq!(report.ai_confidence, 75);

    let strengths: Vec<&str> = report.strengths.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        strengths,
        vec![
            "Visionary Leader Profile",
            "High Risk Tolerance",
            "Comprehensive Assessment",
            "Advanced Market Understanding",
        ]
    );
    assert!(report.recommendations.is_empty());
}

#[test]
fn required_phases_present_leave_no_completion_gaps() {
    let records = vec![
        AssessmentRecord::new("Self Discovery Assessment", 50.0, multiple_choice(1)),
        AssessmentRecord::new("Idea Discovery Assessment", 50.0, multiple_choice(1)),
        AssessmentRecord::new("Market Research", 50.0, multiple_choice(1)),
        AssessmentRecord::new("Business Pillars Planning", 50.0, multiple_choice(1)),
    ];
    let report = build_report("u", &records, FIXED_TIMESTAMP);

    for phase in [
        "Self Discovery Assessment",
        "Idea Discovery Assessment",
        "Market Research",
        "Business Pillars Planning",
    ] {
        let title = format!("Complete {phase}");
        assert!(report.gaps.iter().all(|gap| gap.title != title), "{title}");
    }
}

#[test]
fn decorated_phase_names_still_satisfy_gap_detection() {
    let records = vec![AssessmentRecord::new(
        "Enhanced Market Research v2",
        50.0,
        multiple_choice(1),
    )];
    let report = build_report("u", &records, FIXED_TIMESTAMP);
    assert!(report
        .gaps
        .iter()
        .all(|gap| gap.title != "Complete Market Research"));
    assert!(report
        .gaps
        .iter()
        .any(|gap| gap.title == "Complete Self Discovery Assessment"));
}

#[test]
fn confidence_climbs_with_response_volume() {
    let mut previous = 0;
    let mut observed = Vec::new();

    for count in 4..=41 {
        let records = vec![AssessmentRecord::new(
            "Market Research",
            50.0,
            multiple_choice(count),
        )];
        let confidence = build_report("u", &records, FIXED_TIMESTAMP).ai_confidence;
        assert!(confidence >= previous, "dropped at {count}");
        previous = confidence;
        observed.push(confidence);
    }

    assert_eq!(observed.first(), Some(&50));
    assert_eq!(observed.last(), Some(&95));
}

#[test]
fn thin_profile_gets_critical_foundation_work() {
    let records = vec![AssessmentRecord::new(
        "Self Discovery Assessment",
        30.0,
        vec![scale("risk_1", "1"), scale("risk_2", "N/A"), scale("risk_3", "2")],
    )];
    let report = build_report("u", &records, FIXED_TIMESTAMP);

    let profile = report.founder_profile.assessed().expect("profile");
    assert_eq!(profile.risk_tolerance, RiskTolerance::Conservative);

    let categories: Vec<&str> = report
        .recommendations
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    // default Innovator archetype, conservative risk
    assert_eq!(categories, vec!["Product Development", "Risk Management"]);
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.priority == Priority::High));
    // 50 + 3 + 1 + 5 + 5 + 5
    assert_eq!(report.success_probability.score, 69);

    let risks: Vec<&str> = report.risks.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        risks,
        vec!["Incomplete Assessment", "Limited Entrepreneurial Experience"]
    );

    assert_eq!(report.next_steps.len(), 4);
    assert_eq!(
        report.next_steps.iter().map(|s| s.step_number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
}

#[test]
fn market_cards_wait_for_market_research() {
    let records = vec![AssessmentRecord::new(
        "Self Discovery Assessment",
        60.0,
        vec![scale("risk_1", "4")],
    )];
    let report = build_report("u", &records, FIXED_TIMESTAMP);

    let profile = report.founder_profile.assessed().expect("profile");
    assert_eq!(profile.market_understanding, None);

    assert!(report.gaps.iter().all(|g| g.title != "Deepen Market Knowledge"));
    assert!(report.risks.iter().all(|r| r.title != "Limited Market Knowledge"));
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.category != "Market Validation"));

    // the unassessed market still scores as Basic
    let factors = report.success_probability.factors.expect("factors");
    assert_eq!(factors.market_knowledge, 5);

    let actions: Vec<&str> = report.next_steps.iter().map(|s| s.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Complete Idea Discovery Assessment",
            "Complete Market Research",
            "Complete Business Pillars Planning",
            "Review AI Executive Summary",
        ]
    );
}

#[test]
fn market_cards_follow_basic_market_research() {
    let records = vec![
        AssessmentRecord::new("Self Discovery Assessment", 60.0, vec![scale("risk_1", "4")]),
        AssessmentRecord::new("Market Research", 40.0, vec![text("size", "small")]),
    ];
    let report = build_report("u", &records, FIXED_TIMESTAMP);

    let profile = report.founder_profile.assessed().expect("profile");
    assert_eq!(profile.market_understanding, Some(MarketUnderstanding::Basic));
    assert!(report.gaps.iter().any(|g| g.title == "Deepen Market Knowledge"));
    assert!(report.risks.iter().any(|r| r.title == "Limited Market Knowledge"));
    assert!(report
        .recommendations
        .iter()
        .any(|r| r.category == "Market Validation"));
}

#[test]
fn onboarding_bundle_for_users_without_data() {
    let gateway = InMemoryAssessmentGateway::new().with_user("empty", vec![]);
    let service = RecommendationService::new(Arc::new(gateway));

    for user in ["empty", "missing"] {
        let report = service.generate_recommendations_at(user, FIXED_TIMESTAMP);
        assert!(report.user_id.is_none());
        assert!(matches!(report.founder_profile, FounderProfileView::Pending(_)));
        assert_eq!(report.success_probability.score, 30);
        assert_eq!(report.success_probability.category, SuccessCategory::NotAssessed);
        assert!(report.strengths.is_empty());
        assert!(report.risks.is_empty());
        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.next_steps.len(), 1);
        assert_eq!(report.ai_confidence, 0);
    }
}

#[test]
fn report_serializes_with_camel_case_contract() {
    let report = build_report("clinic-founder", &complete_founder(), FIXED_TIMESTAMP);
    let value = serde_json::to_value(&report).expect("serialize");

    assert_eq!(value["userId"], "clinic-founder");
    assert_eq!(value["founderProfile"]["archetype"], "Visionary Leader");
    assert_eq!(value["founderProfile"]["riskTolerance"], "High");
    assert_eq!(value["successProbability"]["factors"]["assessmentCompletion"], 15);
    assert_eq!(value["aiConfidence"], 75);
    assert_eq!(value["nextSteps"][0]["stepNumber"], 1);
}
