use tracing::debug;

use crate::models::assessment::{AssessmentPhase, AssessmentRecord};
use crate::models::profile::{
    Archetype, ExperienceLevel, FounderProfile, IdeaClarity, MarketUnderstanding,
    MotivationType, ProfileUpdate, ReadinessLevel, RiskTolerance,
};

const DEFAULT_SCALE_AVERAGE: f64 = 3.0;
const CLEAR_IDEA_MIN_CHARS: usize = 50;
const CLEAR_IDEA_MIN_RESPONSES: usize = 3;
const DETAILED_MARKET_MIN_CHARS: usize = 100;

/// Archetype keywords checked in priority order; the first group with any hit wins.
const ARCHETYPE_KEYWORDS: [(&[&str], Archetype); 3] = [
    (&["technology", "innovation"], Archetype::TechInnovator),
    (&["leadership", "team"], Archetype::VisionaryLeader),
    (&["analytical", "data"], Archetype::StrategicAnalyst),
];

/// Builds a founder profile from the phases that inform it. Later phases
/// overwrite whatever earlier ones or the defaults set.
pub fn analyze_profile(records: &[AssessmentRecord]) -> FounderProfile {
    let mut profile = FounderProfile::default();

    if let Some(record) = find_phase(records, &AssessmentPhase::SelfDiscovery) {
        profile.apply(analyze_self_discovery(record));
    }

    if let Some(record) = find_phase(records, &AssessmentPhase::IdeaDiscovery) {
        profile.apply(analyze_idea_discovery(record));
    }

    if let Some(record) = find_phase(records, &AssessmentPhase::MarketResearch) {
        profile.apply(analyze_market_research(record));
    }

    debug!(
        target: "app::scoring",
        archetype = %profile.archetype,
        risk = %profile.risk_tolerance,
        readiness = %profile.readiness_level,
        "founder profile analyzed"
    );

    profile
}

/// First record whose phase name contains the phase keyword.
fn find_phase<'a>(
    records: &'a [AssessmentRecord],
    phase: &AssessmentPhase,
) -> Option<&'a AssessmentRecord> {
    records
        .iter()
        .find(|record| record.phase.name_contains(phase.keyword()))
}

pub fn analyze_self_discovery(record: &AssessmentRecord) -> ProfileUpdate {
    let average = scale_average(record).unwrap_or(DEFAULT_SCALE_AVERAGE);

    let (risk_tolerance, motivation_type) = if average >= 4.0 {
        (RiskTolerance::High, MotivationType::InnovationDriven)
    } else if average >= 3.0 {
        (RiskTolerance::Medium, MotivationType::StabilitySeeking)
    } else {
        (RiskTolerance::Conservative, MotivationType::StabilitySeeking)
    };

    ProfileUpdate {
        archetype: Some(detect_archetype(record)),
        risk_tolerance: Some(risk_tolerance),
        motivation_type: Some(motivation_type),
        ..ProfileUpdate::default()
    }
}

pub fn analyze_idea_discovery(record: &AssessmentRecord) -> ProfileUpdate {
    let detailed = record
        .text_responses()
        .filter(|response| response.char_len() > CLEAR_IDEA_MIN_CHARS)
        .count();

    let has_clear_idea = detailed >= CLEAR_IDEA_MIN_RESPONSES;

    ProfileUpdate {
        readiness_level: Some(if has_clear_idea {
            ReadinessLevel::IdeaValidationStage
        } else {
            ReadinessLevel::IdeationStage
        }),
        idea_clarity: Some(if has_clear_idea {
            IdeaClarity::High
        } else {
            IdeaClarity::Developing
        }),
        ..ProfileUpdate::default()
    }
}

pub fn analyze_market_research(record: &AssessmentRecord) -> ProfileUpdate {
    let detailed = record
        .text_responses()
        .filter(|response| response.char_len() > DETAILED_MARKET_MIN_CHARS)
        .count();

    let market_understanding = match detailed {
        n if n >= 3 => MarketUnderstanding::Advanced,
        n if n >= 1 => MarketUnderstanding::Intermediate,
        _ => MarketUnderstanding::Basic,
    };

    let experience_level = if detailed >= 2 {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Beginner
    };

    ProfileUpdate {
        market_understanding: Some(market_understanding),
        experience_level: Some(experience_level),
        ..ProfileUpdate::default()
    }
}

/// Mean of the scale answers that are plain digit strings.
fn scale_average(record: &AssessmentRecord) -> Option<f64> {
    let values: Vec<u32> = record
        .responses
        .iter()
        .filter_map(|response| response.scale_value())
        .collect();

    if values.is_empty() {
        return None;
    }

    Some(values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64)
}

fn detect_archetype(record: &AssessmentRecord) -> Archetype {
    let texts: Vec<String> = record
        .text_responses()
        .map(|response| response.value.to_lowercase())
        .collect();

    ARCHETYPE_KEYWORDS
        .iter()
        .find(|(keywords, _)| {
            texts
                .iter()
                .any(|text| keywords.iter().any(|keyword| text.contains(keyword)))
        })
        .map(|(_, archetype)| *archetype)
        .unwrap_or(Archetype::Innovator)
}
