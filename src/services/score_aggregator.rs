use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::assessment::{total_responses, AssessmentPhase, AssessmentRecord};
use crate::models::profile::{FounderProfile, MarketUnderstanding, ReadinessLevel, RiskTolerance};
use crate::models::recommendation::{SuccessCategory, SuccessFactors, SuccessProbability};

pub const NO_DATA_SCORE: i32 = 30;
pub const ZERO_WEIGHT_SCORE: i32 = 35;
pub const OVERALL_MIN: i32 = 20;
pub const OVERALL_MAX: i32 = 95;
pub const SUCCESS_MIN: i32 = 35;
pub const SUCCESS_MAX: i32 = 95;

const UNKNOWN_PHASE_WEIGHT: f64 = 0.05;
const SUCCESS_BASE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub score: i32,
    pub completeness: f64,
}

/// Dashboard weight for a phase; only exact known names carry a specific weight.
pub fn phase_weight(phase: &AssessmentPhase) -> f64 {
    match phase {
        AssessmentPhase::SelfDiscovery => 0.15,
        AssessmentPhase::IdeaDiscovery => 0.20,
        AssessmentPhase::MarketResearch => 0.18,
        AssessmentPhase::BusinessPillarsPlanning => 0.25,
        AssessmentPhase::ProductConceptTesting => 0.12,
        AssessmentPhase::BusinessDevelopment => 0.10,
        AssessmentPhase::Other(_) => UNKNOWN_PHASE_WEIGHT,
    }
}

/// Multiplier rewarding answer volume across all phases.
pub fn quality_multiplier(total_responses: usize) -> f64 {
    if total_responses < 10 {
        0.6
    } else if total_responses < 25 {
        0.8
    } else {
        1.0
    }
}

pub fn compute_overall_score(records: &[AssessmentRecord]) -> OverallScore {
    OverallScore {
        score: overall_readiness_score(records),
        completeness: data_completeness(records),
    }
}

/// Phase-weighted readiness score in [20, 95].
pub fn overall_readiness_score(records: &[AssessmentRecord]) -> i32 {
    if records.is_empty() {
        return NO_DATA_SCORE;
    }

    let mut weighted_total = 0.0;
    let mut total_weight = 0.0;

    for record in records {
        let phase_score =
            (record.completion() + 2.0 * record.response_count() as f64).min(100.0);
        let weight = phase_weight(&record.phase);
        weighted_total += phase_score * weight;
        total_weight += weight;
    }

    if total_weight <= 0.0 {
        return ZERO_WEIGHT_SCORE;
    }

    let raw_score = weighted_total / total_weight;
    let multiplier = quality_multiplier(total_responses(records));
    let final_score = (raw_score * multiplier).trunc() as i32;

    debug!(
        target: "app::scoring",
        raw_score,
        multiplier,
        final_score,
        "overall readiness score computed"
    );

    final_score.clamp(OVERALL_MIN, OVERALL_MAX)
}

/// Mean completion as a ratio rounded to two decimals.
pub fn data_completeness(records: &[AssessmentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let average = records.iter().map(AssessmentRecord::completion).sum::<f64>()
        / records.len() as f64;
    round_half_even(average / 100.0, 2)
}

/// Rounds on the exact binary value, ties to even.
fn round_half_even(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

fn readiness_points(level: ReadinessLevel) -> i32 {
    match level {
        ReadinessLevel::EarlyStage => 5,
        ReadinessLevel::IdeationStage => 10,
        ReadinessLevel::IdeaValidationStage => 15,
        ReadinessLevel::MarketEntryStage => 20,
    }
}

fn risk_points(risk: RiskTolerance) -> i32 {
    match risk {
        RiskTolerance::High => 15,
        RiskTolerance::Medium => 10,
        RiskTolerance::Conservative => 5,
    }
}

fn market_points(market: MarketUnderstanding) -> i32 {
    match market {
        MarketUnderstanding::Advanced => 15,
        MarketUnderstanding::Intermediate => 10,
        MarketUnderstanding::Basic => 5,
    }
}

pub fn success_factors(records: &[AssessmentRecord], profile: &FounderProfile) -> SuccessFactors {
    let phase_count = i32::try_from(records.len()).unwrap_or(i32::MAX);
    let responses = i32::try_from(total_responses(records)).unwrap_or(i32::MAX);

    SuccessFactors {
        assessment_completion: phase_count.saturating_mul(3).min(20),
        response_quality: (responses / 2).min(15),
        founder_readiness: readiness_points(profile.readiness_level),
        risk_alignment: risk_points(profile.risk_tolerance),
        market_knowledge: market_points(profile.market_level()),
    }
}

/// Recommendation-engine success probability in [35, 95] with its category.
pub fn success_probability(
    records: &[AssessmentRecord],
    profile: &FounderProfile,
) -> SuccessProbability {
    let factors = success_factors(records, profile);
    let score = (SUCCESS_BASE + factors.total()).clamp(SUCCESS_MIN, SUCCESS_MAX);

    SuccessProbability {
        score,
        category: SuccessCategory::from_score(score),
        factors: Some(factors),
        message: None,
    }
}
