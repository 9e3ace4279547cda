use crate::models::assessment::{mean_completion, AssessmentRecord};
use crate::models::dimension::Dimension;
use crate::services::dimension_catalog;

pub const CONFIDENCE_MIN: i32 = 35;
pub const CONFIDENCE_MAX: i32 = 95;
pub const NO_DATA_CONFIDENCE: i32 = 45;

const BASE_CONFIDENCE: i32 = 50;

fn volume_bonus(total_responses: usize) -> i32 {
    match total_responses {
        n if n >= 30 => 25,
        n if n >= 15 => 15,
        n if n >= 5 => 10,
        _ => 0,
    }
}

fn completion_bonus(mean_completion: f64) -> i32 {
    if mean_completion >= 80.0 {
        15
    } else if mean_completion >= 60.0 {
        10
    } else if mean_completion >= 40.0 {
        5
    } else {
        0
    }
}

/// How much data backs a dimension's score, in [35, 95].
///
/// `matched` are the records mapped to the dimension; `has_any_data` is false
/// only when the user has no assessment records at all.
pub fn estimate_confidence(
    dimension: Dimension,
    matched: &[&AssessmentRecord],
    has_any_data: bool,
) -> i32 {
    if !has_any_data {
        return NO_DATA_CONFIDENCE;
    }

    let responses: usize = matched.iter().map(|record| record.response_count()).sum();
    let confidence =
        BASE_CONFIDENCE + volume_bonus(responses) + completion_bonus(mean_completion(matched));

    let factor = dimension_catalog::template(dimension).confidence_factor;
    let scaled = (f64::from(confidence) * factor).trunc() as i32;

    scaled.clamp(CONFIDENCE_MIN, CONFIDENCE_MAX)
}
