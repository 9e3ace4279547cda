use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::debug;

use crate::models::assessment::{total_responses, AssessmentRecord};
use crate::models::dashboard::{
    DataSource, DataSourceKind, ElementScore, ElementStatus, Metric, Trend,
};
use crate::models::dimension::Dimension;
use crate::services::confidence_estimator::estimate_confidence;
use crate::services::dimension_catalog::{self, render_narrative};
use crate::services::randomness::{ScoreAdjuster, UniformJitter};

pub const ELEMENT_MIN: i32 = 15;
pub const ELEMENT_MAX: i32 = 95;

const UNMAPPED_FLOOR: i32 = 30;
const UNMAPPED_OFFSET: i32 = 15;
const UNMATCHED_FLOOR: i32 = 25;
const UNMATCHED_OFFSET: i32 = 20;
const MAX_DATA_SOURCES: usize = 4;
const AI_ANALYSIS_SHARE: f64 = 25.0;

/// Scores the nine business dimensions against a user's assessment records.
#[derive(Clone)]
pub struct ElementScorer {
    adjuster: Arc<dyn ScoreAdjuster>,
}

impl Default for ElementScorer {
    fn default() -> Self {
        Self::new(Arc::new(UniformJitter::default()))
    }
}

impl ElementScorer {
    pub fn new(adjuster: Arc<dyn ScoreAdjuster>) -> Self {
        Self { adjuster }
    }

    /// Records whose phase is one of the dimension's mapped phases (exact match).
    pub fn matching_records<'a>(
        dimension: Dimension,
        records: &'a [AssessmentRecord],
    ) -> Vec<&'a AssessmentRecord> {
        let phases = dimension_catalog::template(dimension).phases;
        records
            .iter()
            .filter(|record| phases.contains(&record.phase))
            .collect()
    }

    /// Bounded sub-score in [15, 95], anchored on `overall_score` when the
    /// dimension has no backing data.
    pub fn score_dimension(
        &self,
        dimension: Dimension,
        records: &[AssessmentRecord],
        overall_score: i32,
        rng: &mut dyn RngCore,
    ) -> i32 {
        let template = dimension_catalog::template(dimension);

        if template.phases.is_empty() {
            return (overall_score - UNMAPPED_OFFSET)
                .max(UNMAPPED_FLOOR)
                .clamp(ELEMENT_MIN, ELEMENT_MAX);
        }

        let matched = Self::matching_records(dimension, records);
        if matched.is_empty() {
            return (overall_score - UNMATCHED_OFFSET)
                .max(UNMATCHED_FLOOR)
                .clamp(ELEMENT_MIN, ELEMENT_MAX);
        }

        let total: f64 = matched
            .iter()
            .map(|record| (record.completion() + 1.5 * record.response_count() as f64).min(100.0))
            .sum();
        let base = (total / matched.len() as f64).trunc() as i32;
        let adjusted = self.adjuster.adjust(base, rng);

        debug!(
            target: "app::scoring",
            dimension = %dimension,
            base,
            adjusted,
            "element score computed"
        );

        adjusted.clamp(ELEMENT_MIN, ELEMENT_MAX)
    }

    /// Full scored view of one dimension: score, status, metrics, narrative,
    /// confidence, sources and improvements.
    pub fn compute_element_score(
        &self,
        dimension: Dimension,
        records: &[AssessmentRecord],
        overall_score: i32,
        rng: &mut dyn RngCore,
    ) -> ElementScore {
        let template = dimension_catalog::template(dimension);
        let score = self.score_dimension(dimension, records, overall_score, rng);
        let narrative = select_narrative(dimension, score, rng);
        let matched = Self::matching_records(dimension, records);

        ElementScore {
            key: dimension,
            title: template.title.to_string(),
            score,
            status: ElementStatus::from_score(score),
            definition: template.definition.to_string(),
            what_to_include: template.what_to_include.to_string(),
            metrics: element_metrics(dimension, total_responses(records), score),
            narrative,
            confidence: estimate_confidence(dimension, &matched, !records.is_empty()),
            data_sources: data_sources(records),
            improvements: improvements(dimension, score),
        }
    }
}

/// Scores a dimension with the default jitter adjuster.
pub fn compute_element_score(
    dimension: Dimension,
    records: &[AssessmentRecord],
    overall_score: i32,
    rng: &mut dyn RngCore,
) -> ElementScore {
    ElementScorer::default().compute_element_score(dimension, records, overall_score, rng)
}

pub fn select_narrative(dimension: Dimension, score: i32, rng: &mut dyn RngCore) -> String {
    let narratives = &dimension_catalog::template(dimension).narratives;
    let chosen = narratives.choose(rng).copied().unwrap_or(narratives[0]);
    render_narrative(chosen, score)
}

fn trend_if(condition: bool, otherwise: Trend) -> Trend {
    if condition {
        Trend::Positive
    } else {
        otherwise
    }
}

pub fn element_metrics(dimension: Dimension, total_responses: usize, score: i32) -> Vec<Metric> {
    let completion = Metric::new(
        "Completion Rate",
        format!("{}%", (score + 5).min(100)),
        trend_if(score >= 70, Trend::Neutral),
    );
    let quality_value = total_responses.saturating_mul(3).saturating_add(40).min(100);
    let quality = Metric::new(
        "Data Quality",
        format!("{quality_value}%"),
        trend_if(total_responses > 10, Trend::Negative),
    );

    let specific = match dimension {
        Dimension::CompanyVision => vec![
            Metric::new(
                "Vision Clarity",
                format!("{score}%"),
                trend_if(score >= 70, Trend::Neutral),
            ),
            Metric::new(
                "Alignment Score",
                format!("{}%", (score + 8).min(100)),
                Trend::Positive,
            ),
        ],
        Dimension::MarketOpportunity => vec![
            Metric::new(
                "Market Size Assessment",
                format!("${score}M"),
                trend_if(score >= 60, Trend::Neutral),
            ),
            Metric::new(
                "Growth Potential",
                format!("{}%", (score + 12).min(100)),
                Trend::Positive,
            ),
        ],
        Dimension::FinancialProjections => vec![
            Metric::new(
                "Revenue Projection",
                format!("${}K", score * 10),
                trend_if(score >= 65, Trend::Neutral),
            ),
            Metric::new(
                "Profitability Timeline",
                format!("{} years", (4 - score / 25).max(1)),
                Trend::Neutral,
            ),
        ],
        Dimension::CompetitiveAdvantage
        | Dimension::BusinessModel
        | Dimension::TeamExpertise
        | Dimension::ProductDevelopment
        | Dimension::GoToMarket
        | Dimension::RiskManagement => vec![completion.clone()],
    };

    let mut metrics = vec![completion, quality];
    metrics.extend(specific);
    metrics
}

/// Per-phase attribution followed by the analysis engine share, at most four entries.
pub fn data_sources(records: &[AssessmentRecord]) -> Vec<DataSource> {
    let record_count = records.len().max(1) as f64;

    let mut sources: Vec<DataSource> = records
        .iter()
        .filter(|record| record.response_count() > 0)
        .map(|record| {
            let share = (record.response_count() as f64 / record_count * 25.0).min(100.0);
            DataSource {
                name: record.phase.name().to_string(),
                percentage: (share * 10.0).round() / 10.0,
                kind: DataSourceKind::Assessment,
            }
        })
        .collect();

    sources.push(DataSource {
        name: "AI Analysis Engine".to_string(),
        percentage: AI_ANALYSIS_SHARE,
        kind: DataSourceKind::AiAnalysis,
    });

    sources.truncate(MAX_DATA_SOURCES);
    sources
}

/// Fewer suggestions as the score rises: one at 80+, two at 60+, otherwise all three.
pub fn improvements(dimension: Dimension, score: i32) -> Vec<String> {
    let suggestions = &dimension_catalog::template(dimension).improvements;
    let keep = if score >= 80 {
        1
    } else if score >= 60 {
        2
    } else {
        suggestions.len()
    };

    suggestions[..keep].iter().map(|s| s.to_string()).collect()
}
