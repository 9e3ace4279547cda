use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Text,
    Scale,
    MultipleChoice,
}

impl ResponseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseType::Text => "text",
            ResponseType::Scale => "scale",
            ResponseType::MultipleChoice => "multiple_choice",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ResponseType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "text" => Ok(ResponseType::Text),
            "scale" => Ok(ResponseType::Scale),
            "multiple_choice" => Ok(ResponseType::MultipleChoice),
            other => Err(format!("unsupported response type: {other}")),
        }
    }
}

/// Questionnaire section a set of responses belongs to.
///
/// Known phases parse only on exact name equality; anything else is kept
/// verbatim in `Other` so substring checks still see the original name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssessmentPhase {
    SelfDiscovery,
    IdeaDiscovery,
    MarketResearch,
    BusinessPillarsPlanning,
    ProductConceptTesting,
    BusinessDevelopment,
    Other(String),
}

impl AssessmentPhase {
    pub const KNOWN: [AssessmentPhase; 6] = [
        AssessmentPhase::SelfDiscovery,
        AssessmentPhase::IdeaDiscovery,
        AssessmentPhase::MarketResearch,
        AssessmentPhase::BusinessPillarsPlanning,
        AssessmentPhase::ProductConceptTesting,
        AssessmentPhase::BusinessDevelopment,
    ];

    pub fn from_name(name: &str) -> Self {
        match name {
            "Self Discovery Assessment" => AssessmentPhase::SelfDiscovery,
            "Idea Discovery Assessment" => AssessmentPhase::IdeaDiscovery,
            "Market Research" => AssessmentPhase::MarketResearch,
            "Business Pillars Planning" => AssessmentPhase::BusinessPillarsPlanning,
            "Product Concept Testing" => AssessmentPhase::ProductConceptTesting,
            "Business Development" => AssessmentPhase::BusinessDevelopment,
            other => AssessmentPhase::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AssessmentPhase::SelfDiscovery => "Self Discovery Assessment",
            AssessmentPhase::IdeaDiscovery => "Idea Discovery Assessment",
            AssessmentPhase::MarketResearch => "Market Research",
            AssessmentPhase::BusinessPillarsPlanning => "Business Pillars Planning",
            AssessmentPhase::ProductConceptTesting => "Product Concept Testing",
            AssessmentPhase::BusinessDevelopment => "Business Development",
            AssessmentPhase::Other(name) => name,
        }
    }

    /// Short fragment used when locating a phase inside longer, decorated names.
    pub fn keyword(&self) -> &str {
        match self {
            AssessmentPhase::SelfDiscovery => "Self Discovery",
            AssessmentPhase::IdeaDiscovery => "Idea Discovery",
            other => other.name(),
        }
    }

    /// True when `fragment` occurs anywhere in this phase's name.
    pub fn name_contains(&self, fragment: &str) -> bool {
        self.name().contains(fragment)
    }
}

impl fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for AssessmentPhase {
    fn from(value: String) -> Self {
        AssessmentPhase::from_name(&value)
    }
}

impl From<&str> for AssessmentPhase {
    fn from(value: &str) -> Self {
        AssessmentPhase::from_name(value)
    }
}

impl From<AssessmentPhase> for String {
    fn from(value: AssessmentPhase) -> Self {
        match value {
            AssessmentPhase::Other(name) => name,
            known => known.name().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseRecord {
    pub question_id: String,
    pub response_type: ResponseType,
    pub value: String,
    #[serde(default)]
    pub created_at: String,
}

impl ResponseRecord {
    pub fn new(
        question_id: impl Into<String>,
        response_type: ResponseType,
        value: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            response_type,
            value: value.into(),
            created_at: String::new(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.response_type == ResponseType::Text
    }

    /// Numeric value of a scale answer. Only strings made entirely of ASCII
    /// digits count; anything else (including "N/A" and "") is `None`.
    pub fn scale_value(&self) -> Option<u32> {
        if self.response_type != ResponseType::Scale {
            return None;
        }
        let value = self.value.as_str();
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse::<u32>().ok()
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub phase: AssessmentPhase,
    pub completion_percentage: f64,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

impl AssessmentRecord {
    pub fn new(
        phase: impl Into<AssessmentPhase>,
        completion_percentage: f64,
        responses: Vec<ResponseRecord>,
    ) -> Self {
        Self {
            phase: phase.into(),
            completion_percentage,
            responses,
        }
    }

    /// Completion bounded to [0, 100]; non-finite input counts as 0.
    pub fn completion(&self) -> f64 {
        if self.completion_percentage.is_finite() {
            self.completion_percentage.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }

    pub fn text_responses(&self) -> impl Iterator<Item = &ResponseRecord> {
        self.responses.iter().filter(|r| r.is_text())
    }
}

pub fn total_responses(records: &[AssessmentRecord]) -> usize {
    records.iter().map(AssessmentRecord::response_count).sum()
}

pub fn mean_completion(records: &[&AssessmentRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records.iter().map(|r| r.completion()).sum::<f64>() / records.len() as f64
}
