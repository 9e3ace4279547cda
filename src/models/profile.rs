use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(Archetype {
    Unknown => "Unknown",
    TechInnovator => "Tech Innovator",
    VisionaryLeader => "Visionary Leader",
    StrategicAnalyst => "Strategic Analyst",
    Innovator => "Innovator",
});

labelled_enum!(RiskTolerance {
    High => "High",
    Medium => "Medium",
    Conservative => "Conservative",
});

labelled_enum!(ReadinessLevel {
    EarlyStage => "Early Stage",
    IdeationStage => "Ideation Stage",
    IdeaValidationStage => "Idea Validation Stage",
    MarketEntryStage => "Market Entry Stage",
});

labelled_enum!(MotivationType {
    Unknown => "Unknown",
    InnovationDriven => "Innovation-Driven",
    StabilitySeeking => "Stability-Seeking",
});

labelled_enum!(IdeaClarity {
    High => "High",
    Developing => "Developing",
});

labelled_enum!(MarketUnderstanding {
    Basic => "Basic",
    Intermediate => "Intermediate",
    Advanced => "Advanced",
});

labelled_enum!(ExperienceLevel {
    Beginner => "Beginner",
    Intermediate => "Intermediate",
});

/// Qualitative founder characterization inferred from assessment answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FounderProfile {
    pub archetype: Archetype,
    pub risk_tolerance: RiskTolerance,
    pub readiness_level: ReadinessLevel,
    pub motivation_type: MotivationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idea_clarity: Option<IdeaClarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_understanding: Option<MarketUnderstanding>,
    pub experience_level: ExperienceLevel,
}

impl Default for FounderProfile {
    fn default() -> Self {
        Self {
            archetype: Archetype::Unknown,
            risk_tolerance: RiskTolerance::Medium,
            readiness_level: ReadinessLevel::EarlyStage,
            motivation_type: MotivationType::Unknown,
            idea_clarity: None,
            market_understanding: None,
            experience_level: ExperienceLevel::Beginner,
        }
    }
}

impl FounderProfile {
    /// Overwrites every field the update sets; unset fields keep their value.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(archetype) = update.archetype {
            self.archetype = archetype;
        }
        if let Some(risk) = update.risk_tolerance {
            self.risk_tolerance = risk;
        }
        if let Some(readiness) = update.readiness_level {
            self.readiness_level = readiness;
        }
        if let Some(motivation) = update.motivation_type {
            self.motivation_type = motivation;
        }
        if let Some(clarity) = update.idea_clarity {
            self.idea_clarity = Some(clarity);
        }
        if let Some(market) = update.market_understanding {
            self.market_understanding = Some(market);
        }
        if let Some(experience) = update.experience_level {
            self.experience_level = experience;
        }
    }

    /// Market understanding with "never assessed" folded into Basic.
    pub fn market_level(&self) -> MarketUnderstanding {
        self.market_understanding
            .unwrap_or(MarketUnderstanding::Basic)
    }
}

/// Partial profile produced by a single phase extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub archetype: Option<Archetype>,
    pub risk_tolerance: Option<RiskTolerance>,
    pub readiness_level: Option<ReadinessLevel>,
    pub motivation_type: Option<MotivationType>,
    pub idea_clarity: Option<IdeaClarity>,
    pub market_understanding: Option<MarketUnderstanding>,
    pub experience_level: Option<ExperienceLevel>,
}
