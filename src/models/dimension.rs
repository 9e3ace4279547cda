use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine fixed business-readiness facets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    CompanyVision,
    MarketOpportunity,
    CompetitiveAdvantage,
    BusinessModel,
    FinancialProjections,
    TeamExpertise,
    ProductDevelopment,
    GoToMarket,
    RiskManagement,
}

impl Dimension {
    /// Presentation order.
    pub const ALL: [Dimension; 9] = [
        Dimension::CompanyVision,
        Dimension::MarketOpportunity,
        Dimension::CompetitiveAdvantage,
        Dimension::BusinessModel,
        Dimension::FinancialProjections,
        Dimension::TeamExpertise,
        Dimension::ProductDevelopment,
        Dimension::GoToMarket,
        Dimension::RiskManagement,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Dimension::CompanyVision => "company_vision",
            Dimension::MarketOpportunity => "market_opportunity",
            Dimension::CompetitiveAdvantage => "competitive_advantage",
            Dimension::BusinessModel => "business_model",
            Dimension::FinancialProjections => "financial_projections",
            Dimension::TeamExpertise => "team_expertise",
            Dimension::ProductDevelopment => "product_development",
            Dimension::GoToMarket => "go_to_market",
            Dimension::RiskManagement => "risk_management",
        }
    }

    pub fn position(&self) -> usize {
        Dimension::ALL
            .iter()
            .position(|candidate| candidate == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl TryFrom<&str> for Dimension {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.key() == value)
            .ok_or_else(|| format!("unsupported dimension: {value}"))
    }
}
