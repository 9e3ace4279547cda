//! Static per-dimension tables: descriptive copy, phase mapping, confidence
//! factor, narrative variants and improvement suggestions.
//!
//! Every lookup is an exhaustive `match` on [`Dimension`], so adding a
//! dimension fails to compile until each table covers it.

use crate::models::assessment::AssessmentPhase;
use crate::models::dimension::Dimension;

/// Placeholder substituted with the element score in narrative templates.
pub const SCORE_PLACEHOLDER: &str = "{score}";

#[derive(Debug, Clone, Copy)]
pub struct DimensionTemplate {
    pub title: &'static str,
    pub definition: &'static str,
    pub what_to_include: &'static str,
    pub phases: &'static [AssessmentPhase],
    pub confidence_factor: f64,
    pub narratives: [&'static str; 3],
    pub improvements: [&'static str; 3],
}

pub fn template(dimension: Dimension) -> &'static DimensionTemplate {
    match dimension {
        Dimension::CompanyVision => &COMPANY_VISION,
        Dimension::MarketOpportunity => &MARKET_OPPORTUNITY,
        Dimension::CompetitiveAdvantage => &COMPETITIVE_ADVANTAGE,
        Dimension::BusinessModel => &BUSINESS_MODEL,
        Dimension::FinancialProjections => &FINANCIAL_PROJECTIONS,
        Dimension::TeamExpertise => &TEAM_EXPERTISE,
        Dimension::ProductDevelopment => &PRODUCT_DEVELOPMENT,
        Dimension::GoToMarket => &GO_TO_MARKET,
        Dimension::RiskManagement => &RISK_MANAGEMENT,
    }
}

/// Fills a narrative template with the element score.
pub fn render_narrative(template: &str, score: i32) -> String {
    template.replace(SCORE_PLACEHOLDER, &score.to_string())
}

static COMPANY_VISION: DimensionTemplate = DimensionTemplate {
    title: "Company Vision",
    definition: "A clear, inspiring picture of what your company will become in the future.",
    what_to_include: "Mission statement, core values, long-term goals, and impact vision.",
    phases: &[AssessmentPhase::SelfDiscovery, AssessmentPhase::IdeaDiscovery],
    confidence_factor: 1.1,
    narratives: [
        "Based on your assessment responses, your vision clarity scores {score}/100. Your entrepreneurial profile suggests strong potential in strategic thinking and long-term planning.",
        "Analysis of your self-discovery assessment indicates {score}% alignment between personal goals and business vision. Key strengths identified in leadership and innovation.",
        "Your vision development shows {score}/100 maturity. Assessment data reveals strong market awareness and customer-centric thinking patterns.",
    ],
    improvements: [
        "Develop a more detailed mission statement that clearly articulates your company's purpose",
        "Conduct stakeholder interviews to validate vision alignment",
        "Create measurable vision milestones for the next 3-5 years",
    ],
};

static MARKET_OPPORTUNITY: DimensionTemplate = DimensionTemplate {
    title: "Market Opportunity",
    definition: "The potential for growth and profit in your target market.",
    what_to_include: "Market size, growth trends, customer pain points, and competitive gaps.",
    phases: &[AssessmentPhase::MarketResearch, AssessmentPhase::IdeaDiscovery],
    confidence_factor: 0.9,
    narratives: [
        "Market analysis based on your research assessment scores {score}/100. Your understanding of target demographics and competitive landscape shows strong analytical capabilities.",
        "Assessment data indicates {score}% market opportunity validation. Your responses demonstrate solid grasp of customer pain points and solution-market fit.",
        "Your market research completeness rates {score}/100. Analysis reveals strong potential in identifying underserved market segments.",
    ],
    improvements: [
        "Conduct additional primary market research with target customers",
        "Analyze competitor pricing strategies and market positioning",
        "Validate market size assumptions with industry reports",
    ],
};

static COMPETITIVE_ADVANTAGE: DimensionTemplate = DimensionTemplate {
    title: "Competitive Advantage",
    definition: "What makes your business unique and superior to competitors.",
    what_to_include: "Unique value proposition, proprietary technology, strategic partnerships.",
    phases: &[AssessmentPhase::MarketResearch, AssessmentPhase::ProductConceptTesting],
    confidence_factor: 0.8,
    narratives: [
        "Competitive positioning analysis scores {score}/100 based on your strategic assessment responses. Your unique value proposition shows clear differentiation potential.",
        "Assessment evaluation indicates {score}% competitive advantage clarity. Your responses suggest strong innovation capabilities and market positioning awareness.",
        "Your competitive analysis maturity rates {score}/100. Data shows excellent understanding of market dynamics and competitive gaps.",
    ],
    improvements: [
        "Develop intellectual property protection strategy",
        "Identify and strengthen unique value proposition elements",
        "Create competitive moat through strategic partnerships",
    ],
};

static BUSINESS_MODEL: DimensionTemplate = DimensionTemplate {
    title: "Business Model",
    definition: "How your company creates, delivers, and captures value.",
    what_to_include: "Revenue streams, cost structure, key partnerships, and customer relationships.",
    phases: &[AssessmentPhase::BusinessPillarsPlanning, AssessmentPhase::BusinessDevelopment],
    confidence_factor: 1.0,
    narratives: [
        "Business model validation scores {score}/100 based on comprehensive assessment analysis. Your revenue strategy and cost structure show {score}% viability.",
        "Assessment data indicates {score}/100 business model clarity. Your responses demonstrate strong understanding of value creation and delivery mechanisms.",
        "Your business model development shows {score}% completion. Analysis reveals solid foundation in monetization strategy and operational planning.",
    ],
    improvements: [
        "Test multiple revenue stream options with pilot customers",
        "Optimize cost structure for better unit economics",
        "Develop scalable operational processes",
    ],
};

static FINANCIAL_PROJECTIONS: DimensionTemplate = DimensionTemplate {
    title: "Financial Projections",
    definition: "Forecasted financial performance over the next 3-5 years.",
    what_to_include: "Revenue projections, expense forecasts, profitability timeline, funding needs.",
    phases: &[AssessmentPhase::BusinessPillarsPlanning, AssessmentPhase::BusinessDevelopment],
    confidence_factor: 0.7,
    narratives: [
        "Financial planning assessment scores {score}/100. Your understanding of revenue projections and cost management demonstrates {score}% financial literacy.",
        "Based on assessment responses, your financial model shows {score}/100 accuracy. Analysis indicates strong grasp of cash flow management and funding requirements.",
        "Your financial projections maturity rates {score}/100. Assessment data reveals solid understanding of key financial metrics and growth forecasting.",
    ],
    improvements: [
        "Create detailed financial models with sensitivity analysis",
        "Establish key performance indicators (KPIs) tracking",
        "Develop funding strategy and investor pitch materials",
    ],
};

static TEAM_EXPERTISE: DimensionTemplate = DimensionTemplate {
    title: "Team Expertise",
    definition: "The collective skills, experience, and capabilities of your team.",
    what_to_include: "Founder backgrounds, key team members, advisory board, skill gaps.",
    phases: &[AssessmentPhase::SelfDiscovery, AssessmentPhase::BusinessDevelopment],
    confidence_factor: 1.2,
    narratives: [
        "Team capability assessment scores {score}/100. Your leadership profile and team-building approach demonstrate {score}% effectiveness in human capital management.",
        "Analysis indicates {score}/100 team readiness. Your responses show strong understanding of skill requirements and organizational development.",
        "Your team expertise evaluation rates {score}/100. Assessment reveals excellent leadership potential and collaborative management style.",
    ],
    improvements: [
        "Identify and recruit key skill gaps in the team",
        "Establish advisory board with industry experts",
        "Develop team performance and growth frameworks",
    ],
};

static PRODUCT_DEVELOPMENT: DimensionTemplate = DimensionTemplate {
    title: "Product Development",
    definition: "Your product roadmap and development strategy.",
    what_to_include: "Current product status, development milestones, technology stack, MVP features.",
    phases: &[AssessmentPhase::ProductConceptTesting, AssessmentPhase::BusinessDevelopment],
    confidence_factor: 0.9,
    narratives: [
        "Product development strategy scores {score}/100 based on concept testing assessment. Your technical approach and development timeline show {score}% feasibility.",
        "Assessment analysis indicates {score}/100 product readiness. Your responses demonstrate strong understanding of MVP development and iteration cycles.",
        "Your product development maturity rates {score}/100. Data shows solid grasp of user feedback integration and feature prioritization.",
    ],
    improvements: [
        "Implement agile development methodology",
        "Establish user feedback collection and integration processes",
        "Create detailed product roadmap with feature prioritization",
    ],
};

static GO_TO_MARKET: DimensionTemplate = DimensionTemplate {
    title: "Go-to-Market Strategy",
    definition: "Your plan for reaching and acquiring customers.",
    what_to_include: "Marketing channels, sales strategy, customer acquisition cost, distribution plan.",
    phases: &[AssessmentPhase::MarketResearch, AssessmentPhase::BusinessPillarsPlanning],
    confidence_factor: 0.8,
    narratives: [
        "Go-to-market strategy assessment scores {score}/100. Your customer acquisition approach and marketing channels demonstrate {score}% market penetration potential.",
        "Analysis indicates {score}/100 GTM strategy clarity. Your responses show strong understanding of customer journey and sales funnel optimization.",
        "Your marketing strategy evaluation rates {score}/100. Assessment reveals excellent grasp of digital marketing and customer retention tactics.",
    ],
    improvements: [
        "Develop multi-channel customer acquisition strategy",
        "Optimize customer acquisition cost (CAC) and lifetime value (LTV)",
        "Create comprehensive digital marketing funnel",
    ],
};

static RISK_MANAGEMENT: DimensionTemplate = DimensionTemplate {
    title: "Risk Management",
    definition: "Identification and mitigation of potential business risks.",
    what_to_include: "Market risks, operational risks, financial risks, and contingency plans.",
    phases: &[AssessmentPhase::BusinessDevelopment, AssessmentPhase::BusinessPillarsPlanning],
    confidence_factor: 0.7,
    narratives: [
        "Risk assessment and mitigation scores {score}/100. Your strategic planning approach demonstrates {score}% preparedness for market uncertainties.",
        "Assessment analysis indicates {score}/100 risk awareness. Your responses show strong understanding of operational and financial risk factors.",
        "Your risk management maturity rates {score}/100. Data reveals solid contingency planning and crisis management capabilities.",
    ],
    improvements: [
        "Conduct comprehensive risk assessment across all business areas",
        "Develop detailed contingency plans for identified risks",
        "Establish regular risk monitoring and mitigation processes",
    ],
};
