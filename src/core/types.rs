use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Calculator {
    Sip,
    StepUpSip,
    Lumpsum,
}

impl Calculator {
    /// Whether a caller that says nothing gets an inflation-adjusted value.
    pub fn adjusts_for_inflation_by_default(self) -> bool {
        !matches!(self, Calculator::Sip)
    }

    pub fn label(self) -> &'static str {
        match self {
            Calculator::Sip => "SIP",
            Calculator::StepUpSip => "Step-Up SIP",
            Calculator::Lumpsum => "Lumpsum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipInput {
    pub monthly_investment: f64,
    /// Annual return in percent, e.g. 12 for 12%.
    pub annual_return_rate: f64,
    pub investment_years: f64,
    pub adjust_for_inflation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepUpSipInput {
    pub monthly_investment: f64,
    pub annual_return_rate: f64,
    pub investment_years: f64,
    /// Percent added to the monthly contribution at every 12-month anniversary.
    pub annual_increment: f64,
    pub adjust_for_inflation: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LumpsumInput {
    pub initial_investment: f64,
    pub annual_return_rate: f64,
    pub investment_years: f64,
    pub adjust_for_inflation: bool,
}

/// Rounded outcome of a single projection. Amounts are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub total_invested: f64,
    pub maturity_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_adjusted_value: Option<f64>,
}

impl ProjectionResult {
    pub(crate) fn zero(adjust_for_inflation: bool) -> Self {
        Self {
            total_invested: 0.0,
            maturity_value: 0.0,
            inflation_adjusted_value: adjust_for_inflation.then_some(0.0),
        }
    }
}

pub type SipResult = ProjectionResult;
pub type StepUpSipResult = ProjectionResult;
pub type LumpsumResult = ProjectionResult;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectionRequest {
    Sip(SipInput),
    StepUpSip(StepUpSipInput),
    Lumpsum(LumpsumInput),
}

impl ProjectionRequest {
    pub fn calculator(&self) -> Calculator {
        match self {
            ProjectionRequest::Sip(_) => Calculator::Sip,
            ProjectionRequest::StepUpSip(_) => Calculator::StepUpSip,
            ProjectionRequest::Lumpsum(_) => Calculator::Lumpsum,
        }
    }

    pub fn investment_years(&self) -> f64 {
        match self {
            ProjectionRequest::Sip(input) => input.investment_years,
            ProjectionRequest::StepUpSip(input) => input.investment_years,
            ProjectionRequest::Lumpsum(input) => input.investment_years,
        }
    }
}
