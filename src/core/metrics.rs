use serde::Serialize;

use super::types::{ProjectionResult, StepUpSipInput};

/// Headline figures derived from a rounded projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub wealth_gain: f64,
    pub returns_multiple: f64,
    /// Fraction, e.g. 0.12 for 12% a year.
    pub absolute_cagr: f64,
    pub real_cagr: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_erosion_percent: Option<f64>,
}

pub fn summarize(result: &ProjectionResult, investment_years: f64) -> ProjectionSummary {
    let gain = wealth_gain(result);
    let returns_multiple = if result.total_invested > 0.0 {
        gain / result.total_invested
    } else {
        0.0
    };

    ProjectionSummary {
        wealth_gain: gain,
        returns_multiple,
        absolute_cagr: cagr(result.total_invested, result.maturity_value, investment_years),
        real_cagr: result
            .inflation_adjusted_value
            .map(|real| cagr(result.total_invested, real, investment_years))
            .unwrap_or(0.0),
        inflation_erosion_percent: result
            .inflation_adjusted_value
            .filter(|_| result.maturity_value > 0.0)
            .map(|real| (result.maturity_value - real) / result.maturity_value * 100.0),
    }
}

pub fn wealth_gain(result: &ProjectionResult) -> f64 {
    result.maturity_value - result.total_invested
}

/// Constant annual rate taking `start` to `end` over `years`. Zero when undefined.
pub fn cagr(start: f64, end: f64, years: f64) -> f64 {
    if start <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    (end / start).powf(1.0 / years) - 1.0
}

/// Monthly amount paid during the last contributing year of a step-up plan.
pub fn final_monthly_contribution(input: &StepUpSipInput) -> f64 {
    let whole_years = input.investment_years.floor();
    if input.monthly_investment <= 0.0 || whole_years < 1.0 {
        return 0.0;
    }
    (input.monthly_investment * (1.0 + input.annual_increment / 100.0).powf(whole_years - 1.0))
        .round()
}
