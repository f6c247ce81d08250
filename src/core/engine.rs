use log::trace;

use super::assumptions::Assumptions;
use super::types::{
    LumpsumInput, LumpsumResult, ProjectionRequest, ProjectionResult, SipInput, SipResult,
    StepUpSipInput, StepUpSipResult,
};

const MONTHS_PER_YEAR: u32 = 12;

pub fn project(request: &ProjectionRequest, assumptions: &Assumptions) -> ProjectionResult {
    match request {
        ProjectionRequest::Sip(input) => calculate_sip(input, Some(assumptions)),
        ProjectionRequest::StepUpSip(input) => calculate_step_up_sip(input, Some(assumptions)),
        ProjectionRequest::Lumpsum(input) => calculate_lumpsum(input, Some(assumptions)),
    }
}

pub fn calculate_sip(input: &SipInput, assumptions: Option<&Assumptions>) -> SipResult {
    let fallback;
    let assumptions = match assumptions {
        Some(a) => a,
        None => {
            fallback = Assumptions::default();
            &fallback
        }
    };

    let monthly = input.monthly_investment;
    let years = input.investment_years;
    if monthly <= 0.0 || years <= 0.0 {
        return ProjectionResult::zero(input.adjust_for_inflation);
    }

    let periods_per_year = f64::from(assumptions.compounding_per_year.max(1));
    let total_periods = years * periods_per_year;
    let periodic_rate = input.annual_return_rate / 100.0 / periods_per_year;

    let maturity_value = monthly * annuity_due_factor(periodic_rate, total_periods);
    let total_invested = monthly * total_periods;

    trace!(
        "sip: monthly={monthly} rate={} years={years} periods={total_periods} maturity={maturity_value}",
        input.annual_return_rate
    );

    finish(
        total_invested,
        maturity_value,
        years,
        input.adjust_for_inflation,
        assumptions,
    )
}

/// Year-block step-up projection.
///
/// Each whole year's twelve contributions are valued as an annuity-due at the monthly
/// rate, then carried to the end of the tenure with annual compounding. Contributions stop
/// at the last whole year; any fractional remainder of the tenure still compounds and
/// still counts toward inflation deflation.
pub fn calculate_step_up_sip(
    input: &StepUpSipInput,
    assumptions: Option<&Assumptions>,
) -> StepUpSipResult {
    let fallback;
    let assumptions = match assumptions {
        Some(a) => a,
        None => {
            fallback = Assumptions::default();
            &fallback
        }
    };

    let base_monthly = input.monthly_investment;
    let years = input.investment_years;
    if base_monthly <= 0.0 || years <= 0.0 {
        return ProjectionResult::zero(input.adjust_for_inflation);
    }

    let monthly_rate = input.annual_return_rate / 100.0 / f64::from(MONTHS_PER_YEAR);
    let annual_growth = 1.0 + input.annual_return_rate / 100.0;
    let step_up = 1.0 + input.annual_increment / 100.0;
    let months = f64::from(MONTHS_PER_YEAR);
    let whole_years = years.floor() as u32;

    let mut total_invested = 0.0;
    let mut maturity_value = 0.0;
    for year in 1..=whole_years {
        let monthly = base_monthly * step_up.powf(f64::from(year - 1));
        total_invested += monthly * months;

        let year_end_value = monthly * annuity_due_factor(monthly_rate, months);
        let remaining_years = years - f64::from(year);
        maturity_value += year_end_value * annual_growth.powf(remaining_years);
    }

    trace!(
        "step-up sip: monthly={base_monthly} increment={} rate={} years={years} maturity={maturity_value}",
        input.annual_increment,
        input.annual_return_rate
    );

    finish(
        total_invested,
        maturity_value,
        years,
        input.adjust_for_inflation,
        assumptions,
    )
}

pub fn calculate_lumpsum(
    input: &LumpsumInput,
    assumptions: Option<&Assumptions>,
) -> LumpsumResult {
    let fallback;
    let assumptions = match assumptions {
        Some(a) => a,
        None => {
            fallback = Assumptions::default();
            &fallback
        }
    };

    let principal = input.initial_investment;
    let years = input.investment_years;
    if principal <= 0.0 || years <= 0.0 {
        return ProjectionResult::zero(input.adjust_for_inflation);
    }

    let maturity_value = principal * (1.0 + input.annual_return_rate / 100.0).powf(years);

    trace!(
        "lumpsum: principal={principal} rate={} years={years} maturity={maturity_value}",
        input.annual_return_rate
    );

    finish(
        principal,
        maturity_value,
        years,
        input.adjust_for_inflation,
        assumptions,
    )
}

/// Deflates a nominal amount to present-day money using annual compounding.
pub fn inflation_adjusted(nominal: f64, inflation_rate: f64, years: f64) -> f64 {
    nominal / (1.0 + inflation_rate).powf(years)
}

/// Future value of one unit paid at the start of each of `periods` periods.
fn annuity_due_factor(periodic_rate: f64, periods: f64) -> f64 {
    if periodic_rate == 0.0 {
        periods
    } else {
        ((1.0 + periodic_rate).powf(periods) - 1.0) / periodic_rate * (1.0 + periodic_rate)
    }
}

fn finish(
    total_invested: f64,
    maturity_value: f64,
    years: f64,
    adjust_for_inflation: bool,
    assumptions: &Assumptions,
) -> ProjectionResult {
    let real_value = adjust_for_inflation
        .then(|| inflation_adjusted(maturity_value, assumptions.inflation_rate, years));

    ProjectionResult {
        total_invested: total_invested.round(),
        maturity_value: maturity_value.round(),
        // A real value that rounds to nothing is reported as absent.
        inflation_adjusted_value: real_value
            .map(f64::round)
            .filter(|value| *value != 0.0 && !value.is_nan()),
    }
}
