mod assumptions;
mod engine;
mod format;
mod limits;
mod metrics;
mod types;

pub use assumptions::{
    AssumptionOverrides, Assumptions, DEFAULT_COMPOUNDING_PER_YEAR, DEFAULT_CURRENCY,
    DEFAULT_INFLATION_RATE,
};
pub use engine::{
    calculate_lumpsum, calculate_sip, calculate_step_up_sip, inflation_adjusted, project,
};
pub use format::{format_inr, format_inr_with_symbol};
pub use limits::{
    ANNUAL_INCREMENT, ANNUAL_RETURN_RATE, INFLATION_RATE, INITIAL_INVESTMENT, INPUT_LIMITS,
    INVESTMENT_YEARS, InputLimit, InputLimits, MONTHLY_INVESTMENT, clamp_number, clamp_text,
    is_valid_decimal_text, is_valid_integer_text, parse_and_clamp_decimal,
    parse_and_clamp_integer,
};
pub use metrics::{ProjectionSummary, cagr, final_monthly_contribution, summarize, wealth_gain};
pub use types::{
    Calculator, LumpsumInput, LumpsumResult, ProjectionRequest, ProjectionResult, SipInput,
    SipResult, StepUpSipInput, StepUpSipResult,
};
