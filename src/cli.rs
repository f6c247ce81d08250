use clap::{Args, Parser, Subcommand};

use crate::api::{ProjectionResponse, ResolvedRequest, build_projection_response};
use crate::core::{
    ANNUAL_INCREMENT, ANNUAL_RETURN_RATE, AssumptionOverrides, Assumptions, Calculator,
    INFLATION_RATE, INITIAL_INVESTMENT, INVESTMENT_YEARS, LumpsumInput, MONTHLY_INVESTMENT,
    ProjectionRequest, SipInput, StepUpSipInput, clamp_number, clamp_text, format_inr_with_symbol,
};
use crate::error::{CliError, InputResult};

#[derive(Parser, Debug)]
#[command(
    name = "sipcalc",
    about = "SIP, step-up SIP and lumpsum projections with inflation adjustment"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON projection API
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
    /// Fixed monthly contribution
    Sip(SipArgs),
    /// Monthly contribution raised every 12 months
    StepUp(StepUpArgs),
    /// Single upfront investment
    Lumpsum(LumpsumArgs),
}

#[derive(Args, Debug)]
pub struct CommonArgs {
    #[arg(
        long,
        default_value_t = ANNUAL_RETURN_RATE.default,
        help = "Expected annual return in percent, e.g. 12"
    )]
    pub annual_return_rate: f64,
    #[arg(long, default_value_t = INVESTMENT_YEARS.default)]
    pub investment_years: f64,
    #[arg(
        long,
        default_value_t = INFLATION_RATE.default,
        help = "Annual inflation in percent, used when adjusting for inflation"
    )]
    pub inflation_rate: f64,
    #[arg(
        long,
        help = "Report the inflation-adjusted value (true/false); the default depends on the calculator"
    )]
    pub adjust_for_inflation: Option<bool>,
    #[arg(long, help = "Print the full projection as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct SipArgs {
    #[arg(
        long,
        default_value = "10000",
        help = "Monthly contribution; lakh/crore commas are accepted"
    )]
    pub monthly_investment: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct StepUpArgs {
    #[arg(long, default_value = "10000")]
    pub monthly_investment: String,
    #[arg(
        long,
        default_value_t = ANNUAL_INCREMENT.default,
        help = "Yearly increase of the monthly contribution in percent"
    )]
    pub annual_increment: f64,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args, Debug)]
pub struct LumpsumArgs {
    #[arg(long, default_value = "10000")]
    pub initial_investment: String,
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn resolve_command(command: &Command) -> InputResult<Option<(ResolvedRequest, bool)>> {
    let (calculator, amount, increment, common) = match command {
        Command::Serve { .. } => return Ok(None),
        Command::Sip(args) => (Calculator::Sip, &args.monthly_investment, None, &args.common),
        Command::StepUp(args) => (
            Calculator::StepUpSip,
            &args.monthly_investment,
            Some(args.annual_increment),
            &args.common,
        ),
        Command::Lumpsum(args) => (
            Calculator::Lumpsum,
            &args.initial_investment,
            None,
            &args.common,
        ),
    };

    let annual_return_rate = clamp_number(
        "--annual-return-rate",
        common.annual_return_rate,
        &ANNUAL_RETURN_RATE,
    )?;
    let investment_years = clamp_number(
        "--investment-years",
        common.investment_years,
        &INVESTMENT_YEARS,
    )?;
    let inflation_percent =
        clamp_number("--inflation-rate", common.inflation_rate, &INFLATION_RATE)?;
    let monthly_investment =
        || clamp_text("--monthly-investment", amount, &MONTHLY_INVESTMENT, true);
    let adjust_for_inflation = common
        .adjust_for_inflation
        .unwrap_or_else(|| calculator.adjusts_for_inflation_by_default());

    let request = match calculator {
        Calculator::Sip => ProjectionRequest::Sip(SipInput {
            monthly_investment: monthly_investment()?,
            annual_return_rate,
            investment_years,
            adjust_for_inflation,
        }),
        Calculator::StepUpSip => ProjectionRequest::StepUpSip(StepUpSipInput {
            monthly_investment: monthly_investment()?,
            annual_return_rate,
            investment_years,
            annual_increment: clamp_number(
                "--annual-increment",
                increment.unwrap_or(ANNUAL_INCREMENT.default),
                &ANNUAL_INCREMENT,
            )?,
            adjust_for_inflation,
        }),
        Calculator::Lumpsum => ProjectionRequest::Lumpsum(LumpsumInput {
            initial_investment: clamp_text(
                "--initial-investment",
                amount,
                &INITIAL_INVESTMENT,
                true,
            )?,
            annual_return_rate,
            investment_years,
            adjust_for_inflation,
        }),
    };

    let overrides = AssumptionOverrides::inflation_percent(inflation_percent);
    let assumptions = Assumptions::default().with_overrides(&overrides);
    Ok(Some((
        ResolvedRequest {
            request,
            assumptions,
        },
        common.json,
    )))
}

pub fn render_text(response: &ProjectionResponse) -> String {
    let mut lines = vec![
        format!("{} projection", response.label),
        format!(
            "  Total invested:     {}",
            format_inr_with_symbol(response.result.total_invested)
        ),
        format!(
            "  Maturity value:     {}",
            format_inr_with_symbol(response.result.maturity_value)
        ),
        format!(
            "  Wealth gain:        {}",
            format_inr_with_symbol(response.summary.wealth_gain)
        ),
        format!(
            "  Absolute CAGR:      {:.2}%",
            response.summary.absolute_cagr * 100.0
        ),
    ];

    if let Some(real) = response.result.inflation_adjusted_value {
        lines.push(format!(
            "  Real value:         {} at {:.1}% inflation",
            format_inr_with_symbol(real),
            response.assumptions.inflation_rate * 100.0
        ));
        lines.push(format!(
            "  Real CAGR:          {:.2}%",
            response.summary.real_cagr * 100.0
        ));
    }
    if let Some(amount) = response.final_monthly_contribution {
        lines.push(format!(
            "  Final monthly SIP:  {}",
            format_inr_with_symbol(amount)
        ));
    }

    lines.join("\n")
}

/// Runs a calculator subcommand and returns what should be printed.
pub fn run_projection(command: &Command) -> Result<Option<String>, CliError> {
    let Some((resolved, as_json)) = resolve_command(command)? else {
        return Ok(None);
    };
    let response = build_projection_response(&resolved);
    if as_json {
        Ok(Some(serde_json::to_string_pretty(&response)?))
    } else {
        Ok(Some(render_text(&response)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn serve_defaults_to_port_8080() {
        let cli = parse(&["sipcalc", "serve"]);
        assert!(matches!(cli.command, Command::Serve { port: 8080 }));
        assert_eq!(resolve_command(&cli.command), Ok(None));
    }

    #[test]
    fn sip_flags_become_clamped_request() {
        let cli = parse(&[
            "sipcalc",
            "sip",
            "--monthly-investment",
            "5,000",
            "--annual-return-rate",
            "12",
            "--investment-years",
            "75",
        ]);
        let (resolved, as_json) = resolve_command(&cli.command)
            .expect("valid flags")
            .expect("calculator command");
        assert!(!as_json);
        assert_eq!(
            resolved.request,
            ProjectionRequest::Sip(SipInput {
                monthly_investment: 5_000.0,
                annual_return_rate: 12.0,
                investment_years: 50.0,
                adjust_for_inflation: false,
            })
        );
    }

    #[test]
    fn step_up_uses_limit_defaults_and_inflation_override() {
        let cli = parse(&["sipcalc", "step-up", "--inflation-rate", "4"]);
        let (resolved, _) = resolve_command(&cli.command)
            .expect("valid flags")
            .expect("calculator command");
        assert_eq!(
            resolved.request,
            ProjectionRequest::StepUpSip(StepUpSipInput {
                monthly_investment: 10_000.0,
                annual_return_rate: 12.0,
                investment_years: 20.0,
                annual_increment: 10.0,
                adjust_for_inflation: true,
            })
        );
        assert_eq!(resolved.assumptions.inflation_rate, 0.04);
    }

    #[test]
    fn non_finite_rates_are_rejected() {
        let cli = parse(&["sipcalc", "lumpsum", "--annual-return-rate", "NaN"]);
        assert_eq!(
            resolve_command(&cli.command),
            Err(InputError::NonFinite {
                field: "--annual-return-rate"
            })
        );
    }

    #[test]
    fn malformed_amount_is_rejected() {
        let cli = parse(&["sipcalc", "lumpsum", "--initial-investment", "1e5"]);
        assert!(matches!(
            resolve_command(&cli.command),
            Err(InputError::InvalidNumber { field: "--initial-investment", .. })
        ));
    }

    #[test]
    fn text_output_lists_headline_figures() {
        let cli = parse(&[
            "sipcalc",
            "lumpsum",
            "--initial-investment",
            "1,00,000",
            "--investment-years",
            "10",
        ]);
        let output = run_projection(&cli.command)
            .expect("valid flags")
            .expect("calculator command");
        assert!(output.starts_with("Lumpsum projection"));
        assert!(output.contains("₹1,00,000"));
        assert!(output.contains("₹3,10,585"));
        assert!(output.contains("Real value:"));
        assert!(!output.contains("Final monthly SIP"));
    }

    #[test]
    fn run_projection_surfaces_input_errors() {
        let cli = parse(&["sipcalc", "sip", "--monthly-investment", "12k", "--json"]);
        let err = run_projection(&cli.command).expect_err("malformed amount");
        assert!(matches!(
            err,
            CliError::Input(InputError::InvalidNumber {
                field: "--monthly-investment",
                ..
            })
        ));
        assert!(err.to_string().contains("\"12k\""));
    }

    #[test]
    fn json_output_is_parseable() {
        let cli = parse(&[
            "sipcalc",
            "step-up",
            "--investment-years",
            "1",
            "--adjust-for-inflation",
            "false",
            "--json",
        ]);
        let output = run_projection(&cli.command)
            .expect("valid flags")
            .expect("calculator command");
        let json: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(json["calculator"], "step-up-sip");
        assert_eq!(json["totalInvested"], 120_000.0);
        assert!(json.get("inflationAdjustedValue").is_none());
    }
}
