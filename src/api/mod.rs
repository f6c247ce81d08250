use axum::{
    Router,
    extract::{Json, Query},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::core::{
    ANNUAL_INCREMENT, ANNUAL_RETURN_RATE, AssumptionOverrides, Assumptions, Calculator,
    INFLATION_RATE, INITIAL_INVESTMENT, INPUT_LIMITS, INVESTMENT_YEARS, InputLimit, LumpsumInput,
    MONTHLY_INVESTMENT, ProjectionRequest, ProjectionResult, ProjectionSummary, SipInput,
    StepUpSipInput, clamp_number, clamp_text, final_monthly_contribution, format_inr_with_symbol,
    project, summarize,
};
use crate::error::{InputError, InputResult};

/// A numeric field as sent by a form: either a JSON number or the raw text typed into it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    fn resolve(&self, field: &'static str, limit: &InputLimit, integer: bool) -> InputResult<f64> {
        match self {
            // Whole-rupee fields drop any fraction, as their text form does.
            FieldValue::Number(value) if integer => clamp_number(field, value.trunc(), limit),
            FieldValue::Number(value) => clamp_number(field, *value, limit),
            FieldValue::Text(text) => clamp_text(field, text, limit, integer),
        }
    }
}

/// Request body shared by all three calculators. Missing fields take the default from the
/// input limits; fields a calculator has no use for are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectionPayload {
    pub monthly_investment: Option<FieldValue>,
    pub initial_investment: Option<FieldValue>,
    pub annual_return_rate: Option<FieldValue>,
    pub investment_years: Option<FieldValue>,
    pub annual_increment: Option<FieldValue>,
    /// Percent, e.g. 6 for 6%.
    pub inflation_rate: Option<FieldValue>,
    pub adjust_for_inflation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub request: ProjectionRequest,
    pub assumptions: Assumptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedAmounts {
    pub total_invested: String,
    pub maturity_value: String,
    pub wealth_gain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inflation_adjusted_value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResponse {
    pub calculator: Calculator,
    pub label: &'static str,
    pub inputs: ProjectionRequest,
    pub assumptions: Assumptions,
    #[serde(flatten)]
    pub result: ProjectionResult,
    pub summary: ProjectionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_monthly_contribution: Option<f64>,
    pub formatted: FormattedAmounts,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

fn resolve_field(
    value: Option<&FieldValue>,
    field: &'static str,
    limit: &InputLimit,
    integer: bool,
) -> InputResult<f64> {
    match value {
        Some(v) => v.resolve(field, limit, integer),
        None => Ok(limit.default),
    }
}

pub fn resolve_payload(
    calculator: Calculator,
    payload: &ProjectionPayload,
) -> InputResult<ResolvedRequest> {
    let annual_return_rate = resolve_field(
        payload.annual_return_rate.as_ref(),
        "annualReturnRate",
        &ANNUAL_RETURN_RATE,
        false,
    )?;
    let investment_years = resolve_field(
        payload.investment_years.as_ref(),
        "investmentYears",
        &INVESTMENT_YEARS,
        false,
    )?;
    let inflation_percent = resolve_field(
        payload.inflation_rate.as_ref(),
        "inflationRate",
        &INFLATION_RATE,
        false,
    )?;
    let adjust_for_inflation = payload
        .adjust_for_inflation
        .unwrap_or_else(|| calculator.adjusts_for_inflation_by_default());

    let request = match calculator {
        Calculator::Sip => ProjectionRequest::Sip(SipInput {
            monthly_investment: resolve_field(
                payload.monthly_investment.as_ref(),
                "monthlyInvestment",
                &MONTHLY_INVESTMENT,
                true,
            )?,
            annual_return_rate,
            investment_years,
            adjust_for_inflation,
        }),
        Calculator::StepUpSip => ProjectionRequest::StepUpSip(StepUpSipInput {
            monthly_investment: resolve_field(
                payload.monthly_investment.as_ref(),
                "monthlyInvestment",
                &MONTHLY_INVESTMENT,
                true,
            )?,
            annual_return_rate,
            investment_years,
            annual_increment: resolve_field(
                payload.annual_increment.as_ref(),
                "annualIncrement",
                &ANNUAL_INCREMENT,
                false,
            )?,
            adjust_for_inflation,
        }),
        Calculator::Lumpsum => ProjectionRequest::Lumpsum(LumpsumInput {
            initial_investment: resolve_field(
                payload.initial_investment.as_ref(),
                "initialInvestment",
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

    Ok(ResolvedRequest {
        request,
        assumptions,
    })
}

pub fn build_projection_response(resolved: &ResolvedRequest) -> ProjectionResponse {
    let request = resolved.request;
    let result = project(&request, &resolved.assumptions);
    let summary = summarize(&result, request.investment_years());
    let final_monthly_contribution = match &request {
        ProjectionRequest::StepUpSip(input) => Some(final_monthly_contribution(input)),
        _ => None,
    };

    ProjectionResponse {
        calculator: request.calculator(),
        label: request.calculator().label(),
        inputs: request,
        assumptions: resolved.assumptions.clone(),
        result,
        summary,
        final_monthly_contribution,
        formatted: FormattedAmounts {
            total_invested: format_inr_with_symbol(result.total_invested),
            maturity_value: format_inr_with_symbol(result.maturity_value),
            wealth_gain: format_inr_with_symbol(summary.wealth_gain),
            inflation_adjusted_value: result.inflation_adjusted_value.map(format_inr_with_symbol),
        },
    }
}

pub fn router() -> Router {
    Router::new()
        .route("/api/sip", get(sip_get_handler).post(sip_post_handler))
        .route(
            "/api/step-up-sip",
            get(step_up_get_handler).post(step_up_post_handler),
        )
        .route(
            "/api/lumpsum",
            get(lumpsum_get_handler).post(lumpsum_post_handler),
        )
        .route("/api/assumptions", get(assumptions_handler))
        .route("/api/limits", get(limits_handler))
        .fallback(not_found_handler)
}

pub async fn run_http_server(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    info!("projection API listening on http://{addr}");
    info!("local access: http://127.0.0.1:{port}/api/sip");

    axum::serve(listener, router()).await
}

async fn sip_get_handler(Query(payload): Query<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::Sip, payload)
}

async fn sip_post_handler(Json(payload): Json<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::Sip, payload)
}

async fn step_up_get_handler(Query(payload): Query<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::StepUpSip, payload)
}

async fn step_up_post_handler(Json(payload): Json<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::StepUpSip, payload)
}

async fn lumpsum_get_handler(Query(payload): Query<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::Lumpsum, payload)
}

async fn lumpsum_post_handler(Json(payload): Json<ProjectionPayload>) -> Response {
    projection_handler_impl(Calculator::Lumpsum, payload)
}

async fn assumptions_handler() -> Response {
    json_response(StatusCode::OK, Assumptions::default())
}

async fn limits_handler() -> Response {
    json_response(StatusCode::OK, INPUT_LIMITS)
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

fn projection_handler_impl(calculator: Calculator, payload: ProjectionPayload) -> Response {
    let resolved = match resolve_payload(calculator, &payload) {
        Ok(resolved) => resolved,
        Err(err) => {
            warn!("rejected {} request: {err}", calculator.label());
            return input_error_response(&err);
        }
    };

    let response = build_projection_response(&resolved);
    debug!(
        "{} projection: invested={} maturity={} real={:?}",
        calculator.label(),
        response.result.total_invested,
        response.result.maturity_value,
        response.result.inflation_adjusted_value
    );
    json_response(StatusCode::OK, response)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-store"),
    );
    response
}

fn error_response(status: StatusCode, msg: &str) -> Response {
    json_response(
        status,
        ErrorResponse {
            error: msg.to_string(),
        },
    )
}

fn input_error_response(err: &InputError) -> Response {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}
