//! Errors raised while turning caller input into calculator input.
//!
//! The calculators themselves are total functions; only the outer surfaces (HTTP payloads
//! and command-line flags) can reject a value.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Text that is not a plain non-negative number, e.g. `"12a"` or `"-5"`.
    #[error("{field} must be a non-negative number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    /// NaN or an infinity.
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

pub type InputResult<T> = Result<T, InputError>;

/// Failures of a calculator subcommand.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("failed to render projection as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_field() {
        let err = InputError::InvalidNumber {
            field: "monthlyInvestment",
            value: "12a".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "monthlyInvestment must be a non-negative number, got \"12a\""
        );

        let err = InputError::NonFinite {
            field: "annualReturnRate",
        };
        assert_eq!(err.to_string(), "annualReturnRate must be a finite number");
    }

    #[test]
    fn cli_errors_keep_input_messages() {
        let err = CliError::from(InputError::NonFinite {
            field: "--investment-years",
        });
        assert_eq!(err.to_string(), "--investment-years must be a finite number");
        assert!(matches!(err, CliError::Input(_)));
    }
}
