use serde::{Deserialize, Serialize};

pub const DEFAULT_INFLATION_RATE: f64 = 0.06;
pub const DEFAULT_COMPOUNDING_PER_YEAR: u32 = 12;
pub const DEFAULT_CURRENCY: &str = "INR";

/// Market assumptions shared by every calculator.
///
/// `inflation_rate` is a fraction (0.06 means 6%). Values are not validated here;
/// calculators accept whatever they are handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assumptions {
    pub inflation_rate: f64,
    pub compounding_per_year: u32,
    pub currency: String,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::india()
    }
}

impl Assumptions {
    pub fn india() -> Self {
        Self {
            inflation_rate: DEFAULT_INFLATION_RATE,
            compounding_per_year: DEFAULT_COMPOUNDING_PER_YEAR,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_overrides(&self, overrides: &AssumptionOverrides) -> Self {
        Self {
            inflation_rate: overrides.inflation_rate.unwrap_or(self.inflation_rate),
            compounding_per_year: overrides
                .compounding_per_year
                .unwrap_or(self.compounding_per_year),
            currency: overrides
                .currency
                .clone()
                .unwrap_or_else(|| self.currency.clone()),
        }
    }
}

/// Partial assumptions layered over a base record by [`Assumptions::with_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AssumptionOverrides {
    pub inflation_rate: Option<f64>,
    pub compounding_per_year: Option<u32>,
    pub currency: Option<String>,
}

impl AssumptionOverrides {
    pub fn inflation_percent(percent: f64) -> Self {
        Self {
            inflation_rate: Some(percent / 100.0),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inflation_rate.is_none()
            && self.compounding_per_year.is_none()
            && self.currency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_assumptions_match_india_profile() {
        let assumptions = Assumptions::default();
        assert_eq!(assumptions.inflation_rate, 0.06);
        assert_eq!(assumptions.compounding_per_year, 12);
        assert_eq!(assumptions.currency, "INR");
    }

    #[test]
    fn overrides_replace_only_supplied_fields() {
        let merged = Assumptions::default().with_overrides(&AssumptionOverrides {
            inflation_rate: Some(0.04),
            ..AssumptionOverrides::default()
        });
        assert_eq!(merged.inflation_rate, 0.04);
        assert_eq!(merged.compounding_per_year, 12);
        assert_eq!(merged.currency, "INR");
    }

    #[test]
    fn empty_overrides_leave_base_untouched() {
        let base = Assumptions::default();
        let overrides = AssumptionOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(base.with_overrides(&overrides), base);
    }

    #[test]
    fn inflation_percent_converts_to_fraction() {
        let overrides = AssumptionOverrides::inflation_percent(7.5);
        assert_eq!(overrides.inflation_rate, Some(0.075));
        assert!(!overrides.is_empty());
    }

    #[test]
    fn overrides_deserialize_from_camel_case_json() {
        let overrides: AssumptionOverrides =
            serde_json::from_str(r#"{"compoundingPerYear": 4, "currency": "USD"}"#)
                .expect("valid overrides");
        let merged = Assumptions::default().with_overrides(&overrides);
        assert_eq!(merged.compounding_per_year, 4);
        assert_eq!(merged.currency, "USD");
        assert_eq!(merged.inflation_rate, 0.06);
    }
}
