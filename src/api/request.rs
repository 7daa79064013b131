//! Request types for the payroll API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::PayrollInput;

/// Request body for the `/calculate` endpoint.
///
/// `hourly_rate` and `worked_hours` are required; every other field defaults
/// to zero when absent. Amounts may be sent as JSON numbers or as decimal
/// strings. Range checks happen in the engine, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Ordinary hours worked in the month.
    pub worked_hours: Decimal,
    /// Hours worked at night.
    #[serde(default)]
    pub night_hours_worked: Decimal,
    /// Overtime hours paid at 125%.
    #[serde(default)]
    pub extra_hours_125: Decimal,
    /// Overtime hours paid at 150%.
    #[serde(default)]
    pub extra_hours_150: Decimal,
    /// Overtime hours paid at 200%.
    #[serde(default)]
    pub extra_hours_200: Decimal,
    /// Flat performance bonus.
    #[serde(default)]
    pub performance_bonus_amount: Decimal,
    /// Monthly function-bonus reference.
    #[serde(default)]
    pub function_bonus_base_amount: Decimal,
    /// Flat "prime de niveau" bonus.
    #[serde(default)]
    pub prime_de_niveau_amount: Decimal,
    /// Seniority rate in percent.
    #[serde(default)]
    pub seniority_rate_percent: Decimal,
    /// Paid leave days taken.
    #[serde(default)]
    pub paid_leave_days: Decimal,
    /// Exceptional leave days taken.
    #[serde(default)]
    pub exceptional_leave_days: Decimal,
}

impl From<PayrollRequest> for PayrollInput {
    fn from(req: PayrollRequest) -> Self {
        PayrollInput {
            hourly_rate: req.hourly_rate,
            worked_hours: req.worked_hours,
            night_hours_worked: req.night_hours_worked,
            extra_hours_125: req.extra_hours_125,
            extra_hours_150: req.extra_hours_150,
            extra_hours_200: req.extra_hours_200,
            performance_bonus_amount: req.performance_bonus_amount,
            function_bonus_base_amount: req.function_bonus_base_amount,
            prime_de_niveau_amount: req.prime_de_niveau_amount,
            seniority_rate_percent: req.seniority_rate_percent,
            paid_leave_days: req.paid_leave_days,
            exceptional_leave_days: req.exceptional_leave_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_optional_fields_default_to_zero() {
        let req: PayrollRequest =
            serde_json::from_str(r#"{"hourly_rate": 50, "worked_hours": 191}"#).unwrap();
        let input: PayrollInput = req.into();

        assert_eq!(input.hourly_rate, dec!(50));
        assert_eq!(input.worked_hours, dec!(191));
        assert_eq!(input.paid_leave_days, Decimal::ZERO);
        assert_eq!(input.seniority_rate_percent, Decimal::ZERO);
    }

    #[test]
    fn test_accepts_decimal_strings() {
        let req: PayrollRequest = serde_json::from_str(
            r#"{"hourly_rate": "45.50", "worked_hours": "191", "extra_hours_150": "2.5"}"#,
        )
        .unwrap();

        assert_eq!(req.hourly_rate, dec!(45.50));
        assert_eq!(req.extra_hours_150, dec!(2.5));
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let err = serde_json::from_str::<PayrollRequest>(r#"{"hourly_rate": 50}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `worked_hours`"));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let result =
            serde_json::from_str::<PayrollRequest>(r#"{"hourly_rate": "abc", "worked_hours": 1}"#);
        assert!(result.is_err());
    }
}
