//! Payroll input model.
//!
//! This module defines [`PayrollInput`], the flat record of worked time,
//! bonuses and leave days for one monthly calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Largest value accepted for any single input field.
///
/// With a rate table that passes [`RateTable::validate`], every intermediate
/// product stays inside `Decimal`'s range.
///
/// [`RateTable::validate`]: crate::config::RateTable::validate
pub const MAX_INPUT_VALUE: Decimal = dec!(1000000000);

/// Worked time, bonuses and leave for one month.
///
/// All amounts are in the payroll currency; all hour and day counts are
/// for the month being computed.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     hourly_rate: dec!(50),
///     worked_hours: dec!(191),
///     ..PayrollInput::default()
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// Base hourly rate.
    pub hourly_rate: Decimal,
    /// Ordinary hours worked in the month.
    pub worked_hours: Decimal,
    /// Hours worked at night (paid a fixed premium on top).
    pub night_hours_worked: Decimal,
    /// Overtime hours paid at 125%.
    pub extra_hours_125: Decimal,
    /// Overtime hours paid at 150%.
    pub extra_hours_150: Decimal,
    /// Overtime hours paid at 200%.
    pub extra_hours_200: Decimal,
    /// Flat performance bonus.
    pub performance_bonus_amount: Decimal,
    /// Monthly function-bonus reference, prorated by worked hours.
    pub function_bonus_base_amount: Decimal,
    /// Flat "prime de niveau" bonus.
    pub prime_de_niveau_amount: Decimal,
    /// Seniority rate in percent, between 0 and 100.
    pub seniority_rate_percent: Decimal,
    /// Paid leave days taken.
    pub paid_leave_days: Decimal,
    /// Exceptional leave days taken.
    pub exceptional_leave_days: Decimal,
}

impl PayrollInput {
    /// Returns every field with its name, in declaration order.
    pub fn fields(&self) -> [(&'static str, Decimal); 12] {
        [
            ("hourly_rate", self.hourly_rate),
            ("worked_hours", self.worked_hours),
            ("night_hours_worked", self.night_hours_worked),
            ("extra_hours_125", self.extra_hours_125),
            ("extra_hours_150", self.extra_hours_150),
            ("extra_hours_200", self.extra_hours_200),
            ("performance_bonus_amount", self.performance_bonus_amount),
            ("function_bonus_base_amount", self.function_bonus_base_amount),
            ("prime_de_niveau_amount", self.prime_de_niveau_amount),
            ("seniority_rate_percent", self.seniority_rate_percent),
            ("paid_leave_days", self.paid_leave_days),
            ("exceptional_leave_days", self.exceptional_leave_days),
        ]
    }

    /// Checks the input before any computation.
    ///
    /// Every field must be between 0 and [`MAX_INPUT_VALUE`], and
    /// `seniority_rate_percent` must not exceed 100. The first violation is
    /// reported as [`EngineError::InvalidInput`].
    pub fn validate(&self) -> EngineResult<()> {
        for (field, value) in self.fields() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not be negative (got {})", value),
                ));
            }
            if value > MAX_INPUT_VALUE {
                return Err(EngineError::invalid_input(
                    field,
                    format!("must not exceed {} (got {})", MAX_INPUT_VALUE, value),
                ));
            }
        }

        if self.seniority_rate_percent > Decimal::ONE_HUNDRED {
            return Err(EngineError::invalid_input(
                "seniority_rate_percent",
                format!("must be between 0 and 100 (got {})", self.seniority_rate_percent),
            ));
        }

        Ok(())
    }
}
