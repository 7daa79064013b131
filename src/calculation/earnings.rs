//! Earnings aggregation.
//!
//! This module turns worked hours, bonus inputs and leave days into the
//! itemized [`Earnings`] of a payslip and its gross salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::WorkTimeRates;
use crate::models::{Earnings, PayrollInput};

use super::leave_base::LeaveBases;
use super::proration::prorate_or_zero;

/// The result of aggregating earnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsResult {
    /// The itemized components.
    pub earnings: Earnings,
    /// The amount the seniority percentage was applied to.
    pub seniority_base: Decimal,
    /// Sum of every component.
    pub gross_salary: Decimal,
}

/// Calculates itemized earnings and gross salary.
///
/// - Night hours earn a fixed premium fraction of the hourly rate on top of
///   the hours already counted in `worked_hours`.
/// - Overtime hours are paid at their multiplier of the hourly rate.
/// - The function bonus reference is prorated by worked hours over a
///   standard month (zero when the standard month is configured as zero).
/// - Leave days are paid at the daily bases from
///   [`calculate_leave_bases`](super::calculate_leave_bases).
/// - The seniority base excludes leave amounts and the prime de niveau.
///
/// Inputs are assumed validated; no component is clamped.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{calculate_earnings, calculate_leave_bases};
/// use payroll_engine::config::RateTable;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::moroccan_default();
/// let input = PayrollInput {
///     hourly_rate: dec!(50),
///     worked_hours: dec!(191),
///     night_hours_worked: dec!(10),
///     ..PayrollInput::default()
/// };
/// let bases = calculate_leave_bases(input.hourly_rate, input.function_bonus_base_amount, &rates.work_time);
/// let result = calculate_earnings(&input, &bases, &rates.work_time);
///
/// assert_eq!(result.earnings.base_salary, dec!(9550));
/// assert_eq!(result.earnings.night_bonus, dec!(100));
/// assert_eq!(result.gross_salary, dec!(9650));
/// ```
pub fn calculate_earnings(
    input: &PayrollInput,
    leave_bases: &LeaveBases,
    rates: &WorkTimeRates,
) -> EarningsResult {
    let hourly_rate = input.hourly_rate;

    let base_salary = hourly_rate * input.worked_hours;
    let night_bonus = hourly_rate * input.night_hours_worked * rates.night_premium_rate;
    let extra_hours_125_bonus =
        hourly_rate * input.extra_hours_125 * rates.overtime_125_multiplier;
    let extra_hours_150_bonus =
        hourly_rate * input.extra_hours_150 * rates.overtime_150_multiplier;
    let extra_hours_200_bonus =
        hourly_rate * input.extra_hours_200 * rates.overtime_200_multiplier;

    let function_bonus = prorate_or_zero(
        input.worked_hours * input.function_bonus_base_amount,
        rates.standard_monthly_hours,
        "standard_monthly_hours",
    );

    let paid_leave_amount = leave_bases.paid_leave_daily_base * input.paid_leave_days;
    let exceptional_leave_amount =
        leave_bases.exceptional_leave_daily_base * input.exceptional_leave_days;

    let seniority_base = base_salary
        + night_bonus
        + function_bonus
        + input.performance_bonus_amount
        + extra_hours_125_bonus
        + extra_hours_150_bonus
        + extra_hours_200_bonus;
    let seniority_bonus = seniority_base * (input.seniority_rate_percent / Decimal::ONE_HUNDRED);

    let earnings = Earnings {
        base_salary,
        night_bonus,
        extra_hours_125_bonus,
        extra_hours_150_bonus,
        extra_hours_200_bonus,
        function_bonus,
        performance_bonus: input.performance_bonus_amount,
        paid_leave_amount,
        exceptional_leave_amount,
        prime_de_niveau: input.prime_de_niveau_amount,
        seniority_bonus,
    };
    let gross_salary = earnings.total();

    debug!(
        base_salary = %base_salary,
        seniority_base = %seniority_base,
        seniority_bonus = %seniority_bonus,
        gross_salary = %gross_salary,
        "Earnings aggregated"
    );

    EarningsResult {
        earnings,
        seniority_base,
        gross_salary,
    }
}
