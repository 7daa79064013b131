//! Leave daily base calculation.
//!
//! This module derives the per-day amounts paid for paid leave and
//! exceptional leave from the hourly rate and the function-bonus reference.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::WorkTimeRates;

use super::proration::prorate_or_zero;

/// Months in a year, used to annualize the monthly leave reference.
const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Decimal places leave daily bases are rounded to.
pub const LEAVE_BASE_DECIMAL_PLACES: u32 = 2;

/// Per-day leave amounts, rounded to the cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeaveBases {
    /// Amount paid for one day of paid leave.
    pub paid_leave_daily_base: Decimal,
    /// Amount paid for one day of exceptional leave.
    pub exceptional_leave_daily_base: Decimal,
}

/// Calculates the paid and exceptional leave daily bases.
///
/// The monthly reference is the hourly rate over a standard month plus the
/// full function-bonus reference. It is annualized and spread over the
/// standard working days of a year. The exceptional base is a fixed fraction
/// of the unrounded paid base. Both results are rounded to two decimal
/// places (banker's rounding) before they are used.
///
/// A zero `standard_annual_work_days` makes both bases zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_leave_bases;
/// use payroll_engine::config::RateTable;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::moroccan_default();
/// let bases = calculate_leave_bases(dec!(50), dec!(0), &rates.work_time);
///
/// // 50 * 191 * 12 / 288 = 397.9166...
/// assert_eq!(bases.paid_leave_daily_base, dec!(397.92));
/// assert_eq!(bases.exceptional_leave_daily_base, dec!(258.65));
/// ```
pub fn calculate_leave_bases(
    hourly_rate: Decimal,
    function_bonus_base_amount: Decimal,
    rates: &WorkTimeRates,
) -> LeaveBases {
    let monthly_reference =
        hourly_rate * rates.standard_monthly_hours + function_bonus_base_amount;
    let paid_unrounded = prorate_or_zero(
        monthly_reference * MONTHS_PER_YEAR,
        rates.standard_annual_work_days,
        "standard_annual_work_days",
    );
    let exceptional_unrounded = paid_unrounded * rates.exceptional_leave_factor;

    let bases = LeaveBases {
        paid_leave_daily_base: paid_unrounded.round_dp(LEAVE_BASE_DECIMAL_PLACES),
        exceptional_leave_daily_base: exceptional_unrounded.round_dp(LEAVE_BASE_DECIMAL_PLACES),
    };

    debug!(
        paid_leave_daily_base = %bases.paid_leave_daily_base,
        exceptional_leave_daily_base = %bases.exceptional_leave_daily_base,
        "Leave daily bases"
    );

    bases
}
