//! Calculation logic for the payroll engine.
//!
//! A monthly payslip is computed in four stages: leave daily bases, earnings
//! aggregation, social contributions and income tax. Each stage is a pure
//! function of its inputs and the rate table; [`PayrollEngine`] wires them
//! together.

mod deductions;
mod earnings;
mod engine;
mod income_tax;
mod leave_base;
mod proration;

pub use deductions::calculate_social_contributions;
pub use earnings::{EarningsResult, calculate_earnings};
pub use engine::PayrollEngine;
pub use income_tax::{find_bracket, monthly_income_tax, resolve_income_tax};
pub use leave_base::{LEAVE_BASE_DECIMAL_PLACES, LeaveBases, calculate_leave_bases};
pub use proration::divide_by_reference;
