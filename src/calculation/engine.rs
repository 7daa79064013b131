//! The payroll engine.
//!
//! [`PayrollEngine`] owns an immutable [`RateTable`] and runs the four
//! calculation stages in order: leave bases, earnings, social contributions,
//! income tax.

use tracing::debug;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{PayrollInput, PayrollResult};

use super::deductions::calculate_social_contributions;
use super::earnings::calculate_earnings;
use super::income_tax::resolve_income_tax;
use super::leave_base::calculate_leave_bases;

/// Computes monthly payslips against a fixed rate table.
///
/// The engine holds no mutable state, so a single instance can be shared
/// across threads and requests.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollEngine;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let engine = PayrollEngine::moroccan();
/// let result = engine.compute_salary(&PayrollInput {
///     hourly_rate: dec!(50),
///     worked_hours: dec!(191),
///     ..PayrollInput::default()
/// })?;
///
/// assert_eq!(result.social_contributions.cnss, dec!(268.80));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    rates: RateTable,
}

impl PayrollEngine {
    /// Creates an engine for `rates`, rejecting a structurally invalid table.
    pub fn new(rates: RateTable) -> EngineResult<Self> {
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Creates an engine for the built-in Moroccan ruleset.
    pub fn moroccan() -> Self {
        Self {
            rates: RateTable::moroccan_default(),
        }
    }

    /// Returns the rate table this engine computes with.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Computes the monthly payroll breakdown for `input`.
    ///
    /// Returns [`EngineError::InvalidInput`](crate::error::EngineError::InvalidInput)
    /// without computing anything if the input fails
    /// [`PayrollInput::validate`]. A zero working-time reference in the rate
    /// table is recovered locally: the prorations it feeds become zero.
    pub fn compute_salary(&self, input: &PayrollInput) -> EngineResult<PayrollResult> {
        input.validate()?;

        let rates = &self.rates;

        let leave_bases = calculate_leave_bases(
            input.hourly_rate,
            input.function_bonus_base_amount,
            &rates.work_time,
        );
        let earnings = calculate_earnings(input, &leave_bases, &rates.work_time);
        let gross_salary = earnings.gross_salary;

        let social_contributions = calculate_social_contributions(gross_salary, &rates.social);
        let total_social_contributions = social_contributions.total();

        let tax_details = resolve_income_tax(
            gross_salary,
            total_social_contributions,
            &rates.professional_expenses,
            &rates.income_tax_brackets,
        );

        let net_salary =
            gross_salary - total_social_contributions - tax_details.monthly_income_tax;

        debug!(
            gross_salary = %gross_salary,
            total_social_contributions = %total_social_contributions,
            monthly_income_tax = %tax_details.monthly_income_tax,
            net_salary = %net_salary,
            "Salary computed"
        );

        Ok(PayrollResult {
            earnings: earnings.earnings,
            gross_salary,
            social_contributions,
            total_social_contributions,
            tax_details,
            net_salary,
        })
    }
}

impl Default for PayrollEngine {
    fn default() -> Self {
        Self::moroccan()
    }
}
