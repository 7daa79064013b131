//! Professional-expense deduction and progressive income tax (IGR).
//!
//! Taxable income is the gross salary less social contributions and a
//! capped professional-expense allowance. It is annualized, taxed with the
//! closed-form bracket formula `annual * rate - fixed_deduction`, and brought
//! back to a monthly figure.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::{ProfessionalExpenseRates, TaxBracket};
use crate::models::TaxDetails;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Returns the first bracket, in table order, whose limit is at or above
/// `annual_income`.
pub fn find_bracket(annual_income: Decimal, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    brackets.iter().find(|bracket| bracket.contains(annual_income))
}

/// Calculates the monthly income tax on a monthly net taxable income.
///
/// Returns zero for a non-positive income without consulting the brackets,
/// and floors the result at zero (a bracket's deduction can exceed the
/// product for incomes just inside it). An income no bracket covers is
/// untaxed.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_income_tax;
/// use payroll_engine::config::RateTable;
/// use rust_decimal_macros::dec;
///
/// let brackets = RateTable::moroccan_default().income_tax_brackets;
///
/// // 2500 * 12 = 30000, the top of the exempt bracket
/// assert_eq!(monthly_income_tax(dec!(2500), &brackets), dec!(0));
/// // 50000 * 12 = 600000 -> (600000 * 0.38 - 24400) / 12
/// assert_eq!(
///     monthly_income_tax(dec!(50000), &brackets),
///     (dec!(600000) * dec!(0.38) - dec!(24400)) / dec!(12)
/// );
/// ```
pub fn monthly_income_tax(
    net_taxable_income_monthly: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    if net_taxable_income_monthly <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let annual_income = net_taxable_income_monthly * MONTHS_PER_YEAR;
    let Some(bracket) = find_bracket(annual_income, brackets) else {
        return Decimal::ZERO;
    };

    let annual_tax = annual_income * bracket.rate - bracket.fixed_deduction;
    (annual_tax / MONTHS_PER_YEAR).max(Decimal::ZERO)
}

/// Resolves the professional-expense deduction, taxable income and tax.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::resolve_income_tax;
/// use payroll_engine::config::RateTable;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::moroccan_default();
/// let details = resolve_income_tax(
///     dec!(20000),
///     dec!(2000),
///     &rates.professional_expenses,
///     &rates.income_tax_brackets,
/// );
///
/// // 20% of 18000 is 3600, capped at 2500
/// assert_eq!(details.professional_expense_deduction, dec!(2500));
/// assert_eq!(details.net_taxable_income_monthly, dec!(15500));
/// ```
pub fn resolve_income_tax(
    gross_salary: Decimal,
    total_social_contributions: Decimal,
    professional_expenses: &ProfessionalExpenseRates,
    brackets: &[TaxBracket],
) -> TaxDetails {
    let professional_expense_base = gross_salary - total_social_contributions;
    let professional_expense_deduction = (professional_expense_base * professional_expenses.rate)
        .min(professional_expenses.ceiling_monthly)
        .max(Decimal::ZERO);

    let net_taxable_income_monthly =
        (gross_salary - total_social_contributions - professional_expense_deduction)
            .max(Decimal::ZERO);

    let tax = monthly_income_tax(net_taxable_income_monthly, brackets);

    debug!(
        professional_expense_deduction = %professional_expense_deduction,
        net_taxable_income_monthly = %net_taxable_income_monthly,
        monthly_income_tax = %tax,
        "Income tax resolved"
    );

    TaxDetails {
        professional_expense_deduction,
        net_taxable_income_monthly,
        monthly_income_tax: tax,
    }
}
