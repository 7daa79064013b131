//! Payroll result models.
//!
//! This module contains [`PayrollResult`] and the itemized breakdowns it is
//! made of. Serialized key names follow the historical payslip records, so
//! stored snapshots written by earlier versions rehydrate unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized earnings for the month, in payslip order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earnings {
    /// Hourly rate times worked hours.
    #[serde(rename = "Base Salary")]
    pub base_salary: Decimal,
    /// Night premium.
    #[serde(rename = "Night Hours Bonus")]
    pub night_bonus: Decimal,
    /// Overtime paid at 125%.
    #[serde(rename = "Extra Hours Bonus (125%)")]
    pub extra_hours_125_bonus: Decimal,
    /// Overtime paid at 150%.
    #[serde(rename = "Extra Hours Bonus (150%)")]
    pub extra_hours_150_bonus: Decimal,
    /// Overtime paid at 200%.
    #[serde(rename = "Extra Hours Bonus (200%)")]
    pub extra_hours_200_bonus: Decimal,
    /// Function bonus prorated by worked hours.
    #[serde(rename = "Function Bonus")]
    pub function_bonus: Decimal,
    /// Performance bonus, paid as supplied.
    #[serde(rename = "Performance Bonus")]
    pub performance_bonus: Decimal,
    /// Paid leave days times the paid-leave daily base.
    #[serde(rename = "Paid Leave Amount")]
    pub paid_leave_amount: Decimal,
    /// Exceptional leave days times the exceptional-leave daily base.
    #[serde(rename = "Exceptional Leave Amount")]
    pub exceptional_leave_amount: Decimal,
    /// Prime de niveau, paid as supplied.
    #[serde(rename = "Prime de Niveau")]
    pub prime_de_niveau: Decimal,
    /// Seniority percentage applied to the seniority base.
    #[serde(rename = "Seniority Bonus")]
    pub seniority_bonus: Decimal,
}

impl Earnings {
    /// Returns the components as `(label, amount)` pairs in payslip order.
    pub fn components(&self) -> [(&'static str, Decimal); 11] {
        [
            ("Base Salary", self.base_salary),
            ("Night Hours Bonus", self.night_bonus),
            ("Extra Hours Bonus (125%)", self.extra_hours_125_bonus),
            ("Extra Hours Bonus (150%)", self.extra_hours_150_bonus),
            ("Extra Hours Bonus (200%)", self.extra_hours_200_bonus),
            ("Function Bonus", self.function_bonus),
            ("Performance Bonus", self.performance_bonus),
            ("Paid Leave Amount", self.paid_leave_amount),
            ("Exceptional Leave Amount", self.exceptional_leave_amount),
            ("Prime de Niveau", self.prime_de_niveau),
            ("Seniority Bonus", self.seniority_bonus),
        ]
    }

    /// Sum of every component.
    pub fn total(&self) -> Decimal {
        self.components().iter().map(|(_, amount)| *amount).sum()
    }
}

/// Employee-side social security and pension contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialContributions {
    /// CNSS on the capped base.
    #[serde(rename = "CNSS Contribution (4.48%)")]
    pub cnss: Decimal,
    /// Maladie maternité (AMO).
    #[serde(rename = "Maladie Maternité Contrib.")]
    pub maladie_maternite: Decimal,
    /// Assurance complémentaire.
    #[serde(rename = "Assurance Complém. Contrib.")]
    pub assurance_complementaire: Decimal,
    /// Décès.
    #[serde(rename = "Décès Contribution")]
    pub deces: Decimal,
    /// Incapacité / invalidité.
    #[serde(rename = "Incap./Invalid. Contribution")]
    pub incapacite_invalidite: Decimal,
    /// Décès accidentel.
    #[serde(rename = "Décès Accidentel Contrib.")]
    pub deces_accidentel: Decimal,
    /// CIMR pension.
    #[serde(rename = "Retraite/CIMR Contrib. (4.5%)")]
    pub cimr: Decimal,
}

impl SocialContributions {
    /// Returns the contributions as `(label, amount)` pairs in payslip order.
    pub fn components(&self) -> [(&'static str, Decimal); 7] {
        [
            ("CNSS Contribution (4.48%)", self.cnss),
            ("Maladie Maternité Contrib.", self.maladie_maternite),
            ("Assurance Complém. Contrib.", self.assurance_complementaire),
            ("Décès Contribution", self.deces),
            ("Incap./Invalid. Contribution", self.incapacite_invalidite),
            ("Décès Accidentel Contrib.", self.deces_accidentel),
            ("Retraite/CIMR Contrib. (4.5%)", self.cimr),
        ]
    }

    /// Sum of all seven contributions.
    pub fn total(&self) -> Decimal {
        self.components().iter().map(|(_, amount)| *amount).sum()
    }
}

/// Income tax (IGR) details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDetails {
    /// Capped professional-expense allowance (informational).
    #[serde(rename = "Professional Expenses Deduction (Info)")]
    pub professional_expense_deduction: Decimal,
    /// Monthly net taxable income (SNI), floored at zero.
    #[serde(rename = "Net Taxable Income (SNI - Monthly)")]
    pub net_taxable_income_monthly: Decimal,
    /// Monthly income tax, floored at zero.
    #[serde(rename = "IGR (Income Tax - calc. 0 dependents)")]
    pub monthly_income_tax: Decimal,
}

/// The complete monthly payroll breakdown.
///
/// Constructed once per calculation and never mutated afterwards.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollEngine;
/// use payroll_engine::models::PayrollInput;
/// use rust_decimal_macros::dec;
///
/// let engine = PayrollEngine::moroccan();
/// let result = engine
///     .compute_salary(&PayrollInput {
///         hourly_rate: dec!(50),
///         worked_hours: dec!(191),
///         ..PayrollInput::default()
///     })
///     .unwrap();
///
/// assert_eq!(result.gross_salary, dec!(9550));
/// assert_eq!(
///     result.net_salary,
///     result.gross_salary - result.total_social_contributions - result.tax_details.monthly_income_tax
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// Itemized earnings.
    pub earnings: Earnings,
    /// Sum of all earnings.
    pub gross_salary: Decimal,
    /// Itemized social and pension contributions.
    #[serde(rename = "social_pension_contributions")]
    pub social_contributions: SocialContributions,
    /// Sum of all contributions.
    #[serde(rename = "total_social_pension_contributions")]
    pub total_social_contributions: Decimal,
    /// Income tax breakdown.
    #[serde(rename = "igr_calculation_details")]
    pub tax_details: TaxDetails,
    /// Gross salary less contributions and income tax.
    pub net_salary: Decimal,
}

impl PayrollResult {
    /// Contributions plus income tax.
    ///
    /// Informational only; [`PayrollResult::net_salary`] is derived from its
    /// parts directly.
    pub fn total_deductions(&self) -> Decimal {
        self.total_social_contributions + self.tax_details.monthly_income_tax
    }
}
