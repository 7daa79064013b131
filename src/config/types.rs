//! Rate table types for the payroll ruleset.
//!
//! This module contains the strongly-typed configuration structures that
//! make up a [`RateTable`]. They can be built in code (see
//! [`RateTable::moroccan_default`]) or deserialized from a YAML file.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::MAX_INPUT_VALUE;

/// Largest accepted contribution rate, premium or fraction.
pub const MAX_RATE: Decimal = Decimal::ONE;

/// Largest accepted overtime multiplier.
pub const MAX_MULTIPLIER: Decimal = dec!(10);

/// Largest accepted standard month, in hours (31 days of 24 hours).
pub const MAX_MONTHLY_HOURS: Decimal = dec!(744);

/// Largest accepted standard working year, in days.
pub const MAX_ANNUAL_WORK_DAYS: Decimal = dec!(366);

/// Employee-side social security and pension rates.
///
/// Only the CNSS contribution is capped; every other rate applies to the
/// full gross salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialRates {
    /// CNSS contribution rate, applied to the capped base.
    pub cnss_rate: Decimal,
    /// Monthly wage ceiling for the CNSS base.
    pub cnss_ceiling_monthly: Decimal,
    /// Maladie maternité (AMO) rate.
    pub maladie_maternite_rate: Decimal,
    /// Assurance complémentaire rate.
    pub assurance_complementaire_rate: Decimal,
    /// Décès rate.
    pub deces_rate: Decimal,
    /// Incapacité / invalidité rate.
    pub incapacite_invalidite_rate: Decimal,
    /// Décès accidentel rate.
    pub deces_accidentel_rate: Decimal,
    /// CIMR pension rate.
    pub cimr_rate: Decimal,
}

/// Working-time references and earnings multipliers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTimeRates {
    /// Hours in a standard month; prorates the function bonus.
    pub standard_monthly_hours: Decimal,
    /// Working days in a standard year; divides the annual leave base.
    pub standard_annual_work_days: Decimal,
    /// Fraction of the paid-leave daily base paid for an exceptional leave day.
    pub exceptional_leave_factor: Decimal,
    /// Night premium as a fraction of the hourly rate.
    pub night_premium_rate: Decimal,
    /// Multiplier for overtime hours paid at 125%.
    pub overtime_125_multiplier: Decimal,
    /// Multiplier for overtime hours paid at 150%.
    pub overtime_150_multiplier: Decimal,
    /// Multiplier for overtime hours paid at 200%.
    pub overtime_200_multiplier: Decimal,
}

/// Professional-expense allowance deducted before income tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalExpenseRates {
    /// Fraction of the post-contribution base that is deductible.
    pub rate: Decimal,
    /// Monthly cap on the deduction.
    pub ceiling_monthly: Decimal,
}

/// One bracket of the annual income tax (IGR) schedule.
///
/// `fixed_deduction` pre-subtracts the tax owed on lower brackets at this
/// bracket's rate, so `annual * rate - fixed_deduction` gives the whole tax.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = TaxBracket {
///     upper_limit: Some(dec!(50000.00)),
///     rate: dec!(0.10),
///     fixed_deduction: dec!(3000.00),
/// };
/// assert!(bracket.contains(dec!(50000.00)));
/// assert!(!bracket.contains(dec!(50000.01)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Inclusive annual upper bound; `None` for the open top bracket.
    pub upper_limit: Option<Decimal>,
    /// Marginal rate of the bracket.
    pub rate: Decimal,
    /// Amount subtracted from `annual * rate`.
    pub fixed_deduction: Decimal,
}

impl TaxBracket {
    /// Returns true if `annual_income` falls at or below this bracket's limit.
    pub fn contains(&self, annual_income: Decimal) -> bool {
        self.upper_limit.is_none_or(|limit| annual_income <= limit)
    }
}

/// The complete, immutable set of rates a [`PayrollEngine`] computes with.
///
/// [`PayrollEngine`]: crate::calculation::PayrollEngine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Social and pension contribution rates.
    pub social: SocialRates,
    /// Working-time references and multipliers.
    pub work_time: WorkTimeRates,
    /// Professional-expense allowance.
    pub professional_expenses: ProfessionalExpenseRates,
    /// IGR brackets in ascending order of upper limit.
    pub income_tax_brackets: Vec<TaxBracket>,
}

impl RateTable {
    /// The Moroccan ruleset the engine ships with.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::RateTable;
    /// use rust_decimal_macros::dec;
    ///
    /// let rates = RateTable::moroccan_default();
    /// assert_eq!(rates.social.cnss_ceiling_monthly, dec!(6000.00));
    /// assert_eq!(rates.income_tax_brackets.len(), 6);
    /// ```
    pub fn moroccan_default() -> Self {
        Self {
            social: SocialRates {
                cnss_rate: dec!(0.0448),
                cnss_ceiling_monthly: dec!(6000.00),
                maladie_maternite_rate: dec!(0.027025),
                assurance_complementaire_rate: dec!(0.002280),
                deces_rate: dec!(0.002750),
                incapacite_invalidite_rate: dec!(0.003135),
                deces_accidentel_rate: dec!(0.000570),
                cimr_rate: dec!(0.0450),
            },
            work_time: WorkTimeRates {
                standard_monthly_hours: dec!(191.0),
                standard_annual_work_days: dec!(288.0),
                exceptional_leave_factor: dec!(0.65),
                night_premium_rate: dec!(0.20),
                overtime_125_multiplier: dec!(1.25),
                overtime_150_multiplier: dec!(1.50),
                overtime_200_multiplier: dec!(2.00),
            },
            professional_expenses: ProfessionalExpenseRates {
                rate: dec!(0.20),
                ceiling_monthly: dec!(2500.00),
            },
            income_tax_brackets: vec![
                bracket(Some(dec!(30000.00)), dec!(0.00), dec!(0.00)),
                bracket(Some(dec!(50000.00)), dec!(0.10), dec!(3000.00)),
                bracket(Some(dec!(60000.00)), dec!(0.20), dec!(8000.00)),
                bracket(Some(dec!(80000.00)), dec!(0.30), dec!(14000.00)),
                bracket(Some(dec!(180000.00)), dec!(0.34), dec!(17200.00)),
                bracket(None, dec!(0.38), dec!(24400.00)),
            ],
        }
    }

    /// Checks that the table can be used by the engine.
    ///
    /// Every rate, ceiling and reference must be non-negative, and the
    /// brackets must be strictly ascending with only the last one open.
    /// Zero working-time references are accepted; the engine treats the
    /// prorations they feed as zero.
    ///
    /// Values are also bounded above: rates and factors by 1, overtime
    /// multipliers by [`MAX_MULTIPLIER`], amounts by [`MAX_INPUT_VALUE`],
    /// and a non-zero working-time reference must lie between 1 and a
    /// calendar maximum. Together with [`PayrollInput::validate`] this keeps
    /// every intermediate product inside `Decimal`'s range.
    ///
    /// [`PayrollInput::validate`]: crate::models::PayrollInput::validate
    pub fn validate(&self) -> EngineResult<()> {
        let social = &self.social;
        let work_time = &self.work_time;
        let scalars = [
            ("social.cnss_rate", social.cnss_rate),
            ("social.cnss_ceiling_monthly", social.cnss_ceiling_monthly),
            ("social.maladie_maternite_rate", social.maladie_maternite_rate),
            (
                "social.assurance_complementaire_rate",
                social.assurance_complementaire_rate,
            ),
            ("social.deces_rate", social.deces_rate),
            (
                "social.incapacite_invalidite_rate",
                social.incapacite_invalidite_rate,
            ),
            ("social.deces_accidentel_rate", social.deces_accidentel_rate),
            ("social.cimr_rate", social.cimr_rate),
            (
                "work_time.standard_monthly_hours",
                work_time.standard_monthly_hours,
            ),
            (
                "work_time.standard_annual_work_days",
                work_time.standard_annual_work_days,
            ),
            (
                "work_time.exceptional_leave_factor",
                work_time.exceptional_leave_factor,
            ),
            ("work_time.night_premium_rate", work_time.night_premium_rate),
            (
                "work_time.overtime_125_multiplier",
                work_time.overtime_125_multiplier,
            ),
            (
                "work_time.overtime_150_multiplier",
                work_time.overtime_150_multiplier,
            ),
            (
                "work_time.overtime_200_multiplier",
                work_time.overtime_200_multiplier,
            ),
            ("professional_expenses.rate", self.professional_expenses.rate),
            (
                "professional_expenses.ceiling_monthly",
                self.professional_expenses.ceiling_monthly,
            ),
        ];

        if let Some((name, value)) = scalars.iter().find(|(_, value)| value.is_sign_negative())
        {
            return Err(EngineError::InvalidRateTable {
                message: format!("{} must not be negative (got {})", name, value),
            });
        }

        self.validate_upper_bounds()?;
        self.validate_brackets()
    }

    fn validate_upper_bounds(&self) -> EngineResult<()> {
        let social = &self.social;
        let work_time = &self.work_time;
        let professional = &self.professional_expenses;
        let bounded = [
            ("social.cnss_rate", social.cnss_rate, MAX_RATE),
            ("social.cnss_ceiling_monthly", social.cnss_ceiling_monthly, MAX_INPUT_VALUE),
            ("social.maladie_maternite_rate", social.maladie_maternite_rate, MAX_RATE),
            (
                "social.assurance_complementaire_rate",
                social.assurance_complementaire_rate,
                MAX_RATE,
            ),
            ("social.deces_rate", social.deces_rate, MAX_RATE),
            (
                "social.incapacite_invalidite_rate",
                social.incapacite_invalidite_rate,
                MAX_RATE,
            ),
            ("social.deces_accidentel_rate", social.deces_accidentel_rate, MAX_RATE),
            ("social.cimr_rate", social.cimr_rate, MAX_RATE),
            (
                "work_time.exceptional_leave_factor",
                work_time.exceptional_leave_factor,
                MAX_RATE,
            ),
            ("work_time.night_premium_rate", work_time.night_premium_rate, MAX_RATE),
            (
                "work_time.overtime_125_multiplier",
                work_time.overtime_125_multiplier,
                MAX_MULTIPLIER,
            ),
            (
                "work_time.overtime_150_multiplier",
                work_time.overtime_150_multiplier,
                MAX_MULTIPLIER,
            ),
            (
                "work_time.overtime_200_multiplier",
                work_time.overtime_200_multiplier,
                MAX_MULTIPLIER,
            ),
            ("professional_expenses.rate", professional.rate, MAX_RATE),
            (
                "professional_expenses.ceiling_monthly",
                professional.ceiling_monthly,
                MAX_INPUT_VALUE,
            ),
        ];

        if let Some((name, value, max)) = bounded.iter().find(|(_, value, max)| value > max) {
            return Err(EngineError::InvalidRateTable {
                message: format!("{} must not exceed {} (got {})", name, max, value),
            });
        }

        let references = [
            (
                "work_time.standard_monthly_hours",
                work_time.standard_monthly_hours,
                MAX_MONTHLY_HOURS,
            ),
            (
                "work_time.standard_annual_work_days",
                work_time.standard_annual_work_days,
                MAX_ANNUAL_WORK_DAYS,
            ),
        ];

        // Zero is the documented "undefined base"; anything else divides.
        for (name, value, max) in references {
            if !value.is_zero() && (value < Decimal::ONE || value > max) {
                return Err(EngineError::InvalidRateTable {
                    message: format!("{} must be 0 or between 1 and {} (got {})", name, max, value),
                });
            }
        }

        Ok(())
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let brackets = &self.income_tax_brackets;
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(EngineError::InvalidRateTable {
                message: "at least one income tax bracket is required".to_string(),
            });
        };

        if last.upper_limit.is_some() {
            return Err(EngineError::InvalidRateTable {
                message: "the last income tax bracket must have no upper limit".to_string(),
            });
        }

        let mut previous: Option<Decimal> = None;
        for (index, bracket) in bounded.iter().enumerate() {
            let Some(limit) = bracket.upper_limit else {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} has no upper limit but is not the last", index),
                });
            };
            if previous.is_some_and(|prev| limit <= prev) {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} upper limit {} is not ascending", index, limit),
                });
            }
            previous = Some(limit);
        }

        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.rate.is_sign_negative() || bracket.fixed_deduction.is_sign_negative() {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} has a negative rate or deduction", index),
                });
            }
            if bracket.rate > MAX_RATE || bracket.fixed_deduction > MAX_INPUT_VALUE {
                return Err(EngineError::InvalidRateTable {
                    message: format!("bracket {} rate or deduction is out of range", index),
                });
            }
        }

        Ok(())
    }
}

fn bracket(upper_limit: Option<Decimal>, rate: Decimal, fixed_deduction: Decimal) -> TaxBracket {
    TaxBracket {
        upper_limit,
        rate,
        fixed_deduction,
    }
}
