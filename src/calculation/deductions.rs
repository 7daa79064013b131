//! Social security and pension contributions.
//!
//! CNSS is the only contribution computed on a capped base; the others,
//! CIMR included, apply to the full gross salary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::SocialRates;
use crate::models::SocialContributions;

/// Calculates the employee-side contributions for a gross salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_social_contributions;
/// use payroll_engine::config::RateTable;
/// use rust_decimal_macros::dec;
///
/// let rates = RateTable::moroccan_default();
/// let contributions = calculate_social_contributions(dec!(9550), &rates.social);
///
/// // min(9550, 6000) * 4.48%
/// assert_eq!(contributions.cnss, dec!(268.80));
/// // 9550 * 4.5%, no ceiling
/// assert_eq!(contributions.cimr, dec!(429.75));
/// ```
pub fn calculate_social_contributions(
    gross_salary: Decimal,
    rates: &SocialRates,
) -> SocialContributions {
    let cnss_base = gross_salary.min(rates.cnss_ceiling_monthly);

    let contributions = SocialContributions {
        cnss: cnss_base * rates.cnss_rate,
        maladie_maternite: gross_salary * rates.maladie_maternite_rate,
        assurance_complementaire: gross_salary * rates.assurance_complementaire_rate,
        deces: gross_salary * rates.deces_rate,
        incapacite_invalidite: gross_salary * rates.incapacite_invalidite_rate,
        deces_accidentel: gross_salary * rates.deces_accidentel_rate,
        cimr: gross_salary * rates.cimr_rate,
    };

    debug!(
        cnss_base = %cnss_base,
        cnss = %contributions.cnss,
        total = %contributions.total(),
        "Social contributions"
    );

    contributions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTable;
    use rust_decimal_macros::dec;

    fn social() -> SocialRates {
        RateTable::moroccan_default().social
    }

    #[test]
    fn test_cnss_below_ceiling_uses_gross() {
        let contributions = calculate_social_contributions(dec!(5000), &social());
        assert_eq!(contributions.cnss, dec!(224));
    }

    #[test]
    fn test_cnss_is_capped_at_ceiling() {
        let at_ceiling = calculate_social_contributions(dec!(6000), &social());
        let far_above = calculate_social_contributions(dec!(60000), &social());

        assert_eq!(at_ceiling.cnss, dec!(268.80));
        assert_eq!(far_above.cnss, dec!(268.80));
    }

    #[test]
    fn test_other_contributions_are_uncapped() {
        let contributions = calculate_social_contributions(dec!(10000), &social());

        assert_eq!(contributions.maladie_maternite, dec!(270.25));
        assert_eq!(contributions.assurance_complementaire, dec!(22.80));
        assert_eq!(contributions.deces, dec!(27.50));
        assert_eq!(contributions.incapacite_invalidite, dec!(31.35));
        assert_eq!(contributions.deces_accidentel, dec!(5.70));
        assert_eq!(contributions.cimr, dec!(450));
    }

    #[test]
    fn test_total_sums_all_seven() {
        let contributions = calculate_social_contributions(dec!(10000), &social());

        // 268.80 + 270.25 + 22.80 + 27.50 + 31.35 + 5.70 + 450
        assert_eq!(contributions.total(), dec!(1076.40));
    }

    #[test]
    fn test_zero_gross_gives_zero_contributions() {
        let contributions = calculate_social_contributions(Decimal::ZERO, &social());
        assert_eq!(contributions.total(), Decimal::ZERO);
    }

    #[test]
    fn test_revised_ceiling_is_honoured() {
        let mut rates = social();
        rates.cnss_ceiling_monthly = dec!(7000);

        let contributions = calculate_social_contributions(dec!(8000), &rates);

        assert_eq!(contributions.cnss, dec!(313.60));
    }
}
