//! Division by a configured working-time reference.

use rust_decimal::Decimal;
use tracing::warn;

use crate::error::{EngineError, EngineResult};

/// Divides `numerator` by the reference `divisor`.
///
/// Returns [`EngineError::UndefinedBase`] naming `constant` when the
/// divisor is zero.
pub fn divide_by_reference(
    numerator: Decimal,
    divisor: Decimal,
    constant: &str,
) -> EngineResult<Decimal> {
    if divisor.is_zero() {
        return Err(EngineError::UndefinedBase {
            constant: constant.to_string(),
        });
    }
    Ok(numerator / divisor)
}

/// Like [`divide_by_reference`], but recovers an undefined base as zero.
pub(crate) fn prorate_or_zero(numerator: Decimal, divisor: Decimal, constant: &str) -> Decimal {
    divide_by_reference(numerator, divisor, constant).unwrap_or_else(|err| {
        warn!(error = %err, "Proration undefined, using zero");
        Decimal::ZERO
    })
}
