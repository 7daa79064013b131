//! Calculation snapshot models.
//!
//! A [`CalculationRecord`] pairs one payroll input with its computed result
//! and the metadata a caller needs to file it. [`StoredCalculation`] is the
//! flat row shape a persistence layer keeps: two JSON text blobs plus the
//! gross and net scalars for querying.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{PayrollInput, PayrollResult};

/// The version string stamped on every record.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A completed calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::PayrollEngine;
/// use payroll_engine::models::{CalculationRecord, PayrollInput};
/// use rust_decimal_macros::dec;
///
/// let input = PayrollInput {
///     hourly_rate: dec!(50),
///     worked_hours: dec!(191),
///     ..PayrollInput::default()
/// };
/// let result = PayrollEngine::moroccan().compute_salary(&input)?;
/// let record = CalculationRecord::new(input, result, 42);
///
/// assert_eq!(record.gross_salary, dec!(9550));
/// assert!(record.result_json()?.contains("\"Base Salary\""));
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The input the calculation ran on.
    pub input: PayrollInput,
    /// The computed breakdown.
    pub result: PayrollResult,
    /// Copy of `result.gross_salary`.
    pub gross_salary: Decimal,
    /// Copy of `result.net_salary`.
    pub net_salary: Decimal,
    /// Time spent computing, in microseconds.
    pub duration_us: u64,
}

impl CalculationRecord {
    /// Wraps a fresh calculation with a new id and the current time.
    pub fn new(input: PayrollInput, result: PayrollResult, duration_us: u64) -> Self {
        Self {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: ENGINE_VERSION.to_string(),
            gross_salary: result.gross_salary,
            net_salary: result.net_salary,
            input,
            result,
            duration_us,
        }
    }

    /// Serializes the input to its JSON text blob.
    pub fn input_json(&self) -> EngineResult<String> {
        to_blob("input_data", &self.input)
    }

    /// Serializes the result to its JSON text blob.
    pub fn result_json(&self) -> EngineResult<String> {
        to_blob("result_data", &self.result)
    }

    /// Flattens the record into its stored row.
    pub fn to_stored(&self) -> EngineResult<StoredCalculation> {
        Ok(StoredCalculation {
            calculation_id: self.calculation_id,
            timestamp: self.timestamp,
            engine_version: self.engine_version.clone(),
            input_data: self.input_json()?,
            result_data: self.result_json()?,
            gross_salary: self.gross_salary,
            net_salary: self.net_salary,
            duration_us: self.duration_us,
        })
    }

    /// Rehydrates a record from a stored row.
    ///
    /// The gross and net scalars are taken from the result blob. A row whose
    /// scalar columns disagree with its blob is still accepted, with a
    /// warning.
    pub fn from_stored(row: &StoredCalculation) -> EngineResult<Self> {
        let input: PayrollInput = from_blob("input_data", &row.input_data)?;
        let result: PayrollResult = from_blob("result_data", &row.result_data)?;

        if row.gross_salary != result.gross_salary || row.net_salary != result.net_salary {
            warn!(
                calculation_id = %row.calculation_id,
                stored_gross = %row.gross_salary,
                stored_net = %row.net_salary,
                blob_gross = %result.gross_salary,
                blob_net = %result.net_salary,
                "Stored scalars disagree with result blob, using blob"
            );
        }

        Ok(Self {
            calculation_id: row.calculation_id,
            timestamp: row.timestamp,
            engine_version: row.engine_version.clone(),
            gross_salary: result.gross_salary,
            net_salary: result.net_salary,
            input,
            result,
            duration_us: row.duration_us,
        })
    }
}

/// The persisted shape of a [`CalculationRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCalculation {
    /// Unique identifier for the calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Engine version that produced the row.
    pub engine_version: String,
    /// JSON text of the [`PayrollInput`].
    pub input_data: String,
    /// JSON text of the [`PayrollResult`].
    pub result_data: String,
    /// Gross salary, for querying.
    pub gross_salary: Decimal,
    /// Net salary, for querying.
    pub net_salary: Decimal,
    /// Time spent computing, in microseconds.
    pub duration_us: u64,
}

fn to_blob<T: Serialize>(what: &str, value: &T) -> EngineResult<String> {
    serde_json::to_string(value).map_err(|e| EngineError::SerializationError {
        what: what.to_string(),
        message: e.to_string(),
    })
}

fn from_blob<T: for<'de> Deserialize<'de>>(what: &str, text: &str) -> EngineResult<T> {
    serde_json::from_str(text).map_err(|e| EngineError::SerializationError {
        what: what.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::PayrollEngine;
    use rust_decimal_macros::dec;

    fn create_sample_record() -> CalculationRecord {
        let input = PayrollInput {
            hourly_rate: dec!(42.75),
            worked_hours: dec!(180),
            night_hours_worked: dec!(6),
            extra_hours_200: dec!(2),
            function_bonus_base_amount: dec!(800),
            seniority_rate_percent: dec!(5),
            paid_leave_days: dec!(1.5),
            ..PayrollInput::default()
        };
        let result = PayrollEngine::moroccan().compute_salary(&input).unwrap();
        CalculationRecord::new(input, result, 17)
    }

    #[test]
    fn test_new_copies_scalars_from_result() {
        let record = create_sample_record();

        assert_eq!(record.gross_salary, record.result.gross_salary);
        assert_eq!(record.net_salary, record.result.net_salary);
        assert_eq!(record.engine_version, ENGINE_VERSION);
        assert_eq!(record.duration_us, 17);
    }

    #[test]
    fn test_each_record_gets_its_own_id() {
        let first = create_sample_record();
        let second = create_sample_record();
        assert_ne!(first.calculation_id, second.calculation_id);
    }

    #[test]
    fn test_input_blob_uses_field_names() {
        let record = create_sample_record();
        let json = record.input_json().unwrap();

        assert!(json.contains("\"hourly_rate\":\"42.75\""));
        assert!(json.contains("\"exceptional_leave_days\""));
    }

    #[test]
    fn test_stored_row_rehydrates_to_same_record() {
        let record = create_sample_record();
        let row = record.to_stored().unwrap();

        let restored = CalculationRecord::from_stored(&row).unwrap();

        assert_eq!(restored, record);
    }

    #[test]
    fn test_scalars_are_rederived_from_blob() {
        let record = create_sample_record();
        let mut row = record.to_stored().unwrap();
        row.gross_salary = dec!(1);
        row.net_salary = dec!(1);

        let restored = CalculationRecord::from_stored(&row).unwrap();

        assert_eq!(restored.gross_salary, record.result.gross_salary);
        assert_eq!(restored.net_salary, record.result.net_salary);
    }

    #[test]
    fn test_corrupt_blob_is_serialization_error() {
        let mut row = create_sample_record().to_stored().unwrap();
        row.result_data = "{\"earnings\":".to_string();

        match CalculationRecord::from_stored(&row) {
            Err(EngineError::SerializationError { what, .. }) => assert_eq!(what, "result_data"),
            other => panic!("Expected SerializationError, got {:?}", other),
        }
    }
}
