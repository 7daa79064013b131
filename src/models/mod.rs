//! Core data models for the payroll engine.
//!
//! This module contains the payroll input record, the computed breakdown and
//! the snapshot shapes used to file a calculation.

mod calculation_record;
mod payroll_input;
mod payroll_result;

pub use calculation_record::{CalculationRecord, ENGINE_VERSION, StoredCalculation};
pub use payroll_input::{MAX_INPUT_VALUE, PayrollInput};
pub use payroll_result::{Earnings, PayrollResult, SocialContributions, TaxDetails};
