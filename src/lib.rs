//! Monthly payroll engine for Moroccan salaried employees.
//!
//! This crate computes a monthly payslip from worked time, bonuses and leave:
//! itemized earnings, gross salary, CNSS and pension contributions, the
//! professional-expense deduction, progressive income tax (IGR) and net
//! salary. Rates and tax brackets come from a [`config::RateTable`], and the
//! engine is exposed over HTTP by the [`api`] module.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
