//! Rate table loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a
//! [`RateTable`] from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::RateTable;

/// Loads and holds a validated rate table.
///
/// # File Format
///
/// ```text
/// social:
///   cnss_rate: "0.0448"
///   cnss_ceiling_monthly: "6000.00"
///   ...
/// work_time:
///   standard_monthly_hours: "191.0"
///   ...
/// professional_expenses:
///   rate: "0.20"
///   ceiling_monthly: "2500.00"
/// income_tax_brackets:
///   - { upper_limit: "30000.00", rate: "0.00", fixed_deduction: "0.00" }
///   - { upper_limit: null, rate: "0.38", fixed_deduction: "24400.00" }
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates.yaml")?;
/// println!("CNSS ceiling: {}", loader.rate_table().social.cnss_ceiling_monthly);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    rates: RateTable,
}

impl ConfigLoader {
    /// Loads a rate table from the YAML file at `path`.
    ///
    /// Returns an error if:
    /// - the file does not exist or cannot be read (`ConfigNotFound`)
    /// - the file is not valid YAML or is missing a field (`ConfigParseError`)
    /// - the table fails [`RateTable::validate`] (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path_str.clone(),
                message,
            },
            other => other,
        })?;

        debug!(
            path = %path_str,
            brackets = loader.rates.income_tax_brackets.len(),
            "Loaded rate table"
        );
        Ok(loader)
    }

    /// Parses and validates a rate table from YAML text.
    pub fn parse(content: &str) -> EngineResult<Self> {
        let rates: RateTable =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;
        rates.validate()?;
        Ok(Self { rates })
    }

    /// Wraps the built-in Moroccan table.
    pub fn moroccan_default() -> Self {
        Self {
            rates: RateTable::moroccan_default(),
        }
    }

    /// Returns the loaded rate table.
    pub fn rate_table(&self) -> &RateTable {
        &self.rates
    }

    /// Consumes the loader, returning the rate table.
    pub fn into_rate_table(self) -> RateTable {
        self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn config_path() -> &'static str {
        "./config/rates.yaml"
    }

    #[test]
    fn test_load_shipped_rates_matches_default() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rate_table(), &RateTable::moroccan_default());
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/nonexistent/rates.yaml");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("nonexistent"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::parse("social: [unterminated");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_parse_missing_section_returns_parse_error() {
        let result = ConfigLoader::parse("social:\n  cnss_rate: \"0.0448\"\n");
        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("missing field"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_structurally_invalid_table() {
        let mut rates = RateTable::moroccan_default();
        rates.income_tax_brackets.pop();
        let yaml = serde_yaml::to_string(&rates).unwrap();

        let result = ConfigLoader::parse(&yaml);
        assert!(matches!(result, Err(EngineError::InvalidRateTable { .. })));
    }

    #[test]
    fn test_parse_accepts_revised_ceiling() {
        let mut rates = RateTable::moroccan_default();
        rates.social.cnss_ceiling_monthly = dec!(6500.00);
        let yaml = serde_yaml::to_string(&rates).unwrap();

        let loader = ConfigLoader::parse(&yaml).unwrap();
        assert_eq!(loader.rate_table().social.cnss_ceiling_monthly, dec!(6500.00));
    }

    #[test]
    fn test_into_rate_table_returns_owned_table() {
        let rates = ConfigLoader::moroccan_default().into_rate_table();
        assert_eq!(rates.professional_expenses.ceiling_monthly, dec!(2500));
    }
}
