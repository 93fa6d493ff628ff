//! Configuration loading functionality.
//!
//! This module reads the payroll policy from a YAML file and validates it
//! before handing it to the engine.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollPolicy;

/// Loads the payroll policy from the specified YAML file.
///
/// # Arguments
///
/// * `path` - Path to the policy file (e.g., "./config/payroll/policy.yaml")
///
/// # Returns
///
/// Returns the validated [`PayrollPolicy`] on success, or an error if:
/// - The file is missing
/// - The file contains invalid YAML
/// - The policy values fail validation
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_policy;
///
/// let policy = load_policy("./config/payroll/policy.yaml")?;
/// println!("Overtime multiplier: {}", policy.overtime.overtime_multiplier);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_policy<P: AsRef<Path>>(path: P) -> EngineResult<PayrollPolicy> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path)
        .map_err(|_| EngineError::not_found("policy file", &path_str))?;

    let policy = parse_policy(&content)
        .map_err(|e| EngineError::validation(format!("policy file {}: {}", path_str, e)))?;

    policy.validate()?;
    Ok(policy)
}

/// Parses a policy document from a YAML string.
fn parse_policy(content: &str) -> Result<PayrollPolicy, serde_yaml::Error> {
    serde_yaml::from_str(content)
}
