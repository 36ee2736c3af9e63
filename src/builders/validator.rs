use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::config;

/// The `ManifestValidator` trait defines the public interface for validating
/// the coverage manifest.
///
/// This trait allows for the implementation of different validation strategies,
/// such as a strict validator or a more permissive one, by adhering to a common
/// set of methods.
pub trait ManifestValidator {
    /// Performs a full validation of the `CoverageConfig` and returns
    /// a list of issues found.
    ///
    /// # Arguments
    /// * `config`: The `CoverageConfig` to be validated.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` containing a vector of strings, where each string
    /// describes a specific validation issue.
    fn validate_config(&self, config: &config::CoverageConfig) -> Result<Vec<String>>;

    /// Validates a single skip-list entry and returns a list of issues.
    ///
    /// # Arguments
    /// * `entry`: The raw skip-list entry string.
    ///
    /// # Returns
    /// A `Result<Vec<String>>` containing a vector of strings, each describing a
    /// validation issue for the given entry.
    fn validate_entry(&self, entry: &str) -> Result<Vec<String>>;
}

/// The `StandardValidator` is a concrete implementation of `ManifestValidator`.
///
/// It performs a series of standard checks to ensure the manifest is
/// well-formed and does not contain entries the coverage tool would silently
/// ignore or misinterpret.
pub struct StandardValidator {
    project_root: PathBuf,
}

impl StandardValidator {
    /// Creates a new `StandardValidator` rooted at the given project directory.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Checks if a skip-list entry resolves to an existing file under the
    /// project root.
    ///
    /// # Arguments
    /// * `entry`: The normalized skip-list entry.
    ///
    /// # Returns
    /// `true` if the file exists, `false` otherwise.
    fn check_file_exists(&self, entry: &str) -> bool {
        self.project_root.join(entry).exists()
    }

    /// Checks for entries that appear more than once after normalization.
    ///
    /// Duplicates are legal per the manifest's semantics (exclusion is a set
    /// test), but they usually mean a hand edit went wrong, so each one is
    /// reported as a warning.
    ///
    /// # Arguments
    /// * `entries`: The raw skip-list entries.
    ///
    /// # Returns
    /// A `Vec<String>` containing warnings for any duplicates found.
    fn check_duplicates(&self, entries: &[String]) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let normalized = config::normalize_path(entry);
            if seen.contains(&normalized) {
                warnings.push(format!("Duplicate skip entry: {normalized}"));
            }
            seen.insert(normalized);
        }
        warnings
    }
}

impl ManifestValidator for StandardValidator {
    /// The main public method for validating the entire manifest.
    ///
    /// It orchestrates multiple checks, including:
    /// - Whether each listed file exists (warning only; a missing file is the
    ///   coverage tool's error to raise, not ours).
    /// - Duplicate entries after normalization.
    /// - The validity of each individual entry's path shape.
    /// - Whether any coverage metric is enabled at all.
    fn validate_config(&self, config: &config::CoverageConfig) -> Result<Vec<String>> {
        let mut issues = Vec::new();

        if !config.measure_statement_coverage && !config.measure_function_coverage {
            issues.push(
                "No coverage metric is enabled; the coverage run will measure nothing".to_string(),
            );
        }

        issues.extend(self.check_duplicates(&config.skip_files));

        for entry in &config.skip_files {
            let entry_issues = self.validate_entry(entry)?;
            issues.extend(entry_issues);

            let normalized = config::normalize_path(entry);
            if !normalized.is_empty()
                && !Path::new(&normalized).is_absolute()
                && !self.check_file_exists(&normalized)
            {
                issues.push(format!("Skipped file not found: {normalized}"));
            }
        }

        Ok(issues)
    }

    /// Validates a single skip-list entry's path shape.
    ///
    /// This function checks for entries that, while representable, can never
    /// match a project source:
    /// 1. **Empty entries**, which match nothing.
    /// 2. **Absolute paths**, since the manifest is defined over
    ///    project-relative paths.
    /// 3. **Parent-directory escapes** (`..`), which point outside the root.
    /// 4. **Non-`.sol` suffixes**, which the coverage tool never instruments
    ///    in the first place (warning).
    fn validate_entry(&self, entry: &str) -> Result<Vec<String>> {
        let mut issues = Vec::new();
        let normalized = config::normalize_path(entry);

        if normalized.is_empty() {
            issues.push("Empty skip entry will match nothing".to_string());
            return Ok(issues);
        }

        if Path::new(&normalized).is_absolute() {
            issues.push(format!(
                "Absolute path in skip list (paths are project-relative): {normalized}"
            ));
        }

        if normalized.split('/').any(|segment| segment == "..") {
            issues.push(format!(
                "Skip entry escapes the project root: {normalized}"
            ));
        }

        if !normalized.ends_with(".sol") {
            issues.push(format!(
                "Skip entry is not a Solidity source: {normalized}"
            ));
        }

        Ok(issues)
    }
}
