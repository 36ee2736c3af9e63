use anyhow::{Context, Result};
use regex::Regex;
use std::fs;

use crate::core::config::{CoverageConfig, normalize_path};

/// A trait that defines the behavior for importing a coverage manifest from
/// an external source.
///
/// This trait allows for different implementations of manifest importers
/// (e.g., from a `.solcover.js` file, from another tool's config) to be used
/// interchangeably.
pub trait ManifestImporter {
    /// Imports a manifest from a file and returns it as a `CoverageConfig`.
    ///
    /// # Arguments
    /// * `file_path`: The path to the file to be imported.
    ///
    /// # Returns
    /// A `Result<CoverageConfig>` ready to be written as the project manifest.
    fn import_from_file(&mut self, file_path: &str) -> Result<CoverageConfig>;
}

/// A concrete implementation of `ManifestImporter` for the JavaScript
/// `.solcover.js` form used by solidity-coverage:
///
/// ```js
/// module.exports = {
///   skipFiles: ["interfaces/IWETH.sol", ...],
///   measureStatementCoverage: true,
///   measureFunctionCoverage: true,
/// };
/// ```
///
/// The reader is deliberately tolerant: it extracts the `skipFiles` array and
/// the two metric flags with regexes rather than parsing JavaScript, so
/// comments, trailing commas, and surrounding code don't break the import.
/// A missing flag defaults to `true` and a missing array to an empty list,
/// matching the coverage tool's own defaults.
pub struct SolcoverJsImporter;

impl SolcoverJsImporter {
    pub fn new() -> Self {
        Self
    }

    /// Extracts the string literals inside the `skipFiles: [...]` array.
    ///
    /// Both single- and double-quoted literals are accepted. Entries are
    /// normalized on the way in so the resulting manifest compares cleanly.
    fn parse_skip_files(&self, content: &str) -> Result<Vec<String>> {
        // (?s) lets `.` cross newlines; the array is usually multi-line.
        let array_re = Regex::new(r"(?s)skipFiles\s*:\s*\[(.*?)\]")
            .context("Invalid skipFiles extraction pattern")?;

        let Some(captures) = array_re.captures(content) else {
            return Ok(Vec::new());
        };
        let body = captures.get(1).map_or("", |m| m.as_str());

        let literal_re =
            Regex::new(r#""([^"]*)"|'([^']*)'"#).context("Invalid string literal pattern")?;

        let mut entries = Vec::new();
        for caps in literal_re.captures_iter(body) {
            let raw = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            if !raw.is_empty() {
                entries.push(normalize_path(raw));
            }
        }

        Ok(entries)
    }

    /// Reads a boolean flag of the form `name: true` / `name: false`.
    /// Returns `None` when the flag is absent from the file.
    fn parse_flag(&self, content: &str, name: &str) -> Result<Option<bool>> {
        let flag_re = Regex::new(&format!(r"{}\s*:\s*(true|false)", regex::escape(name)))
            .context("Invalid flag extraction pattern")?;

        Ok(flag_re
            .captures(content)
            .map(|caps| caps.get(1).is_some_and(|m| m.as_str() == "true")))
    }
}

/// Implementation of the `ManifestImporter` trait for `SolcoverJsImporter`.
impl ManifestImporter for SolcoverJsImporter {
    /// The main public method for importing a `.solcover.js` manifest.
    ///
    /// # Arguments
    /// * `file_path`: The path to the `.solcover.js` file.
    ///
    /// # Returns
    /// A `Result<CoverageConfig>` with the parsed skip list and flags.
    fn import_from_file(&mut self, file_path: &str) -> Result<CoverageConfig> {
        let content = fs::read_to_string(file_path).context("Failed to read import file")?;

        let skip_files = self.parse_skip_files(&content)?;
        let measure_statement_coverage = self
            .parse_flag(&content, "measureStatementCoverage")?
            .unwrap_or(true);
        let measure_function_coverage = self
            .parse_flag(&content, "measureFunctionCoverage")?
            .unwrap_or(true);

        Ok(CoverageConfig {
            skip_files,
            measure_statement_coverage,
            measure_function_coverage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn import_str(content: &str) -> CoverageConfig {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        let mut importer = SolcoverJsImporter::new();
        importer
            .import_from_file(file.path().to_str().unwrap())
            .unwrap()
    }

    #[test]
    fn test_full_manifest() {
        let config = import_str(
            r#"module.exports = {
  skipFiles: [
    "interfaces/IWiggies.sol",
    "interfaces/IWETH.sol",
    "test/MockERC20.sol",
  ],
  measureStatementCoverage: true,
  measureFunctionCoverage: false,
};
"#,
        );
        assert_eq!(
            config.skip_files,
            vec![
                "interfaces/IWiggies.sol",
                "interfaces/IWETH.sol",
                "test/MockERC20.sol"
            ]
        );
        assert!(config.measure_statement_coverage);
        assert!(!config.measure_function_coverage);
    }

    #[test]
    fn test_single_quotes_and_trailing_comma() {
        let config = import_str("module.exports = { skipFiles: ['test/WFTM.sol',], };");
        assert_eq!(config.skip_files, vec!["test/WFTM.sol"]);
    }

    #[test]
    fn test_missing_fields_use_tool_defaults() {
        let config = import_str("module.exports = {};");
        assert!(config.skip_files.is_empty());
        assert!(config.measure_statement_coverage);
        assert!(config.measure_function_coverage);
    }

    #[test]
    fn test_entries_are_normalized() {
        let config = import_str(r#"module.exports = { skipFiles: ["./test/Wiggies.sol"] };"#);
        assert_eq!(config.skip_files, vec!["test/Wiggies.sol"]);
    }
}
