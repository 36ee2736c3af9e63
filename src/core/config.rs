use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::builders::validator::{ManifestValidator, StandardValidator};

/// The name of the manifest file at the project root.
pub const MANIFEST_FILE: &str = ".solcover.toml";

fn default_true() -> bool {
    true
}

/// The coverage configuration manifest.
///
/// Field names serialize in camelCase (`skipFiles`, `measureStatementCoverage`,
/// `measureFunctionCoverage`) so the on-disk manifest keeps the field names the
/// coverage tool documents. Exclusion is a set test: the order of `skip_files`
/// carries no meaning and duplicates are legal, if pointless.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoverageConfig {
    /// Project-relative paths excluded from coverage instrumentation.
    #[serde(default)]
    pub skip_files: Vec<String>,
    /// Enables per-statement coverage accounting in the coverage tool.
    #[serde(default = "default_true")]
    pub measure_statement_coverage: bool,
    /// Enables per-function coverage accounting in the coverage tool.
    #[serde(default = "default_true")]
    pub measure_function_coverage: bool,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            skip_files: Vec::new(),
            measure_statement_coverage: true,
            measure_function_coverage: true,
        }
    }
}

impl CoverageConfig {
    /// Returns true if `path` is excluded from instrumentation.
    ///
    /// Paths are compared after normalization, so `./test/WFTM.sol` and
    /// `test\WFTM.sol` both hit an entry stored as `test/WFTM.sol`.
    pub fn is_skipped(&self, path: &str) -> bool {
        let wanted = normalize_path(path);
        self.skip_files.iter().any(|e| normalize_path(e) == wanted)
    }

    /// The exclusion set after normalization, deduplicated and sorted.
    pub fn normalized_skip_set(&self) -> Vec<String> {
        let mut set: Vec<String> = self.skip_files.iter().map(|e| normalize_path(e)).collect();
        set.sort();
        set.dedup();
        set
    }
}

/// Normalizes a manifest path entry for comparison: backslashes become
/// forward slashes and leading `./` segments are stripped.
pub fn normalize_path(path: &str) -> String {
    let mut p = path.trim().replace('\\', "/");
    while let Some(rest) = p.strip_prefix("./") {
        p = rest.to_string();
    }
    p
}

pub struct ConfigManager {
    config_path: PathBuf,
    project_root: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        let project_root = find_project_root()?;
        Ok(Self::new_at(project_root))
    }

    /// Creates a manager rooted at an explicit directory. Used by tests and
    /// by callers that already know the project root.
    pub fn new_at(project_root: PathBuf) -> Self {
        let config_path = project_root.join(MANIFEST_FILE);
        Self {
            config_path,
            project_root,
        }
    }

    pub fn initialize(&self) -> Result<()> {
        if self.config_path.exists() {
            return Ok(());
        }

        let default_config = CoverageConfig::default();
        self.save_config(&default_config)?;
        Ok(())
    }

    pub fn validate_config(&self) -> Result<()> {
        let config = self.load_config()?;
        let validator = StandardValidator::new(self.project_root.clone());
        let issues = validator.validate_config(&config)?;

        if issues.is_empty() {
            println!("✓ Manifest is valid.");
            Ok(())
        } else {
            println!("⚠️  Found issues in manifest:");
            for issue in issues {
                println!("  - {issue}");
            }
            anyhow::bail!("Manifest validation failed.");
        }
    }

    /// Adds a path to the skip list. Idempotent: a path already present
    /// (after normalization) is not added twice.
    pub fn add_skip(&mut self, path: String) -> Result<()> {
        let mut config = self.load_config()?;

        if config.is_skipped(&path) {
            println!("Already skipped: {path}");
            return Ok(());
        }
        config.skip_files.push(normalize_path(&path));

        self.save_config(&config)?;
        Ok(())
    }

    /// Removes every entry matching `path` after normalization.
    pub fn remove_skip(&mut self, path: String) -> Result<()> {
        let mut config = self.load_config()?;
        let wanted = normalize_path(&path);

        let before = config.skip_files.len();
        config.skip_files.retain(|e| normalize_path(e) != wanted);
        if config.skip_files.len() == before {
            anyhow::bail!("Not in the skip list: {path}");
        }

        self.save_config(&config)?;
        Ok(())
    }

    /// Updates the metric flags. A `None` leaves the current value untouched.
    pub fn set_flags(&mut self, statements: Option<bool>, functions: Option<bool>) -> Result<()> {
        let mut config = self.load_config()?;

        if let Some(s) = statements {
            config.measure_statement_coverage = s;
        }
        if let Some(f) = functions {
            config.measure_function_coverage = f;
        }

        self.save_config(&config)?;
        Ok(())
    }

    pub fn list_skips(&self) -> Result<()> {
        let config = self.load_config()?;

        if config.skip_files.is_empty() {
            println!("No files are excluded from instrumentation.");
        } else {
            println!("Excluded from instrumentation:");
            for entry in &config.skip_files {
                println!("  🚫 {entry}");
            }
        }
        println!(
            "\nMetrics: statements={}, functions={}",
            config.measure_statement_coverage, config.measure_function_coverage
        );
        Ok(())
    }

    /// Replaces the manifest wholesale, e.g. after an import.
    pub fn replace_config(&mut self, config: &CoverageConfig) -> Result<()> {
        self.save_config(config)
    }

    pub fn export_manifest(&self, file_path: &str, format: String) -> Result<()> {
        let config = self.load_config()?;

        let content = match format.as_str() {
            "json" => {
                serde_json::to_string_pretty(&config).context("Failed to serialize to JSON")?
            }
            "yaml" => serde_yaml::to_string(&config).context("Failed to serialize to YAML")?,
            "toml" | _ => toml::to_string_pretty(&config).context("Failed to serialize to TOML")?,
        };

        std::fs::write(file_path, content).context("Failed to write export file")?;

        Ok(())
    }

    pub fn get_project_root(&self) -> &Path {
        &self.project_root
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> Result<CoverageConfig>;
    fn save_config(&self, config: &CoverageConfig) -> Result<()>;
    fn get_config_path(&self) -> Result<PathBuf>;
}

impl ConfigProvider for ConfigManager {
    fn load_config(&self) -> Result<CoverageConfig> {
        if !self.config_path.exists() {
            return Ok(CoverageConfig::default());
        }

        let content =
            fs::read_to_string(&self.config_path).context("Failed to read manifest file")?;

        toml::from_str(&content).context("Failed to parse manifest file")
    }

    fn save_config(&self, config: &CoverageConfig) -> Result<()> {
        let content = toml::to_string_pretty(config).context("Failed to serialize manifest")?;

        fs::write(&self.config_path, content).context("Failed to write manifest file")?;

        Ok(())
    }

    fn get_config_path(&self) -> Result<PathBuf> {
        Ok(self.config_path.clone())
    }
}

/// Markers that identify a Solidity project root when no manifest exists yet.
const ROOT_MARKERS: &[&str] = &[
    "hardhat.config.js",
    "hardhat.config.ts",
    "truffle-config.js",
    "foundry.toml",
    "package.json",
    "contracts",
];

fn find_project_root() -> Result<PathBuf> {
    let current_dir = std::env::current_dir()?;
    let mut dir = current_dir.as_path();

    loop {
        if dir.join(MANIFEST_FILE).exists() || ROOT_MARKERS.iter().any(|m| dir.join(m).exists()) {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => anyhow::bail!("Not inside a Solidity project"),
        }
    }
}
