use crate::builders::reporter::{ConsoleReporter, FileStatus, StatusReporter};
use crate::core::config::{ConfigManager, ConfigProvider, CoverageConfig, normalize_path};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Directories never scanned for Solidity sources.
const SKIP_DIRS: &[&str] = &["node_modules", "artifacts", "cache", "out", "coverage"];

pub struct CoverageEngine {
    config_manager: ConfigManager,
    config: CoverageConfig,
}

impl CoverageEngine {
    pub fn new(config_manager: ConfigManager) -> Result<Self> {
        let config = config_manager.load_config()?;

        Ok(Self {
            config_manager,
            config,
        })
    }

    /// All `.sol` sources under the project root, as normalized relative paths.
    pub fn collect_sources(&self) -> Result<Vec<String>> {
        let root = self.config_manager.get_project_root().to_path_buf();
        let mut sources = Vec::new();
        collect_sol_files(&root, &root, &mut sources)?;
        sources.sort();
        Ok(sources)
    }

    /// Splits the project's sources into (instrumented, skipped) per the manifest.
    pub fn partition(&self) -> Result<(Vec<String>, Vec<String>)> {
        let mut instrumented = Vec::new();
        let mut skipped = Vec::new();

        for source in self.collect_sources()? {
            if self.config.is_skipped(&source) {
                skipped.push(source);
            } else {
                instrumented.push(source);
            }
        }

        Ok((instrumented, skipped))
    }

    /// Whether a single file would be excluded from instrumentation.
    pub fn check(&self, path: &str) -> bool {
        self.config.is_skipped(path)
    }

    /// Prints the per-file instrumentation status for the whole project,
    /// including manifest entries that point at files which no longer exist.
    pub fn show_status(&self) -> Result<()> {
        let root = self.config_manager.get_project_root();
        let mut statuses: HashMap<String, FileStatus> = HashMap::new();

        for source in self.collect_sources()? {
            let skipped = self.config.is_skipped(&source);
            statuses.insert(
                source,
                FileStatus {
                    exists: true,
                    skipped,
                },
            );
        }

        for entry in self.config.normalized_skip_set() {
            statuses.entry(entry.clone()).or_insert(FileStatus {
                exists: root.join(&entry).exists(),
                skipped: true,
            });
        }

        let reporter = ConsoleReporter::new();
        reporter.generate_status_report(&self.config, statuses)
    }
}

fn collect_sol_files(dir: &Path, root: &Path, out: &mut Vec<String>) -> Result<()> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().to_string();

        if path.is_dir() {
            if name.starts_with('.') || SKIP_DIRS.contains(&name.as_str()) {
                continue;
            }
            collect_sol_files(&path, root, out)?;
        } else if name.ends_with(".sol") {
            let relative = path
                .strip_prefix(root)
                .context("Source path escaped the project root")?;
            out.push(normalize_path(&relative.to_string_lossy()));
        }
    }

    Ok(())
}
