use anyhow::Result;
use std::collections::HashMap;

use crate::core::config::CoverageConfig;

/// A struct that holds the instrumentation status for a single file.
///
/// This provides a clean way to pass file-specific data from the
/// `CoverageEngine` to the `StatusReporter`.
#[derive(Debug)]
pub struct FileStatus {
    /// Indicates whether the file exists in the filesystem.
    pub exists: bool,
    /// A flag indicating if the file is excluded from instrumentation.
    pub skipped: bool,
}

pub trait StatusReporter {
    fn generate_status_report(
        &self,
        config: &CoverageConfig,
        file_statuses: HashMap<String, FileStatus>,
    ) -> Result<()>;
}

/// A concrete implementation of `StatusReporter` that prints the report to the console.
///
/// This is the primary reporter used by the `status` command.
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Constructs a new `ConsoleReporter` instance.
    pub fn new() -> Self {
        Self
    }

    /// A private helper function to format the status line for a single file.
    ///
    /// # Arguments
    /// * `file_path`: The project-relative path of the file.
    /// * `status`: A reference to the `FileStatus` struct for this file.
    ///
    /// # Returns
    /// A `String` containing the formatted status line.
    fn format_file_status(&self, file_path: &str, status: &FileStatus) -> String {
        // Determine the appropriate emoji icon based on the file's status.
        // 🔴: Listed in the skip list but missing from the filesystem.
        // 🟡: Exists and is excluded from instrumentation.
        // 🟢: Exists and will be instrumented.
        let status_icon = if !status.exists {
            "🔴"
        } else if status.skipped {
            "🟡"
        } else {
            "🟢"
        };

        let label = if !status.exists {
            "missing"
        } else if status.skipped {
            "skipped"
        } else {
            "instrumented"
        };

        format!("{status_icon} {file_path} ({label})")
    }
}

impl StatusReporter for ConsoleReporter {
    /// Prints the per-file instrumentation report and a summary.
    ///
    /// Files are printed in path order. The summary includes the skipped
    /// percentage (guarded against an empty project) and which coverage
    /// metrics the manifest enables.
    fn generate_status_report(
        &self,
        config: &CoverageConfig,
        file_statuses: HashMap<String, FileStatus>,
    ) -> Result<()> {
        let mut paths: Vec<&String> = file_statuses.keys().collect();
        paths.sort();

        println!("Coverage instrumentation status:\n");
        for path in &paths {
            let status = &file_statuses[*path];
            println!("  {}", self.format_file_status(path, status));
        }

        let total = file_statuses.len();
        let skipped = file_statuses.values().filter(|s| s.skipped).count();
        let missing = file_statuses.values().filter(|s| !s.exists).count();

        let percentage = if total > 0 {
            (skipped as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        println!(
            "\nSummary: {} file(s), {} skipped ({:.1}%), {} missing",
            total, skipped, percentage, missing
        );

        if !config.measure_statement_coverage && !config.measure_function_coverage {
            println!("⚠️  No coverage metrics are enabled.");
        } else {
            println!(
                "Metrics: statements {}, functions {}",
                if config.measure_statement_coverage {
                    "✓"
                } else {
                    "✗"
                },
                if config.measure_function_coverage {
                    "✓"
                } else {
                    "✗"
                }
            );
        }

        Ok(())
    }
}
