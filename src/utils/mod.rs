use crate::builders::importer::{ManifestImporter, SolcoverJsImporter};
use crate::core::config::{ConfigManager, ConfigProvider};
use crate::core::engine::CoverageEngine;
use anyhow::Result;

pub fn initialize_project() -> Result<()> {
    let config_manager = ConfigManager::new()?;
    config_manager.initialize()?;
    println!("✓ Initialized coverage manifest for this project");
    println!("Run 'solcover-manifest add <path>' to exclude files from instrumentation");
    Ok(())
}

pub fn validate_manifest() -> Result<()> {
    let config_manager = get_config_manager()?;
    config_manager.validate_config()
}

pub fn list_skips() -> Result<()> {
    let config_manager = get_config_manager()?;
    config_manager.list_skips()
}

pub fn add_skip(path: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.add_skip(path.clone())?;
    println!("✓ Excluded from instrumentation: {path}");
    Ok(())
}

pub fn remove_skip(path: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.remove_skip(path.clone())?;
    println!("✓ Back under instrumentation: {path}");
    Ok(())
}

pub fn check_file(path: String) -> Result<()> {
    let config_manager = get_config_manager()?;
    let engine = CoverageEngine::new(config_manager)?;

    if engine.check(&path) {
        println!("🚫 {path} is excluded from instrumentation");
    } else {
        println!("✓ {path} will be instrumented");
    }
    Ok(())
}

pub fn set_flags(statements: Option<bool>, functions: Option<bool>) -> Result<()> {
    let mut config_manager = get_config_manager()?;
    config_manager.set_flags(statements, functions)?;

    let config = config_manager.load_config()?;
    println!(
        "✓ Metrics: statements={}, functions={}",
        config.measure_statement_coverage, config.measure_function_coverage
    );
    Ok(())
}

pub fn show_status() -> Result<()> {
    let config_manager = get_config_manager()?;
    let engine = CoverageEngine::new(config_manager)?;
    engine.show_status()
}

pub fn import_manifest(file: String) -> Result<()> {
    let mut config_manager = get_config_manager()?;

    let mut importer = SolcoverJsImporter::new();
    let config = importer.import_from_file(&file)?;
    let count = config.skip_files.len();

    config_manager.replace_config(&config)?;
    println!("✓ Imported {count} skip entrie(s) from {file}");
    Ok(())
}

pub fn export_manifest(file: String, format: String) -> Result<()> {
    let config_manager = get_config_manager()?;
    config_manager.export_manifest(&file, format)?;
    println!("✓ Exported manifest to {file}");
    Ok(())
}

// Helper function to create ConfigManager instance
fn get_config_manager() -> Result<ConfigManager> {
    ConfigManager::new()
}
