use miette::{IntoDiagnostic, Result};
use owo_colors::OwoColorize;
use primes_core::config::{self, PrimesConfig};
use std::path::PathBuf;

use crate::output::Output;

/// Show current configuration
pub fn show(config: &PrimesConfig, source: Option<&PathBuf>) -> Result<()> {
    let output = Output::new();

    output.section("Current Configuration");
    match source {
        Some(path) => output.kv("Loaded from", &path.display().to_string()),
        None => output.kv("Loaded from", "standard locations"),
    }
    println!();

    // Display the current config in TOML format
    let toml_str = toml::to_string_pretty(config).into_diagnostic()?;
    println!("{}", toml_str);

    Ok(())
}

/// Save current configuration to file
pub fn save(config: &PrimesConfig, path: &PathBuf) -> Result<()> {
    let output = Output::new();

    output.kv("Saving configuration to", &path.display().to_string());

    config::save_config(config, path)?;

    output.success("Configuration saved successfully!");
    println!();
    println!("To use this configuration, run:");
    println!("  {} --config {}", "primes".bright_green(), path.display());

    Ok(())
}
