//! `progen config` — read and write configuration values.

use std::str::FromStr;

use progen_core::domain::{Layout, TargetOs};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            // Re-read from disk rather than mutating the merged in-memory
            // config, so unrelated keys keep their file values.
            let mut on_disk = AppConfig::load(None).map_err(|e| CliError::ConfigError {
                message: format!("Failed to load configuration: {e}"),
                source: None,
            })?;
            set_config_value(&mut on_disk, &key, &value)?;
            write_config(&on_disk)?;
            output.success(&format!("Set {key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.os" => Ok(config
            .defaults
            .os
            .map(|os| os.to_string())
            .unwrap_or_else(|| "auto".into())),
        "defaults.layout" => Ok(config
            .defaults
            .layout
            .map(|l| l.to_string())
            .unwrap_or_else(|| "advanced".into())),
        "defaults.tests" => Ok(config.defaults.tests.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "paths.output_root" => Ok(config
            .paths
            .output_root
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| ".".into())),
        _ => Err(unknown_key(key)),
    }
}

fn set_config_value(config: &mut AppConfig, key: &str, value: &str) -> CliResult<()> {
    match key {
        "defaults.os" => {
            config.defaults.os = Some(TargetOs::from_str(value).map_err(|e| {
                CliError::ConfigError {
                    message: e.to_string(),
                    source: None,
                }
            })?);
        }
        "defaults.layout" => {
            config.defaults.layout = Some(Layout::from_str(value).map_err(|e| {
                CliError::ConfigError {
                    message: e.to_string(),
                    source: None,
                }
            })?);
        }
        "defaults.tests" => {
            config.defaults.tests = parse_bool(key, value)?;
        }
        "output.no_color" => {
            config.output.no_color = parse_bool(key, value)?;
        }
        "output.format" => {
            config.output.format = value.to_string();
        }
        "paths.output_root" => {
            config.paths.output_root = Some(value.into());
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> CliResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Ok(true),
        "false" | "no" | "n" | "0" => Ok(false),
        _ => Err(CliError::ConfigError {
            message: format!("'{value}' is not a boolean (key '{key}')"),
            source: None,
        }),
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}'"),
        source: None,
    }
}

fn write_config(config: &AppConfig) -> CliResult<()> {
    let path = AppConfig::config_path();
    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
            message: format!("Failed to create config directory '{}'", parent.display()),
            source: e,
        })?;
    }

    std::fs::write(&path, &toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;

    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
