//! Interactive prompts for values not supplied as flags.
//!
//! Invalid input never aborts the run: `dialoguer` validators and selection
//! lists re-prompt until an acceptable answer is given.  Only I/O failures
//! (closed stdin, broken terminal) surface as errors.

use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use progen_core::domain::{Layout, ModuleName, ProjectName, TargetOs};

use crate::error::{CliError, CliResult};

/// Ask for the project name, re-prompting until it is a valid path segment.
pub fn prompt_project_name() -> CliResult<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Project name")
        .validate_with(|input: &String| -> Result<(), String> {
            ProjectName::new(input.trim())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(prompt_failed)
}

/// Ask for the main module name (advanced layout only).
pub fn prompt_module_name() -> CliResult<String> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Name of your main module (e.g. core)")
        .validate_with(|input: &String| -> Result<(), String> {
            ModuleName::new(input.trim())
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()
        .map(|s| s.trim().to_string())
        .map_err(prompt_failed)
}

/// Ask which OS to generate for, defaulting to the host platform.
pub fn prompt_target_os(default: TargetOs) -> CliResult<TargetOs> {
    const CHOICES: [TargetOs; 2] = [TargetOs::Linux, TargetOs::Windows];

    let default_index = CHOICES.iter().position(|os| *os == default).unwrap_or(0);
    let labels: Vec<&str> = CHOICES.iter().map(|os| os.as_str()).collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Generate project structure for which OS?")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(prompt_failed)?;

    Ok(CHOICES[index])
}

/// Ask which layout to generate.
pub fn prompt_layout(default: Layout) -> CliResult<Layout> {
    const CHOICES: [Layout; 2] = [Layout::Advanced, Layout::Simple];

    let default_index = CHOICES
        .iter()
        .position(|layout| *layout == default)
        .unwrap_or(0);
    let labels: Vec<&str> = CHOICES.iter().map(|layout| layout.as_str()).collect();

    let index = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Which layout?")
        .items(&labels)
        .default(default_index)
        .interact()
        .map_err(prompt_failed)?;

    Ok(CHOICES[index])
}

/// Ask whether to include the tests folder.
pub fn prompt_include_tests(default: bool) -> CliResult<bool> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Include tests folder?")
        .default(default)
        .interact()
        .map_err(prompt_failed)
}

fn prompt_failed(e: dialoguer::Error) -> CliError {
    let message = format!("interactive prompt failed: {e}");
    CliError::InvalidInput {
        message,
        source: Some(Box::new(e)),
    }
}
