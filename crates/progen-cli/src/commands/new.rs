//! Implementation of the `progen new` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldConfig`, call the
//! core scaffold service, and display results. No business logic lives here.
//!
//! # Value resolution
//!
//! Each setting resolves as: CLI flag > config-file default > built-in
//! default. When the project name is omitted entirely the command switches
//! to interactive mode and collects the missing answers with prompts
//! (TTY + `interactive` feature required); otherwise the target OS falls
//! back to host detection and everything else to the config defaults.

use std::io::IsTerminal;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use progen_adapters::LocalFilesystem;
use progen_core::{
    application::ScaffoldService,
    domain::{Layout, ScaffoldConfig, TargetOs, layouts},
    error::ProgenError,
};

use crate::{
    cli::{LayoutArg, NewArgs, OsArg, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `progen new` command.
///
/// Dispatch sequence:
/// 1. Resolve every setting (flags, config defaults, prompts)
/// 2. Build a validated core `ScaffoldConfig`
/// 3. Confirm with user unless `--yes` or `--quiet`
/// 4. Early-exit if `--dry-run`
/// 5. Execute scaffolding via `ScaffoldService`
/// 6. Print the confirmation and next-steps guidance
#[instrument(skip_all, fields(project = args.name.as_deref().unwrap_or("<interactive>")))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve settings
    let interactive = args.name.is_none();
    if interactive && !prompts_available(&global) {
        return Err(CliError::InvalidInput {
            message: "project name required (pass NAME, or run in a terminal for prompts)".into(),
            source: None,
        });
    }

    let name = match args.name.clone() {
        Some(n) => n,
        None => prompt_project_name()?,
    };

    let layout = match args.layout.map(convert_layout) {
        Some(layout) => layout,
        None if interactive => prompt_layout(config.defaults.layout.unwrap_or(Layout::Advanced))?,
        None => config.defaults.layout.unwrap_or(Layout::Advanced),
    };

    let module = match args.module.clone() {
        Some(m) => Some(m),
        None if interactive && layout.requires_module() => Some(prompt_module_name()?),
        None => None,
    };

    let target_os = match args.target_os.map(convert_os) {
        Some(os) => os,
        None => match config.defaults.os {
            Some(os) => os,
            // The flag-driven surface auto-detects; only a fully interactive
            // session asks.
            None if interactive => prompt_target_os(TargetOs::detect())?,
            None => TargetOs::detect(),
        },
    };

    let include_tests = match args.tests {
        Some(tests) => tests,
        None if interactive => prompt_include_tests(config.defaults.tests)?,
        None => config.defaults.tests,
    };

    let output_root = resolve_output_root(args.output.clone(), &config);

    // 2. Build the validated core config
    let scaffold = build_scaffold_config(
        &name,
        module.as_deref(),
        target_os,
        layout,
        include_tests,
        output_root,
    )?;

    debug!(
        layout = %scaffold.layout(),
        target_os = %scaffold.target_os(),
        module = scaffold.module_name().map(|m| m.to_string()).as_deref().unwrap_or("none"),
        "Configuration resolved"
    );

    // 3. Show configuration and confirm
    if !global.quiet && !args.yes && std::io::stdin().is_terminal() {
        show_configuration(&scaffold, &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 4. Dry run: describe but do not write.
    if args.dry_run {
        let structure = layouts::plan(&scaffold);
        output.info(&format!(
            "Dry run: would create '{}' at {}",
            name,
            structure.root().display(),
        ))?;
        for dir in structure.directories() {
            output.print(&format!("  dir   {}", dir.path.display()))?;
        }
        for file in structure.files() {
            output.print(&format!("  file  {}", file.path.display()))?;
        }
        return Ok(());
    }

    // 5. Create the adapter and scaffold
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    output.header(&format!("Creating '{name}'..."))?;
    info!(project = %name, "Scaffold started");

    let report = service.scaffold(&scaffold).map_err(CliError::Core)?;

    info!(project = %name, files = report.files_written, "Scaffold completed");

    // 6. Success + next steps
    let confirmation = match scaffold.module_name() {
        Some(module) => format!(
            "Project '{}' created with module '{}' for {}.",
            name,
            module,
            scaffold.target_os().title()
        ),
        None => format!(
            "Project '{}' created for {}.",
            name,
            scaffold.target_os().title()
        ),
    };
    output.success(&confirmation)?;

    if !global.quiet {
        output.print(&format!(
            "  {} files, {} folders under {}",
            report.files_written,
            report.directories_created,
            report.root.display()
        ))?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {name}"))?;
        output.print("  # Start building!")?;
    }

    Ok(())
}

// ── Value resolution ──────────────────────────────────────────────────────────

fn resolve_output_root(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.or_else(|| config.paths.output_root.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn build_scaffold_config(
    name: &str,
    module: Option<&str>,
    target_os: TargetOs,
    layout: Layout,
    include_tests: bool,
    output_root: PathBuf,
) -> CliResult<ScaffoldConfig> {
    let mut builder = ScaffoldConfig::builder()
        .project_name(name)
        .map_err(core_err)?
        .target_os(target_os)
        .layout(layout)
        .include_tests(include_tests)
        .output_root(output_root);

    if let Some(module) = module {
        builder = builder.module_name(module).map_err(core_err)?;
    }

    builder.build().map_err(core_err)
}

fn core_err(e: progen_core::domain::DomainError) -> CliError {
    CliError::Core(ProgenError::Domain(e))
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_os(os: OsArg) -> TargetOs {
    match os {
        OsArg::Linux => TargetOs::Linux,
        OsArg::Windows => TargetOs::Windows,
    }
}

fn convert_layout(layout: LayoutArg) -> Layout {
    match layout {
        LayoutArg::Simple => Layout::Simple,
        LayoutArg::Advanced => Layout::Advanced,
    }
}

// ── Interactive gating ────────────────────────────────────────────────────────

/// Whether interactive prompts can run at all in this invocation.
fn prompts_available(global: &GlobalArgs) -> bool {
    cfg!(feature = "interactive") && !global.quiet && std::io::stdin().is_terminal()
}

#[cfg(feature = "interactive")]
fn prompt_project_name() -> CliResult<String> {
    crate::interactive::prompt_project_name()
}

#[cfg(feature = "interactive")]
fn prompt_module_name() -> CliResult<String> {
    crate::interactive::prompt_module_name()
}

#[cfg(feature = "interactive")]
fn prompt_target_os(default: TargetOs) -> CliResult<TargetOs> {
    crate::interactive::prompt_target_os(default)
}

#[cfg(feature = "interactive")]
fn prompt_layout(default: Layout) -> CliResult<Layout> {
    crate::interactive::prompt_layout(default)
}

#[cfg(feature = "interactive")]
fn prompt_include_tests(default: bool) -> CliResult<bool> {
    crate::interactive::prompt_include_tests(default)
}

// Builds without the `interactive` feature never reach these: interactive
// mode is rejected up front by `prompts_available`.
#[cfg(not(feature = "interactive"))]
fn prompt_project_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_module_name() -> CliResult<String> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_target_os(_default: TargetOs) -> CliResult<TargetOs> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_layout(_default: Layout) -> CliResult<Layout> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

#[cfg(not(feature = "interactive"))]
fn prompt_include_tests(_default: bool) -> CliResult<bool> {
    Err(CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(scaffold: &ScaffoldConfig, out: &OutputManager) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:    {}", scaffold.project_name()))?;
    out.print(&format!("  Layout:     {}", scaffold.layout()))?;
    if let Some(module) = scaffold.module_name() {
        out.print(&format!("  Module:     {module}"))?;
    }
    out.print(&format!("  Target OS:  {}", scaffold.target_os()))?;
    out.print(&format!(
        "  Tests:      {}",
        if scaffold.include_tests() { "yes" } else { "no" }
    ))?;
    out.print(&format!(
        "  Location:   {}",
        scaffold.project_root().display()
    ))?;
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
