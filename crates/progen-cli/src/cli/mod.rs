//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "progen",
    bin_name = "progen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Project environment scaffolding",
    long_about = "Progen generates a ready-to-work project environment: \
                  folders, OS-specific config, and source stubs.",
    after_help = "EXAMPLES:\n\
        \x20 progen new demo --module core --os linux --tests y\n\
        \x20 progen new demo --layout simple\n\
        \x20 progen new                     # interactive prompts\n\
        \x20 progen completions bash > /usr/share/bash-completion/completions/progen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a new project environment.
    #[command(
        visible_alias = "n",
        about = "Generate a new project environment",
        after_help = "EXAMPLES:\n\
            \x20 progen new demo --module core --os windows\n\
            \x20 progen new demo --layout simple --tests n\n\
            \x20 progen new demo --output /srv/projects --yes"
    )]
    New(NewArgs),

    /// Initialise a Progen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 progen init           # default location\n\
            \x20 progen init --force   # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 progen completions bash > ~/.local/share/bash-completion/completions/progen\n\
            \x20 progen completions zsh  > ~/.zfunc/_progen\n\
            \x20 progen completions fish > ~/.config/fish/completions/progen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Progen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 progen config get defaults.os\n\
            \x20 progen config set defaults.layout simple\n\
            \x20 progen config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `progen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name.  Prompted for interactively when omitted.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: Option<String>,

    /// Main module name (required for the advanced layout).
    #[arg(
        short = 'm',
        long = "module",
        value_name = "MODULE",
        help = "Main module name (e.g. core)"
    )]
    pub module: Option<String>,

    /// Target operating system.
    #[arg(
        long = "os",
        value_name = "OS",
        value_enum,
        help = "Target OS (default: auto-detect)"
    )]
    pub target_os: Option<OsArg>,

    /// Include a tests folder.  Accepts y/n (also yes/no, true/false).
    #[arg(
        short = 't',
        long = "tests",
        value_name = "Y|N",
        value_parser = clap::builder::BoolishValueParser::new(),
        help = "Include tests folder? (y/n)"
    )]
    pub tests: Option<bool>,

    /// Layout to generate.
    #[arg(
        short = 'L',
        long = "layout",
        value_name = "LAYOUT",
        value_enum,
        help = "Layout to generate"
    )]
    pub layout: Option<LayoutArg>,

    /// Override the output directory.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `progen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `progen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `progen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.os`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported target operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OsArg {
    Linux,
    /// Also accepted as `win`.
    #[value(alias = "win")]
    Windows,
}

impl std::fmt::Display for OsArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linux => write!(f, "linux"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

/// Supported layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LayoutArg {
    Simple,
    #[value(alias = "adv")]
    Advanced,
}

impl std::fmt::Display for LayoutArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simple => write!(f, "simple"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
