//! Domain value objects: TargetOs, Layout, ProjectName, ModuleName.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. The enum
//! types hold their string representations and `FromStr` parsers; everything
//! the generated tree contains for a given OS or layout lives in
//! `layouts.rs`, except the handful of OS literals that are intrinsic to the
//! OS itself (config file name, log path).

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TargetOs ─────────────────────────────────────────────────────────────────

/// The operating system the generated project is configured for.
///
/// Not the OS progen runs on — a Linux host can generate a Windows-flavoured
/// tree and vice versa. `detect()` provides the host default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    Linux,
    Windows,
}

impl TargetOs {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }

    /// Capitalised form used in generated prose ("Generated for Linux.").
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::Windows => "Windows",
        }
    }

    /// Name of the single OS-conditional config file.
    pub const fn config_file_name(&self) -> &'static str {
        match self {
            Self::Linux => "config_linux.ini",
            Self::Windows => "config_windows.ini",
        }
    }

    /// The `log_path` literal written into that config file.
    pub const fn log_path(&self) -> &'static str {
        match self {
            Self::Linux => "/var/logs/",
            Self::Windows => "C:\\logs\\",
        }
    }

    /// Default target for the host platform.
    pub const fn detect() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Linux
        }
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetOs {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "windows" | "win" => Ok(Self::Windows),
            other => Err(DomainError::UnknownTargetOs(other.to_string())),
        }
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// How much structure to generate.
///
/// `Simple` produces the README, the OS config file, and (optionally) the
/// tests folder. `Advanced` additionally produces the layered source tree,
/// data folders, and top-level metadata files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Simple,
    Advanced,
}

impl Layout {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Advanced => "advanced",
        }
    }

    /// Whether this layout requires a module name.
    pub const fn requires_module(self) -> bool {
        matches!(self, Self::Advanced)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "advanced" | "adv" | "full" => Ok(Self::Advanced),
            other => Err(DomainError::UnknownLayout(other.to_string())),
        }
    }
}

// ── Name newtypes ─────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: a usable path segment on both Unix and Windows. Enforced at
/// construction; a `ProjectName` can always be joined onto a path as one
/// component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_segment(&name).map_err(|reason| DomainError::InvalidProjectName {
            name: name.clone(),
            reason,
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A validated module name, used as the directory segment under `src/`.
///
/// Same path-segment rules as [`ProjectName`]; kept as a distinct type so the
/// two cannot be swapped at a call-site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_segment(&name).map_err(|reason| DomainError::InvalidModuleName {
            name: name.clone(),
            reason,
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ModuleName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Shared path-segment rule for project and module names.
///
/// The accepted alphabet (alphanumeric, `-`, `_`, `.`) excludes every
/// character that is reserved on either Unix or Windows filesystems, so a
/// valid name never needs escaping or platform-specific handling.
fn validate_segment(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name cannot be empty".into());
    }
    if name == "." || name == ".." {
        return Err("name cannot be '.' or '..'".into());
    }
    if name.starts_with('.') {
        return Err("name cannot start with '.'".into());
    }
    if name.starts_with('-') {
        return Err("name cannot start with '-'".into());
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(format!("character '{bad}' is not allowed"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_os_display_is_lowercase() {
        assert_eq!(TargetOs::Linux.to_string(), "linux");
        assert_eq!(TargetOs::Windows.to_string(), "windows");
    }

    #[test]
    fn target_os_from_str_accepts_aliases() {
        assert_eq!("win".parse::<TargetOs>().unwrap(), TargetOs::Windows);
        assert_eq!("LINUX".parse::<TargetOs>().unwrap(), TargetOs::Linux);
    }

    #[test]
    fn target_os_from_str_unknown_errors() {
        assert!("macos".parse::<TargetOs>().is_err());
        assert!("".parse::<TargetOs>().is_err());
    }

    #[test]
    fn config_file_name_matches_os() {
        assert_eq!(TargetOs::Linux.config_file_name(), "config_linux.ini");
        assert_eq!(TargetOs::Windows.config_file_name(), "config_windows.ini");
    }

    #[test]
    fn log_path_literals_are_exact() {
        assert_eq!(TargetOs::Linux.log_path(), "/var/logs/");
        assert_eq!(TargetOs::Windows.log_path(), "C:\\logs\\");
    }

    #[test]
    fn detect_matches_host() {
        let detected = TargetOs::detect();
        if cfg!(windows) {
            assert_eq!(detected, TargetOs::Windows);
        } else {
            assert_eq!(detected, TargetOs::Linux);
        }
    }

    #[test]
    fn layout_from_str_accepts_aliases() {
        assert_eq!("adv".parse::<Layout>().unwrap(), Layout::Advanced);
        assert_eq!("full".parse::<Layout>().unwrap(), Layout::Advanced);
        assert_eq!("simple".parse::<Layout>().unwrap(), Layout::Simple);
    }

    #[test]
    fn only_advanced_requires_module() {
        assert!(Layout::Advanced.requires_module());
        assert!(!Layout::Simple.requires_module());
    }

    #[test]
    fn valid_project_names_pass() {
        for name in &["demo", "my-project", "my_app", "project123", "v1.2"] {
            assert!(ProjectName::new(*name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_project_name_is_invalid() {
        assert!(matches!(
            ProjectName::new(""),
            Err(DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn dotfile_and_dash_prefixes_are_invalid() {
        assert!(ProjectName::new(".hidden").is_err());
        assert!(ProjectName::new("-flag").is_err());
        assert!(ProjectName::new(".").is_err());
        assert!(ProjectName::new("..").is_err());
    }

    #[test]
    fn path_separators_are_invalid() {
        assert!(ProjectName::new("a/b").is_err());
        assert!(ProjectName::new("a\\b").is_err());
    }

    #[test]
    fn windows_reserved_characters_are_invalid() {
        for name in &["a:b", "a*b", "a?b", "a<b", "a>b", "a|b", "a\"b"] {
            assert!(ProjectName::new(*name).is_err(), "accepted: {name}");
        }
    }

    #[test]
    fn module_name_reports_its_own_error_variant() {
        assert!(matches!(
            ModuleName::new("bad name"),
            Err(DomainError::InvalidModuleName { .. })
        ));
        assert!(ModuleName::new("core").is_ok());
    }
}
