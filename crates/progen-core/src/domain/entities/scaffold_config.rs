//! The `ScaffoldConfig` aggregate root and its typestate builder.
//!
//! A `ScaffoldConfig` is the fully-resolved, validated description of the
//! project tree the user wants generated. All fields are validated at build
//! time; once a `ScaffoldConfig` exists it is guaranteed consistent.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoName` / `HasName`) to
//! enforce at *compile time* that a project name is set before any other
//! field. Runtime validation (`validate`) is still called at `build()` to
//! catch cross-field invariants that cannot be expressed in the type system.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{Layout, ModuleName, ProjectName, TargetOs},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated scaffolding request.
///
/// Every field is guaranteed consistent on construction:
/// - `project_name` and `module_name` (if present) are valid path segments
/// - `module_name` is present whenever `layout` requires one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    project_name: ProjectName,
    module_name: Option<ModuleName>,
    target_os: TargetOs,
    layout: Layout,
    include_tests: bool,
    output_root: PathBuf,
}

impl ScaffoldConfig {
    /// Start building a new `ScaffoldConfig`.
    pub fn builder() -> ScaffoldConfigBuilder<NoName> {
        ScaffoldConfigBuilder::new()
    }

    pub fn project_name(&self) -> &ProjectName {
        &self.project_name
    }
    pub fn module_name(&self) -> Option<&ModuleName> {
        self.module_name.as_ref()
    }
    pub const fn target_os(&self) -> TargetOs {
        self.target_os
    }
    pub const fn layout(&self) -> Layout {
        self.layout
    }
    pub const fn include_tests(&self) -> bool {
        self.include_tests
    }
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// The directory the generated tree is rooted at:
    /// `output_root / project_name`.
    pub fn project_root(&self) -> PathBuf {
        self.output_root.join(self.project_name.as_str())
    }

    /// Validate this config's internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.layout.requires_module() && self.module_name.is_none() {
            return Err(DomainError::MissingRequiredField {
                field: "module_name",
            });
        }
        Ok(())
    }
}

impl fmt::Display for ScaffoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.project_name, self.layout, self.target_os
        )?;
        if let Some(module) = &self.module_name {
            write!(f, " + {module}")?;
        }
        Ok(())
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: project name has not yet been set.
pub struct NoName;
/// Marker: project name has been set; other fields may now be configured.
pub struct HasName;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`ScaffoldConfig`].
///
/// Compile-time guarantee: the remaining fields are only accessible after the
/// project name has been set (and has passed validation).
pub struct ScaffoldConfigBuilder<S> {
    project_name: Option<ProjectName>,
    module_name: Option<ModuleName>,
    target_os: Option<TargetOs>,
    layout: Option<Layout>,
    include_tests: bool,
    output_root: Option<PathBuf>,
    _marker: PhantomData<S>,
}

impl ScaffoldConfigBuilder<NoName> {
    pub fn new() -> Self {
        Self {
            project_name: None,
            module_name: None,
            target_os: None,
            layout: None,
            include_tests: false,
            output_root: None,
            _marker: PhantomData,
        }
    }

    /// Set and validate the project name. This transitions the builder to
    /// `HasName`.
    pub fn project_name(
        self,
        name: impl Into<String>,
    ) -> Result<ScaffoldConfigBuilder<HasName>, DomainError> {
        let project_name = ProjectName::new(name)?;
        Ok(ScaffoldConfigBuilder {
            project_name: Some(project_name),
            module_name: self.module_name,
            target_os: self.target_os,
            layout: self.layout,
            include_tests: self.include_tests,
            output_root: self.output_root,
            _marker: PhantomData,
        })
    }
}

impl Default for ScaffoldConfigBuilder<NoName> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScaffoldConfigBuilder<HasName> {
    /// Set and validate the module name.
    pub fn module_name(mut self, name: impl Into<String>) -> Result<Self, DomainError> {
        self.module_name = Some(ModuleName::new(name)?);
        Ok(self)
    }

    /// Set the target OS. Defaults to [`TargetOs::detect`] when omitted.
    pub fn target_os(mut self, os: TargetOs) -> Self {
        self.target_os = Some(os);
        self
    }

    /// Set the layout. Defaults to [`Layout::Advanced`] when omitted.
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Whether to generate the `tests/` folder. Defaults to `false`.
    pub fn include_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Directory the project root is created under. Defaults to `.`.
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Finalise, applying defaults and cross-field validation.
    pub fn build(self) -> Result<ScaffoldConfig, DomainError> {
        let config = ScaffoldConfig {
            // HasName guarantees the name was set.
            project_name: self.project_name.expect("typestate: name set"),
            module_name: self.module_name,
            target_os: self.target_os.unwrap_or_else(TargetOs::detect),
            layout: self.layout.unwrap_or(Layout::Advanced),
            include_tests: self.include_tests,
            output_root: self.output_root.unwrap_or_else(|| PathBuf::from(".")),
        };
        config.validate()?;
        Ok(config)
    }
}
