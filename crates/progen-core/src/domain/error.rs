use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid module name '{name}': {reason}")]
    InvalidModuleName { name: String, reason: String },

    #[error("Unknown target OS: {0}")]
    UnknownTargetOs(String),

    #[error("Unknown layout: {0}")]
    UnknownLayout(String),

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Plan Errors
    // ========================================================================
    #[error("Project plan is empty")]
    EmptyPlan,

    #[error("Duplicate path in plan: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } | Self::InvalidModuleName { name, reason } => {
                vec![
                    format!("'{}' is not a valid name: {}", name, reason),
                    "Use alphanumeric characters, hyphens, and underscores".into(),
                    "Examples: my-project, my_app, project123".into(),
                ]
            }
            Self::UnknownTargetOs(os) => vec![
                format!("'{}' is not a supported target OS", os),
                "Supported: linux, windows".into(),
            ],
            Self::UnknownLayout(layout) => vec![
                format!("'{}' is not a supported layout", layout),
                "Supported: simple, advanced".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("The '{}' field is required for this layout", field),
                "The advanced layout needs a module name (e.g. --module core)".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyPlan | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
