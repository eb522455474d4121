//! Core domain layer for Progen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layouts;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
    scaffold_config::{ScaffoldConfig, ScaffoldConfigBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Layout, ModuleName, ProjectName, TargetOs};

pub use validation::DomainValidator;
