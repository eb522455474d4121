//! Progen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Progen
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           progen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: Filesystem)           │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     progen-adapters (Infrastructure)    │
//! │    (LocalFilesystem, MemoryFilesystem)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ScaffoldConfig, layouts, Structure)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use progen_core::{
//!     application::ScaffoldService,
//!     domain::{Layout, ScaffoldConfig, TargetOs},
//! };
//!
//! // 1. Describe the project
//! let config = ScaffoldConfig::builder()
//!     .project_name("demo").unwrap()
//!     .module_name("core").unwrap()
//!     .target_os(TargetOs::Linux)
//!     .layout(Layout::Advanced)
//!     .include_tests(true)
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with an injected adapter)
//! let service = ScaffoldService::new(filesystem);
//! service.scaffold(&config).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldReport, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        Layout, ModuleName, ProjectName, ProjectStructure, ScaffoldConfig, ScaffoldConfigBuilder,
        TargetOs,
    };
    pub use crate::error::{ProgenError, ProgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
