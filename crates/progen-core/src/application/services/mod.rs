//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case of scaffolding a project.

pub mod scaffold_service;
