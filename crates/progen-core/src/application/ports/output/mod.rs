//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `progen-adapters` crate provides implementations.

use std::path::Path;

use crate::error::ProgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `progen_adapters::filesystem::LocalFilesystem` (production)
/// - `progen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir_all` must be idempotent: creating a directory that already
///   exists is success, matching `std::fs::create_dir_all` semantics.
/// - `write_file` overwrites any existing file (last-write-wins).
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ProgenResult<()>;

    /// Write content to a file, replacing existing content.
    fn write_file(&self, path: &Path, content: &str) -> ProgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
