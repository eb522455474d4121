//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Validate the config
//! 2. Plan the tree for the config
//! 3. Write the tree to the filesystem
//!
//! It implements the driving port (incoming) and uses the driven
//! [`Filesystem`] port (outgoing).
//!
//! # Idempotence
//!
//! Re-running over an existing tree succeeds: directories are created with
//! create-if-missing semantics and files are overwritten with canonical
//! content (last-write-wins). There is deliberately no rollback — a failed
//! run aborts in place and may leave a partially populated tree, since
//! file creation is not transactional.

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DomainValidator as validator, ProjectStructure, ScaffoldConfig, layouts},
    error::ProgenResult,
};

/// Summary of a completed scaffold run, for display purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub root: std::path::PathBuf,
    pub files_written: usize,
    pub directories_created: usize,
}

/// Main scaffolding service.
///
/// Orchestrates planning and writing of project trees.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a project.
    ///
    /// This is the main use case - creates a project tree from a
    /// configuration.
    #[instrument(skip_all, fields(config = %config, root = %config.project_root().display()))]
    pub fn scaffold(&self, config: &ScaffoldConfig) -> ProgenResult<ScaffoldReport> {
        info!(
            "Scaffolding {} project for {}",
            config.layout(),
            config.target_os()
        );

        // 1. Validate config
        validator::validate_config(config)?;

        // 2. Plan the tree
        let structure = layouts::plan(config);
        validator::validate_structure(&structure)?;
        debug!(entries = structure.entry_count(), "Plan ready");

        // 3. Refuse to scaffold over a non-directory
        let root = structure.root().clone();
        if self.filesystem.exists(&root) && !self.filesystem.is_dir(&root) {
            return Err(ApplicationError::PathCollision { path: root }.into());
        }

        // 4. Write to filesystem
        let report = self.write_structure(&structure)?;

        info!(
            files = report.files_written,
            directories = report.directories_created,
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write all entries in the structure.
    ///
    /// Any filesystem error aborts the run and surfaces as-is; entries
    /// already written stay on disk.
    fn write_structure(&self, structure: &ProjectStructure) -> ProgenResult<ScaffoldReport> {
        let mut files_written = 0;
        let mut directories_created = 0;

        // Create root
        self.filesystem.create_dir_all(structure.root())?;

        // Write entries
        for entry in &structure.entries {
            match entry {
                crate::domain::FsEntry::Directory(dir) => {
                    let path = structure.root().join(&dir.path);
                    self.filesystem.create_dir_all(&path)?;
                    directories_created += 1;
                }
                crate::domain::FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    // Ensure parent exists
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;
                    files_written += 1;
                }
            }
        }

        Ok(ScaffoldReport {
            root: structure.root().clone(),
            files_written,
            directories_created,
        })
    }
}
