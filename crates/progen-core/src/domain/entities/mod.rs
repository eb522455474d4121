pub mod project_structure;
pub mod scaffold_config;

pub use project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure};
pub use scaffold_config::{ScaffoldConfig, ScaffoldConfigBuilder};
