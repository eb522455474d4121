//! Layout planning: the mapping from a [`ScaffoldConfig`] to the tree it
//! produces.
//!
//! # Design
//!
//! Everything the generator writes is decided here, in one place. The rest of
//! the system only moves a [`ProjectStructure`] to disk; no file name or file
//! content appears anywhere else. Content is static apart from string
//! interpolation of the project name, module name, and target OS.
//!
//! Planning is pure and deterministic: the same config always yields the same
//! structure, which is what makes scaffolding idempotent end to end.

use crate::domain::{
    entities::{project_structure::ProjectStructure, scaffold_config::ScaffoldConfig},
    value_objects::Layout,
};

// ── Static content ────────────────────────────────────────────────────────────

const LICENSE_TEXT: &str = "MIT License\n\nCopyright (c)";

const MAKEFILE_STUB: &str = "# Add make targets like `make data` or `make train` here.";

const SETUP_CFG: &str = "[flake8]\nmax-line-length = 88";

const TEST_STUB: &str = "# Sample test\n\ndef test_dummy():\n    assert True";

/// Subfolders of `data/` in the advanced layout.
const DATA_SUBDIRS: [&str; 4] = ["raw", "interim", "processed", "external"];

/// Auxiliary top-level folders in the advanced layout.
const AUX_DIRS: [&str; 5] = ["docs", "models", "notebooks", "references", "reports/figures"];

/// Source stubs written directly under `src/<module>/`, minus `__init__.py`
/// which interpolates the module name.
const MODULE_STUBS: [(&str, &str); 4] = [
    ("config.py", "# Configuration variables"),
    ("dataset.py", "# Data loading and saving"),
    ("features.py", "# Feature engineering"),
    ("plots.py", "# Plotting utilities"),
];

/// Stubs under `src/<module>/modeling/`.
const MODELING_STUBS: [(&str, &str); 3] = [
    ("__init__.py", ""),
    ("train.py", "# Training code"),
    ("predict.py", "# Prediction code"),
];

// ── Planning ──────────────────────────────────────────────────────────────────

/// Plan the full project tree for `config`.
///
/// The returned structure is rooted at `config.project_root()`; every entry
/// path is relative to that root.
pub fn plan(config: &ScaffoldConfig) -> ProjectStructure {
    let mut structure = ProjectStructure::new(config.project_root());

    base_entries(&mut structure, config);

    if config.layout() == Layout::Advanced {
        advanced_entries(&mut structure, config);
    }

    if config.include_tests() {
        structure.add_file("tests/test_main.py", TEST_STUB.to_string());
    }

    structure
}

/// Entries common to every layout: the README and the single OS-conditional
/// config file.
fn base_entries(structure: &mut ProjectStructure, config: &ScaffoldConfig) {
    let os = config.target_os();

    structure.add_file(
        "README.md",
        format!(
            "# {}\n\nGenerated for {}.",
            config.project_name(),
            os.title()
        ),
    );

    structure.add_file(
        os.config_file_name(),
        format!("[config]\nlog_path = {}", os.log_path()),
    );
}

/// The layered source tree, data folders, and metadata files of the advanced
/// layout.
fn advanced_entries(structure: &mut ProjectStructure, config: &ScaffoldConfig) {
    // Validated upstream: the advanced layout always carries a module name.
    let module = config
        .module_name()
        .map(|m| m.as_str())
        .unwrap_or_default();

    // Top-level metadata files.
    structure.add_file("requirements.txt", String::new());
    structure.add_file("LICENSE", LICENSE_TEXT.to_string());
    structure.add_file("Makefile", MAKEFILE_STUB.to_string());
    structure.add_file("setup.cfg", SETUP_CFG.to_string());
    structure.add_file(
        "pyproject.toml",
        format!(
            "[project]\nname = \"{}\"\nversion = \"0.1.0\"",
            config.project_name()
        ),
    );

    // Data folders.
    for sub in DATA_SUBDIRS {
        structure.add_directory(format!("data/{sub}"));
    }

    // Other folders.
    for dir in AUX_DIRS {
        structure.add_directory(dir);
    }

    // Source code structure.
    let src_base = format!("src/{module}");
    structure.add_file(
        format!("{src_base}/__init__.py"),
        format!("# {module} module"),
    );
    for (file, content) in MODULE_STUBS {
        structure.add_file(format!("{src_base}/{file}"), content.to_string());
    }
    for (file, content) in MODELING_STUBS {
        structure.add_file(format!("{src_base}/modeling/{file}"), content.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::TargetOs;
    use std::path::Path;

    fn config(os: TargetOs, layout: Layout, tests: bool) -> ScaffoldConfig {
        let builder = ScaffoldConfig::builder()
            .project_name("demo")
            .unwrap()
            .target_os(os)
            .layout(layout)
            .include_tests(tests);
        match layout {
            Layout::Advanced => builder.module_name("core").unwrap().build().unwrap(),
            Layout::Simple => builder.build().unwrap(),
        }
    }

    fn file_content<'a>(structure: &'a ProjectStructure, path: &str) -> Option<&'a str> {
        structure
            .files()
            .find(|f| f.path == Path::new(path))
            .map(|f| f.content.as_str())
    }

    #[test]
    fn plan_is_deterministic() {
        let cfg = config(TargetOs::Linux, Layout::Advanced, true);
        assert_eq!(plan(&cfg), plan(&cfg));
    }

    #[test]
    fn plan_always_validates() {
        for os in [TargetOs::Linux, TargetOs::Windows] {
            for layout in [Layout::Simple, Layout::Advanced] {
                for tests in [false, true] {
                    let structure = plan(&config(os, layout, tests));
                    structure.validate().expect("planned structure is valid");
                }
            }
        }
    }

    #[test]
    fn config_file_name_follows_target_os() {
        let linux = plan(&config(TargetOs::Linux, Layout::Simple, false));
        assert_eq!(
            file_content(&linux, "config_linux.ini"),
            Some("[config]\nlog_path = /var/logs/")
        );
        assert!(file_content(&linux, "config_windows.ini").is_none());

        let windows = plan(&config(TargetOs::Windows, Layout::Simple, false));
        assert_eq!(
            file_content(&windows, "config_windows.ini"),
            Some("[config]\nlog_path = C:\\logs\\")
        );
        assert!(file_content(&windows, "config_linux.ini").is_none());
    }

    #[test]
    fn readme_mentions_project_and_os_title() {
        let structure = plan(&config(TargetOs::Windows, Layout::Simple, false));
        assert_eq!(
            file_content(&structure, "README.md"),
            Some("# demo\n\nGenerated for Windows.")
        );
    }

    #[test]
    fn tests_folder_exists_iff_requested() {
        let with = plan(&config(TargetOs::Linux, Layout::Simple, true));
        assert_eq!(
            file_content(&with, "tests/test_main.py"),
            Some("# Sample test\n\ndef test_dummy():\n    assert True")
        );

        let without = plan(&config(TargetOs::Linux, Layout::Simple, false));
        assert!(
            !without
                .files()
                .any(|f| f.path.starts_with("tests")),
            "tests/ must be absent when not requested"
        );
    }

    #[test]
    fn simple_layout_has_no_source_tree() {
        let structure = plan(&config(TargetOs::Linux, Layout::Simple, false));
        assert_eq!(structure.entry_count(), 2);
        assert!(structure.directories().count() == 0);
    }

    #[test]
    fn advanced_layout_has_modeling_stubs() {
        let structure = plan(&config(TargetOs::Linux, Layout::Advanced, false));
        assert_eq!(
            file_content(&structure, "src/core/modeling/train.py"),
            Some("# Training code")
        );
        assert_eq!(
            file_content(&structure, "src/core/modeling/predict.py"),
            Some("# Prediction code")
        );
        assert_eq!(
            file_content(&structure, "src/core/__init__.py"),
            Some("# core module")
        );
    }

    #[test]
    fn advanced_layout_has_data_and_aux_dirs() {
        let structure = plan(&config(TargetOs::Linux, Layout::Advanced, false));
        let dirs: Vec<_> = structure.directories().map(|d| d.path.clone()).collect();

        for expected in [
            "data/raw",
            "data/interim",
            "data/processed",
            "data/external",
            "docs",
            "models",
            "notebooks",
            "references",
            "reports/figures",
        ] {
            assert!(
                dirs.iter().any(|d| d == Path::new(expected)),
                "missing directory: {expected}"
            );
        }
    }

    #[test]
    fn advanced_layout_has_metadata_files() {
        let structure = plan(&config(TargetOs::Linux, Layout::Advanced, false));

        assert_eq!(file_content(&structure, "requirements.txt"), Some(""));
        assert_eq!(
            file_content(&structure, "LICENSE"),
            Some("MIT License\n\nCopyright (c)")
        );
        assert_eq!(
            file_content(&structure, "setup.cfg"),
            Some("[flake8]\nmax-line-length = 88")
        );
        assert_eq!(
            file_content(&structure, "pyproject.toml"),
            Some("[project]\nname = \"demo\"\nversion = \"0.1.0\"")
        );
        assert!(file_content(&structure, "Makefile").is_some());
    }

    #[test]
    fn structure_is_rooted_under_output_root() {
        let cfg = ScaffoldConfig::builder()
            .project_name("demo")
            .unwrap()
            .layout(Layout::Simple)
            .output_root("/srv/out")
            .build()
            .unwrap();
        assert_eq!(plan(&cfg).root(), Path::new("/srv/out/demo"));
    }
}
