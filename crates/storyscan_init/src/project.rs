use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use storyscan_core::{
    DEFAULT_BUILD_DIR, PackageManager, STORYBOOK_CONFIG_DIR, detect_package_manager, is_monorepo,
    read_manifest,
};

/// Everything init learns about the project before asking questions.
/// All probing is best-effort; failures fall back to defaults.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub root: PathBuf,
    pub package_manager: PackageManager,
    pub is_monorepo: bool,
    /// Every `.storybook` directory found under the root, sorted.
    pub storybook_dirs: Vec<PathBuf>,
    pub build_dir: String,
}

pub fn inspect_project(root: &Path) -> ProjectInfo {
    debug!("Inspecting project at {}", root.display());
    ProjectInfo {
        root: root.to_path_buf(),
        package_manager: detect_package_manager(root),
        is_monorepo: is_monorepo(root),
        storybook_dirs: find_storybook_dirs(root),
        build_dir: infer_build_dir(root),
    }
}

fn find_storybook_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    let walker = WalkBuilder::new(root).hidden(false).ignore(true).git_ignore(true).build();

    for entry in walker.filter_map(|e| e.ok()) {
        let p = entry.path();
        if p.is_dir()
            && p.file_name().and_then(|n| n.to_str()) == Some(STORYBOOK_CONFIG_DIR)
        {
            trace!("Found Storybook config dir: {}", p.display());
            dirs.push(p.to_path_buf());
        }
    }

    dirs.sort();
    debug!("Found {} Storybook config dirs", dirs.len());
    dirs
}

/// Infers the Storybook build output directory from the manifest's
/// `build-storybook` script (`-o`/`--output-dir` argument), defaulting to
/// `storybook-static`.
fn infer_build_dir(root: &Path) -> String {
    let Some(manifest) = read_manifest(root) else {
        return DEFAULT_BUILD_DIR.to_string();
    };
    let Some(script) = manifest
        .get("scripts")
        .and_then(|s| s.get("build-storybook"))
        .and_then(|s| s.as_str())
    else {
        return DEFAULT_BUILD_DIR.to_string();
    };

    let mut tokens = script.split_whitespace().peekable();
    while let Some(token) = tokens.next() {
        if token == "-o" || token == "--output-dir" {
            if let Some(dir) = tokens.peek() {
                trace!("Inferred build dir '{}' from build-storybook script", dir);
                return dir.to_string();
            }
        }
        if let Some(dir) = token.strip_prefix("--output-dir=") {
            trace!("Inferred build dir '{}' from build-storybook script", dir);
            return dir.to_string();
        }
    }

    DEFAULT_BUILD_DIR.to_string()
}
