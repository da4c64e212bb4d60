//! Core analysis engine for storyscan.
//!
//! This crate provides the shared machinery for inspecting Storybook projects:
//! - Lexical classification of static vs dynamic imports in JS/TS source text
//! - Heuristic association of story files with their component files
//! - Detection of globally-shared wrapper/provider imports
//! - Story and preview file collection
//! - Project probing (git root, workspaces, package manager)

mod associate;
mod collector;
mod config;
mod constants;
mod resolver;
mod scanner;
mod types;
mod wrappers;

// Re-export public API
pub use associate::{Association, associate};
pub use collector::{collect_preview_files, collect_story_files};
pub use config::{PackageManager, detect_package_manager, find_git_root, is_monorepo, read_manifest};
pub use constants::{
    CONFIG_FILE_NAME, DEFAULT_BUILD_DIR, IMPORT_COUNT_THRESHOLD, PROJECT_MANIFEST,
    SHARED_WRAPPER_KEYWORDS, SOURCE_EXTENSIONS, STORYBOOK_CONFIG_DIR,
};
pub use resolver::{FileResolver, FsResolver, component_candidates};
pub use scanner::{classify, imports_for};
pub use types::{ImportSet, PreviewAnalysis, StoryAnalysis};
pub use wrappers::detect_shared_wrappers;
