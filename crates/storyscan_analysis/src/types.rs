use std::path::PathBuf;

use storyscan_core::{PreviewAnalysis, StoryAnalysis};

#[derive(Debug, Clone)]
pub struct StoryCheckResult {
    pub root: PathBuf,
    pub stories: Vec<StoryAnalysis>,
    pub files_analyzed: usize,
}

#[derive(Debug, Clone)]
pub struct PreviewCheckResult {
    pub root: PathBuf,
    pub previews: Vec<PreviewAnalysis>,
}

/// The four independent warning categories a preview file can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewWarning {
    /// The repository declares workspace members; every story inherits the
    /// preview file as a dependency across package boundaries.
    Monorepo,
    /// Strictly more imports than the threshold allows.
    ImportCount,
    /// At least one import looks like a shared theme/provider/decorator.
    SharedWrappers,
    /// At least one dynamic import, invisible to static dependency tracing.
    DynamicImports,
}
