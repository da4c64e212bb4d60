use std::path::PathBuf;

/// One file's classified module specifiers, in order of appearance.
/// Duplicates are preserved; no resolution or normalization is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    pub static_imports: Vec<String>,
    pub dynamic_imports: Vec<String>,
}

impl ImportSet {
    pub fn total(&self) -> usize {
        self.static_imports.len() + self.dynamic_imports.len()
    }

    pub fn has_dynamic(&self) -> bool {
        !self.dynamic_imports.is_empty()
    }

    /// Static specifiers followed by dynamic ones, cloned into one list.
    pub fn all_specifiers(&self) -> Vec<String> {
        let mut all = self.static_imports.clone();
        all.extend(self.dynamic_imports.iter().cloned());
        all
    }
}

/// Analysis record for one story file. Constructed once, never mutated.
#[derive(Debug, Clone)]
pub struct StoryAnalysis {
    pub file: PathBuf,
    pub imports: ImportSet,
    /// Present only when the associator resolved the implementation file.
    pub component_file: Option<PathBuf>,
    /// Present only when `component_file` is present.
    pub component_analysis: Option<ImportSet>,
}

/// Analysis record for one Storybook preview entry file.
#[derive(Debug, Clone)]
pub struct PreviewAnalysis {
    pub file: PathBuf,
    pub total_imports: usize,
    pub has_shared_wrappers: bool,
    pub shared_wrapper_imports: Vec<String>,
    pub imports: ImportSet,
    pub is_monorepo: bool,
}
