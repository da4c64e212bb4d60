use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::SOURCE_EXTENSIONS;

/// Locates the first existing file among ordered candidate paths.
///
/// Injected into the associator so tests (and future non-filesystem backends)
/// can answer resolution queries without touching disk.
pub trait FileResolver {
    fn first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf>;
}

/// The real-filesystem resolver used in production.
pub struct FsResolver;

impl FileResolver for FsResolver {
    fn first_existing(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates.iter().find(|p| p.is_file()).cloned()
    }
}

/// Builds the candidate paths for a component imported as `import_path` from a
/// story in `story_dir`: first the path itself with each recognized source
/// extension, then the path treated as a directory with an index file inside.
pub fn component_candidates(story_dir: &Path, import_path: &str) -> Vec<PathBuf> {
    let base = clean(story_dir.join(import_path));
    trace!("Building component candidates for base {:?}", base);

    let mut candidates = Vec::with_capacity(SOURCE_EXTENSIONS.len() * 2);
    for ext in SOURCE_EXTENSIONS {
        candidates.push(PathBuf::from(format!("{}.{}", base.display(), ext)));
    }
    for ext in SOURCE_EXTENSIONS {
        candidates.push(base.join(format!("index.{}", ext)));
    }
    candidates
}
