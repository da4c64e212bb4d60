use anyhow::Result;
use dashmap::DashMap;
use log::{debug, trace};
use regex::Regex;
use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use crate::{resolver::FileResolver, scanner::imports_for, types::ImportSet};

/// Outcome of trying to locate the implementation file a story documents.
/// Both fields are absent whenever any step of the heuristic fails to match;
/// absence is a legitimate, common outcome, never an error.
#[derive(Debug, Clone, Default)]
pub struct Association {
    pub component_file: Option<PathBuf>,
    pub component_analysis: Option<ImportSet>,
}

/// `component: <expr>` in the story metadata; the expression runs to the next
/// comma, closing brace, or newline. Only the first occurrence is honored. The
/// word boundary keeps fields like `subcomponent:` from matching.
fn component_field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\bcomponent:\s*([^,}\n]+)").expect("valid regex literal"))
}

/// Heuristically associates a story file with its component file.
///
/// The chain is: find the `component:` metadata field, find the named import
/// that binds that identifier, resolve the import path against the story's
/// directory, then classify the resolved file's imports. Every link degrades
/// silently to "no association" when it fails to match; only reading the
/// resolved component file can return an error.
pub fn associate(
    story_path: &Path,
    story_text: &str,
    resolver: &dyn FileResolver,
    cache: &DashMap<PathBuf, ImportSet>,
) -> Result<Association> {
    let Some(identifier) = component_identifier(story_text) else {
        trace!("No component field in {}", story_path.display());
        return Ok(Association::default());
    };
    trace!("Story {} declares component '{}'", story_path.display(), identifier);

    let Some(import_path) = named_import_path(story_text, &identifier) else {
        trace!("No named import for '{}' in {}", identifier, story_path.display());
        return Ok(Association::default());
    };

    let story_dir = story_path.parent().unwrap_or_else(|| Path::new("."));
    let candidates = crate::resolver::component_candidates(story_dir, &import_path);
    let Some(component_file) = resolver.first_existing(&candidates) else {
        trace!("No candidate resolved for '{}' from {}", import_path, story_path.display());
        return Ok(Association::default());
    };
    debug!("Associated {} with {}", story_path.display(), component_file.display());

    let component_analysis = imports_for(&component_file, cache)?;
    Ok(Association {
        component_file: Some(component_file),
        component_analysis: Some(component_analysis),
    })
}

fn component_identifier(story_text: &str) -> Option<String> {
    component_field_re().captures(story_text).map(|c| c[1].trim().to_string())
}

/// Finds `import { .. <identifier> .. } from '<path>'` and returns the path.
/// The identifier is escaped, so one containing non-identifier characters
/// simply fails to match.
fn named_import_path(story_text: &str, identifier: &str) -> Option<String> {
    let pattern = format!(
        r#"import\s*\{{[^}}]*\b{}\b[^}}]*\}}\s*from\s*["']([^"']+)["']"#,
        regex::escape(identifier)
    );
    let re = Regex::new(&pattern).ok()?;
    re.captures(story_text).map(|c| c[1].to_string())
}
