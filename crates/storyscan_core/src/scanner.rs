use anyhow::{Context, Result};
use dashmap::DashMap;
use log::{debug, trace};
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
};

use crate::types::ImportSet;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// `import <clause> from '<specifier>'` where the clause is either a braced
/// named-import list or any non-semicolon token run (default/namespace bindings).
/// Side-effect imports (`import './x'`) have no clause and are not matched.
fn static_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"import\s+(?:\{[^}]*\}|[^;'"]+?)\s+from\s+["']([^"']+)["']"#))
}

/// `import('<specifier>')`, `require('<specifier>')`, or `await import('<specifier>')`.
/// A single alternation so each call site contributes exactly one match. The
/// leading word boundary keeps identifiers merely ending in `require`/`import`
/// from counting.
fn dynamic_import_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"\b(?:await\s+)?(?:import|require)\s*\(\s*["']([^"']+)["']\s*\)"#))
}

/// Classifies every module specifier in `text` as statically or dynamically
/// imported.
///
/// This is lexical scanning, not parsing: specifiers are reported exactly as
/// written, in order of appearance, duplicates included. Re-exports,
/// template-literal specifiers, and conditional requires are out of scope.
pub fn classify(text: &str) -> ImportSet {
    let static_imports: Vec<String> =
        static_import_re().captures_iter(text).map(|c| c[1].to_string()).collect();
    let dynamic_imports: Vec<String> =
        dynamic_import_re().captures_iter(text).map(|c| c[1].to_string()).collect();

    trace!(
        "Classified {} static and {} dynamic imports",
        static_imports.len(),
        dynamic_imports.len()
    );

    ImportSet { static_imports, dynamic_imports }
}

/// Reads and classifies `file`, memoizing the result in `cache`. Component
/// files are frequently shared between stories, so repeated lookups are common.
pub fn imports_for(file: &Path, cache: &DashMap<PathBuf, ImportSet>) -> Result<ImportSet> {
    let file_buf = file.to_path_buf();
    if let Some(v) = cache.get(&file_buf) {
        trace!("Cache hit for imports: {}", file.display());
        return Ok(v.clone());
    }

    let src =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    let imports = classify(&src);
    debug!(
        "Found {} import specifiers in {}",
        imports.static_imports.len() + imports.dynamic_imports.len(),
        file.display()
    );
    cache.insert(file_buf, imports.clone());
    Ok(imports)
}
