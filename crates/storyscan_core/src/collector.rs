use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::constants::{SOURCE_EXTENSIONS, STORYBOOK_CONFIG_DIR};

/// Collects story files (`*.stories.<ext>`) under `root`, honoring gitignore
/// rules so build output and node_modules are skipped.
pub fn collect_story_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting story files under {}", root.display());
    collect(root, |p| {
        let Some(name) = p.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(&format!(".stories.{}", ext)))
    })
}

/// Collects preview entry files: `preview.<ext>` inside any `.storybook`
/// directory, at any depth (monorepos carry one per package).
pub fn collect_preview_files(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Collecting preview files under {}", root.display());
    collect(root, |p| {
        let in_config_dir = p
            .parent()
            .and_then(|d| d.file_name())
            .and_then(|n| n.to_str())
            .map(|n| n == STORYBOOK_CONFIG_DIR)
            .unwrap_or(false);
        if !in_config_dir {
            return false;
        }
        let stem_is_preview = p.file_stem().and_then(|s| s.to_str()) == Some("preview");
        let known_ext = p
            .extension()
            .and_then(|e| e.to_str())
            .map(|ext| SOURCE_EXTENSIONS.contains(&ext))
            .unwrap_or(false);
        stem_is_preview && known_ext
    })
}

fn collect(root: &Path, matches: impl Fn(&Path) -> bool) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    // hidden(false) so dot-directories like .storybook are walked
    let walker = WalkBuilder::new(root).hidden(false).ignore(true).git_ignore(true).build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }
        if matches(p) {
            trace!("Matched: {}", p.display());
            files.push(p.to_path_buf());
        }
    }

    // Walk order is not deterministic; sort so reports and tests are stable
    files.sort();
    debug!("Collected {} files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_collect_story_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "src/Button.stories.tsx", "");
        create_test_file(root, "src/Input.stories.js", "");
        create_test_file(root, "src/Button.tsx", "");
        create_test_file(root, "src/Button.test.tsx", "");

        let files = collect_story_files(root).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.to_string_lossy().contains(".stories.")));
    }

    #[test]
    fn test_collect_story_files_none() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "src/index.ts", "");
        let files = collect_story_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_preview_files_in_dot_storybook() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".storybook/preview.ts", "");
        create_test_file(root, ".storybook/main.ts", "");
        create_test_file(root, "packages/ui/.storybook/preview.jsx", "");
        create_test_file(root, "src/preview.ts", "");

        let files = collect_preview_files(root).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0], root.join(".storybook/preview.ts"));
        assert_eq!(files[1], root.join("packages/ui/.storybook/preview.jsx"));
    }

    #[test]
    fn test_collect_preview_ignores_unknown_extensions() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), ".storybook/preview.mdx", "");
        let files = collect_preview_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }
}
