//! Fixed constants shared across the analysis pipeline.

/// Source-file extensions recognized for story and component discovery.
pub const SOURCE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Case-insensitive substrings marking an import as a likely cross-cutting
/// UI wrapper (theming, context providers, story decorators).
pub const SHARED_WRAPPER_KEYWORDS: &[&str] = &["wrapper", "decorator", "theme", "provider"];

/// Import-count warning threshold for preview files. The warning fires only
/// when the count is strictly greater than this value.
pub const IMPORT_COUNT_THRESHOLD: usize = 10;

/// The project manifest consulted for workspace and script probing.
pub const PROJECT_MANIFEST: &str = "package.json";

/// Directory name holding Storybook configuration.
pub const STORYBOOK_CONFIG_DIR: &str = ".storybook";

/// Default Storybook build output directory.
pub const DEFAULT_BUILD_DIR: &str = "storybook-static";

/// The visual-testing configuration file written by `init`.
pub const CONFIG_FILE_NAME: &str = "visual-tests.config.json";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_extensions() {
        assert_eq!(SOURCE_EXTENSIONS, &["js", "jsx", "ts", "tsx"]);
    }

    #[test]
    fn test_wrapper_keywords_are_lowercase() {
        // Matching lowercases the specifier, so the keywords must already be lowercase
        for kw in SHARED_WRAPPER_KEYWORDS {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }
}
