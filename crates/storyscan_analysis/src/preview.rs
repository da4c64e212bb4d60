use log::debug;
use std::path::Path;

use storyscan_core::{PreviewAnalysis, classify, detect_shared_wrappers, is_monorepo};

/// Analyzes one preview entry file: classifies its imports, flags likely
/// shared wrappers across the static-then-dynamic specifier list, and checks
/// whether the repository is a monorepo.
///
/// Always returns a full record; the import-count threshold is evaluated by
/// the reporter, not here.
pub fn analyze_preview(file: &Path, text: &str, repo_root: &Path) -> PreviewAnalysis {
    let imports = classify(text);
    let shared_wrapper_imports = detect_shared_wrappers(&imports.all_specifiers());
    let total_imports = imports.total();
    let monorepo = is_monorepo(repo_root);

    debug!(
        "Preview {}: {} imports, {} shared wrappers, monorepo={}",
        file.display(),
        total_imports,
        shared_wrapper_imports.len(),
        monorepo
    );

    PreviewAnalysis {
        file: file.to_path_buf(),
        total_imports,
        has_shared_wrappers: !shared_wrapper_imports.is_empty(),
        shared_wrapper_imports,
        imports,
        is_monorepo: monorepo,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_counts_and_wrappers() {
        let temp_dir = TempDir::new().unwrap();
        let text = "\
import { ThemeProvider } from 'styled-components';
import { theme } from './theme';
import { withI18n } from './decorators';
const themed = await import('./theme-overrides');
";
        let analysis =
            analyze_preview(Path::new(".storybook/preview.ts"), text, temp_dir.path());
        assert_eq!(analysis.total_imports, 4);
        assert_eq!(analysis.imports.static_imports.len(), 3);
        assert_eq!(analysis.imports.dynamic_imports, vec!["./theme-overrides"]);
        assert!(analysis.has_shared_wrappers);
        // matching is on specifiers, static ones first, then dynamic
        assert_eq!(
            analysis.shared_wrapper_imports,
            vec!["./theme", "./decorators", "./theme-overrides"]
        );
        assert!(!analysis.is_monorepo);
    }

    #[test]
    fn test_monorepo_flag_from_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), r#"{"workspaces": ["packages/*"]}"#).unwrap();

        let analysis = analyze_preview(Path::new("preview.ts"), "", root);
        assert!(analysis.is_monorepo);
        assert_eq!(analysis.total_imports, 0);
        assert!(!analysis.has_shared_wrappers);
    }

    #[test]
    fn test_exactly_ten_imports() {
        let temp_dir = TempDir::new().unwrap();
        let text: String =
            (0..10).map(|i| format!("import m{i} from './m{i}';\n")).collect();
        let analysis = analyze_preview(Path::new("preview.ts"), &text, temp_dir.path());
        assert_eq!(analysis.total_imports, 10);
    }
}
