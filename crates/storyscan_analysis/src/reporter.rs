use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;
use log::debug;

use storyscan_core::{IMPORT_COUNT_THRESHOLD, PreviewAnalysis, StoryAnalysis};

use crate::types::{PreviewCheckResult, PreviewWarning, StoryCheckResult};

/// Aggregate counts over one level of a story scan (the stories' own imports,
/// or their associated components' imports).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportTotals {
    pub static_imports: usize,
    pub dynamic_imports: usize,
    pub files_with_dynamic: usize,
}

/// Grouped view over the story records, computed once and then rendered.
#[derive(Debug, Clone, Default)]
pub struct StorySummary {
    pub files_analyzed: usize,
    pub story_totals: ImportTotals,
    pub component_totals: ImportTotals,
    /// Story files whose own imports include at least one dynamic import.
    pub stories_with_dynamic: Vec<PathBuf>,
    /// Story files whose associated component has at least one dynamic import.
    pub components_with_dynamic: Vec<PathBuf>,
}

impl StorySummary {
    pub fn has_issues(&self) -> bool {
        !self.stories_with_dynamic.is_empty() || !self.components_with_dynamic.is_empty()
    }
}

/// Partitions and counts the story records. The story-level and
/// component-level partitions are independent: a record can appear in both,
/// one, or neither.
pub fn summarize_stories(records: &[StoryAnalysis]) -> StorySummary {
    let mut summary = StorySummary { files_analyzed: records.len(), ..Default::default() };

    for record in records {
        summary.story_totals.static_imports += record.imports.static_imports.len();
        summary.story_totals.dynamic_imports += record.imports.dynamic_imports.len();
        if record.imports.has_dynamic() {
            summary.story_totals.files_with_dynamic += 1;
            summary.stories_with_dynamic.push(record.file.clone());
        }

        if let Some(component) = &record.component_analysis {
            summary.component_totals.static_imports += component.static_imports.len();
            summary.component_totals.dynamic_imports += component.dynamic_imports.len();
            if component.has_dynamic() {
                summary.component_totals.files_with_dynamic += 1;
                summary.components_with_dynamic.push(record.file.clone());
            }
        }
    }

    debug!(
        "Summarized {} story records: {} with dynamic story imports, {} with dynamic component imports",
        summary.files_analyzed,
        summary.stories_with_dynamic.len(),
        summary.components_with_dynamic.len()
    );
    summary
}

/// Evaluates the four warning categories for one preview record. Each
/// category is independent; any subset can fire.
pub fn preview_warnings(record: &PreviewAnalysis) -> Vec<PreviewWarning> {
    let mut warnings = Vec::new();
    if record.is_monorepo {
        warnings.push(PreviewWarning::Monorepo);
    }
    if record.total_imports > IMPORT_COUNT_THRESHOLD {
        warnings.push(PreviewWarning::ImportCount);
    }
    if record.has_shared_wrappers {
        warnings.push(PreviewWarning::SharedWrappers);
    }
    if record.imports.has_dynamic() {
        warnings.push(PreviewWarning::DynamicImports);
    }
    warnings
}

fn display_path(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).to_string_lossy().to_string()
}

fn print_branch<W: Write>(writer: &mut W, idx: usize, len: usize, line: &str) -> io::Result<()> {
    let prefix = if idx == len - 1 { "└──" } else { "├──" };
    writeln!(writer, "{}  {}", prefix.dimmed(), line)
}

pub fn print_story_report<W: Write>(
    writer: &mut W,
    result: &StoryCheckResult,
    summary: &StorySummary,
) -> io::Result<()> {
    if !summary.has_issues() {
        writeln!(
            writer,
            "{} No dynamic imports found in {} story files.",
            "✓".green().bold(),
            summary.files_analyzed
        )?;
        writer.flush()?;
        return Ok(());
    }

    writeln!(writer, "{} Dynamic imports detected\n", "⚠".yellow().bold())?;

    for record in &result.stories {
        let story_dynamic = record.imports.has_dynamic();
        let component_dynamic =
            record.component_analysis.as_ref().map(|a| a.has_dynamic()).unwrap_or(false);
        if !story_dynamic && !component_dynamic {
            continue;
        }

        writeln!(writer, "{}", display_path(&result.root, &record.file).bright_white().bold())?;

        let mut lines: Vec<String> = Vec::new();
        for spec in &record.imports.dynamic_imports {
            lines.push(format!("import('{}') {}", spec, "in story".dimmed()));
        }
        if let (Some(component), Some(analysis)) =
            (&record.component_file, &record.component_analysis)
        {
            for spec in &analysis.dynamic_imports {
                lines.push(format!(
                    "import('{}') {} {}",
                    spec,
                    "in component".dimmed(),
                    display_path(&result.root, component).blue()
                ));
            }
        }
        let len = lines.len();
        for (idx, line) in lines.iter().enumerate() {
            print_branch(writer, idx, len, line)?;
        }
        writeln!(writer)?;
    }

    print_story_summary(writer, summary)?;
    writer.flush()?;
    Ok(())
}

fn print_story_summary<W: Write>(writer: &mut W, summary: &StorySummary) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Files analyzed: {}", summary.files_analyzed.to_string().cyan())?;
    writeln!(
        writer,
        "  Story imports: {} static, {} dynamic ({} files with dynamic imports)",
        summary.story_totals.static_imports.to_string().cyan(),
        summary.story_totals.dynamic_imports.to_string().yellow(),
        summary.story_totals.files_with_dynamic.to_string().yellow().bold()
    )?;
    writeln!(
        writer,
        "  Component imports: {} static, {} dynamic ({} files with dynamic imports)",
        summary.component_totals.static_imports.to_string().cyan(),
        summary.component_totals.dynamic_imports.to_string().yellow(),
        summary.component_totals.files_with_dynamic.to_string().yellow().bold()
    )?;
    Ok(())
}

pub fn print_preview_report<W: Write>(
    writer: &mut W,
    result: &PreviewCheckResult,
) -> io::Result<()> {
    let mut any_warning = false;

    for record in &result.previews {
        let warnings = preview_warnings(record);
        let path = display_path(&result.root, &record.file);

        if warnings.is_empty() {
            writeln!(
                writer,
                "{} {} ({} imports)",
                "✓".green().bold(),
                path.bright_white().bold(),
                record.total_imports
            )?;
            continue;
        }
        any_warning = true;

        writeln!(
            writer,
            "{} {} ({} imports)",
            "⚠".yellow().bold(),
            path.bright_white().bold(),
            record.total_imports.to_string().yellow()
        )?;

        let len = warnings.len();
        for (idx, warning) in warnings.iter().enumerate() {
            let line = match warning {
                PreviewWarning::Monorepo => {
                    "monorepo layout: preview changes invalidate stories in every package"
                        .to_string()
                }
                PreviewWarning::ImportCount => format!(
                    "{} imports exceed the threshold of {}",
                    record.total_imports.to_string().red().bold(),
                    IMPORT_COUNT_THRESHOLD
                ),
                PreviewWarning::SharedWrappers => format!(
                    "shared wrappers imported globally: {}",
                    record.shared_wrapper_imports.join(", ").yellow()
                ),
                PreviewWarning::DynamicImports => format!(
                    "dynamic imports invisible to change detection: {}",
                    record.imports.dynamic_imports.join(", ").yellow()
                ),
            };
            print_branch(writer, idx, len, &line)?;
        }
        writeln!(writer)?;
    }

    if !any_warning {
        writeln!(
            writer,
            "\n{} No issues found in {} preview files.",
            "✓".green().bold(),
            result.previews.len()
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storyscan_core::ImportSet;

    fn story(file: &str, dynamic: &[&str], component_dynamic: Option<&[&str]>) -> StoryAnalysis {
        let imports = ImportSet {
            static_imports: vec!["react".to_string()],
            dynamic_imports: dynamic.iter().map(|s| s.to_string()).collect(),
        };
        let component_analysis = component_dynamic.map(|d| ImportSet {
            static_imports: vec![],
            dynamic_imports: d.iter().map(|s| s.to_string()).collect(),
        });
        StoryAnalysis {
            file: PathBuf::from(file),
            imports,
            component_file: component_analysis.as_ref().map(|_| PathBuf::from("Comp.tsx")),
            component_analysis,
        }
    }

    fn preview(total: usize, dynamic: usize, wrappers: &[&str], monorepo: bool) -> PreviewAnalysis {
        let static_count = total - dynamic;
        PreviewAnalysis {
            file: PathBuf::from(".storybook/preview.ts"),
            total_imports: total,
            has_shared_wrappers: !wrappers.is_empty(),
            shared_wrapper_imports: wrappers.iter().map(|s| s.to_string()).collect(),
            imports: ImportSet {
                static_imports: (0..static_count).map(|i| format!("./m{i}")).collect(),
                dynamic_imports: (0..dynamic).map(|i| format!("./d{i}")).collect(),
            },
            is_monorepo: monorepo,
        }
    }

    #[test]
    fn test_summarize_empty_input() {
        let summary = summarize_stories(&[]);
        assert_eq!(summary.files_analyzed, 0);
        assert_eq!(summary.story_totals, ImportTotals::default());
        assert_eq!(summary.component_totals, ImportTotals::default());
        assert!(!summary.has_issues());
    }

    #[test]
    fn test_summarize_partitions_are_independent() {
        let records = vec![
            story("a.stories.ts", &["./lazy"], Some(&["./comp-lazy"])), // both
            story("b.stories.ts", &["./lazy"], None),                   // story only
            story("c.stories.ts", &[], Some(&["./comp-lazy"])),         // component only
            story("d.stories.ts", &[], Some(&[])),                      // neither
        ];
        let summary = summarize_stories(&records);
        assert_eq!(summary.files_analyzed, 4);
        assert_eq!(
            summary.stories_with_dynamic,
            vec![PathBuf::from("a.stories.ts"), PathBuf::from("b.stories.ts")]
        );
        assert_eq!(
            summary.components_with_dynamic,
            vec![PathBuf::from("a.stories.ts"), PathBuf::from("c.stories.ts")]
        );
        assert_eq!(summary.story_totals.files_with_dynamic, 2);
        assert_eq!(summary.component_totals.files_with_dynamic, 2);
        assert_eq!(summary.story_totals.static_imports, 4);
        assert_eq!(summary.story_totals.dynamic_imports, 2);
        assert_eq!(summary.component_totals.dynamic_imports, 2);
    }

    #[test]
    fn test_preview_warning_threshold_is_exclusive() {
        assert!(preview_warnings(&preview(10, 0, &[], false)).is_empty());
        assert_eq!(
            preview_warnings(&preview(11, 0, &[], false)),
            vec![PreviewWarning::ImportCount]
        );
    }

    #[test]
    fn test_preview_warning_subsets() {
        let all = preview_warnings(&preview(12, 2, &["./theme"], true));
        assert_eq!(
            all,
            vec![
                PreviewWarning::Monorepo,
                PreviewWarning::ImportCount,
                PreviewWarning::SharedWrappers,
                PreviewWarning::DynamicImports,
            ]
        );

        let none = preview_warnings(&preview(3, 0, &[], false));
        assert!(none.is_empty());

        let only_dynamic = preview_warnings(&preview(2, 1, &[], false));
        assert_eq!(only_dynamic, vec![PreviewWarning::DynamicImports]);
    }

    #[test]
    fn test_print_story_report_no_issues() {
        let result = StoryCheckResult {
            root: PathBuf::from("/proj"),
            stories: vec![],
            files_analyzed: 0,
        };
        let summary = summarize_stories(&result.stories);
        let mut out = Vec::new();
        print_story_report(&mut out, &result, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("No dynamic imports found"));
    }

    #[test]
    fn test_print_preview_report_lists_warnings() {
        let result = PreviewCheckResult {
            root: PathBuf::from("/proj"),
            previews: vec![preview(12, 1, &["./provider"], true)],
        };
        let mut out = Vec::new();
        print_preview_report(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("monorepo layout"));
        assert!(text.contains("exceed the threshold"));
        assert!(text.contains("./provider"));
        assert!(text.contains("dynamic imports invisible"));
    }
}
