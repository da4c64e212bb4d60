//! Read-only analysis modes for storyscan.
//!
//! `analyze` classifies the imports of every story file and associates each
//! story with its component file; `preview` inspects Storybook preview entry
//! files for globally-shared setup that widens the blast radius of changes in
//! a visual-testing pipeline.
//!
//! # Examples
//!
//! ```no_run
//! use storyscan_analysis::{Config, run_story_check, summarize_stories, print_story_report};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { root: Some(std::path::PathBuf::from("/path/to/project")) };
//! let result = run_story_check(&cfg)?;
//! let summary = summarize_stories(&result.stories);
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! print_story_report(&mut stdout, &result, &summary)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod preview;
mod reporter;
mod types;

// Re-export public API
pub use checker::{run_preview_check, run_story_check};
pub use config::Config;
pub use preview::analyze_preview;
pub use reporter::{
    ImportTotals, StorySummary, preview_warnings, print_preview_report, print_story_report,
    summarize_stories,
};
pub use types::{PreviewCheckResult, PreviewWarning, StoryCheckResult};
