use anyhow::{Context, Result, anyhow};
use dashmap::DashMap;
use log::{debug, info};
use rayon::prelude::*;
use std::{fs, path::PathBuf};

use storyscan_core::{
    FsResolver, ImportSet, StoryAnalysis, associate, classify, collect_preview_files,
    collect_story_files,
};

use crate::{
    config::Config,
    preview::analyze_preview,
    types::{PreviewCheckResult, StoryCheckResult},
};

/// Runs the `analyze` mode: classify every story file's imports and try to
/// associate each with its component file.
///
/// Files are analyzed in parallel; each produces an independent immutable
/// record. A read failure on any discovered story file aborts the whole run.
pub fn run_story_check(cfg: &Config) -> Result<StoryCheckResult> {
    info!("Starting story import check");
    let root = cfg.resolve_root()?;
    info!("Using root directory: {}", root.display());

    let files = collect_story_files(&root)?;
    if files.is_empty() {
        return Err(anyhow!("No story files found under {}", root.display()));
    }
    info!("Found {} story files", files.len());

    // Component files are shared between stories, so their classification is cached
    let component_cache: DashMap<PathBuf, ImportSet> = DashMap::new();
    let resolver = FsResolver;

    let stories = files
        .par_iter()
        .map(|file| {
            debug!("Analyzing story file: {}", file.display());
            let text = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let imports = classify(&text);
            let association = associate(file, &text, &resolver, &component_cache)?;
            Ok(StoryAnalysis {
                file: file.clone(),
                imports,
                component_file: association.component_file,
                component_analysis: association.component_analysis,
            })
        })
        .collect::<Result<Vec<StoryAnalysis>>>()?;

    info!("Story check complete: {} records", stories.len());
    let files_analyzed = stories.len();
    Ok(StoryCheckResult { root, stories, files_analyzed })
}

/// Runs the `preview` mode: analyze every discovered preview entry file.
pub fn run_preview_check(cfg: &Config) -> Result<PreviewCheckResult> {
    info!("Starting preview file check");
    let root = cfg.resolve_root()?;
    info!("Using root directory: {}", root.display());

    let files = collect_preview_files(&root)?;
    if files.is_empty() {
        return Err(anyhow!(
            "No Storybook preview files found under {}",
            root.display()
        ));
    }
    info!("Found {} preview files", files.len());

    let previews = files
        .par_iter()
        .map(|file| {
            debug!("Analyzing preview file: {}", file.display());
            let text = fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            Ok(analyze_preview(file, &text, &root))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Preview check complete: {} records", previews.len());
    Ok(PreviewCheckResult { root, previews })
}
