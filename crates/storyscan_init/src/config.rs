use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use storyscan_core::find_git_root;

/// Options for the interactive `init` mode.
#[derive(Debug, Clone, Default, Parser)]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(r) = &self.root {
            debug!("Using provided root directory: {:?}", r);
            return Ok(r.canonicalize().unwrap_or_else(|_| r.clone()));
        }
        debug!("No root provided, searching for git root");
        find_git_root()
    }
}
