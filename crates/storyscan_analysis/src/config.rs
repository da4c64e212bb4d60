use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;

use storyscan_core::find_git_root;

/// Shared options for the read-only `analyze` and `preview` modes.
#[derive(Debug, Clone, Parser)]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,
}

impl Config {
    /// The project root: the `--root` override when given, otherwise the
    /// enclosing git root.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(r) = &self.root {
            debug!("Using provided root directory: {:?}", r);
            return Ok(r.canonicalize().unwrap_or_else(|_| r.clone()));
        }
        debug!("No root provided, searching for git root");
        find_git_root()
    }
}
