//! Interactive setup mode for storyscan.
//!
//! Inspects a Storybook project (package manager, monorepo layout, Storybook
//! configuration directories, build output directory), asks for the values it
//! cannot infer, and writes the companion visual-testing configuration file.

mod config;
mod project;
mod prompter;
mod runner;
mod settings;

// Re-export public API
pub use config::Config;
pub use project::{ProjectInfo, inspect_project};
pub use prompter::{Answer, Choice, Prompter, ScriptedPrompter, TerminalPrompter};
pub use runner::run_init;
pub use settings::{VisualTestsConfig, load_config, save_config};
