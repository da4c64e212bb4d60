use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

use storyscan_analysis::{
    print_preview_report, print_story_report, run_preview_check, run_story_check,
    summarize_stories,
};
use storyscan_init::{TerminalPrompter, run_init};

#[derive(Parser)]
#[command(name = "storyscan")]
#[command(about = "Storybook companion for visual-testing pipelines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Set up or update the visual-testing configuration file (default)
    Init(storyscan_init::Config),
    /// Scan story files for import patterns that degrade change detection
    Analyze(storyscan_analysis::Config),
    /// Inspect Storybook preview files for globally-shared setup
    Preview(storyscan_analysis::Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Init(Default::default()));
    debug!("Selected mode: {:?}", command);

    let start = Instant::now();

    match command {
        Commands::Init(cfg) => {
            let mut prompter = TerminalPrompter;
            run_init(&cfg, &mut prompter, &mut stdout)?;
        }
        Commands::Analyze(cfg) => {
            info!("Running story analysis");
            let result = run_story_check(&cfg)?;
            let summary = summarize_stories(&result.stories);
            print_story_report(&mut stdout, &result, &summary)?;

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan(),
                result.files_analyzed.to_string().cyan()
            )?;
        }
        Commands::Preview(cfg) => {
            info!("Running preview analysis");
            let result = run_preview_check(&cfg)?;
            print_preview_report(&mut stdout, &result)?;

            writeln!(
                stdout,
                "\n{} Finished in {}ms on {} files.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan(),
                result.previews.len().to_string().cyan()
            )?;
        }
    }

    stdout.flush()?;
    Ok(())
}
