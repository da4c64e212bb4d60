use anyhow::{Result, anyhow};
use colored::Colorize;
use log::info;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

use storyscan_core::CONFIG_FILE_NAME;

use crate::{
    config::Config,
    project::inspect_project,
    prompter::{Choice, Prompter},
    settings::{load_config, save_config},
};

fn rel_to_root(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy().to_string();
    if rel.is_empty() { ".".to_string() } else { rel }
}

/// Runs the interactive setup: inspect the project, ask for the values that
/// cannot be inferred, and write (or update) the visual-testing config file.
///
/// Declining the final write confirmation skips the write and returns
/// successfully.
pub fn run_init<W: Write>(cfg: &Config, prompter: &mut dyn Prompter, writer: &mut W) -> Result<()> {
    let root = cfg.resolve_root()?;
    info!("Initializing visual-testing config under {}", root.display());
    let project = inspect_project(&root);

    writeln!(writer, "{} {}", "●".bright_blue(), "Visual-testing setup".bold())?;
    writeln!(writer, "  Package manager: {}", project.package_manager.to_string().cyan())?;
    if project.is_monorepo {
        writeln!(writer, "  Monorepo layout detected")?;
    }

    if project.storybook_dirs.is_empty() {
        return Err(anyhow!(
            "No Storybook configuration directory found under {}",
            root.display()
        ));
    }

    let config_dir = if project.storybook_dirs.len() == 1 {
        rel_to_root(&root, &project.storybook_dirs[0])
    } else {
        let choices: Vec<Choice> = project
            .storybook_dirs
            .iter()
            .map(|dir| {
                let rel = rel_to_root(&root, dir);
                Choice::new(rel.clone(), rel)
            })
            .collect();
        prompter.select("Which Storybook configuration directory is this project's?", &choices)?
    };
    let base_dir = rel_to_root(
        &root,
        PathBuf::from(&config_dir).parent().unwrap_or_else(|| Path::new(".")),
    );

    let config_path = root.join(CONFIG_FILE_NAME);
    let mut settings = load_config(&config_path);

    let project_id =
        prompter.text("Project identifier", settings.project_id.as_deref())?;
    let build_dir = prompter.text("Storybook build directory", Some(&project.build_dir))?;
    let externals_default = settings.externals.join(", ");
    let externals_answer = prompter.text(
        "External asset patterns excluded from dependency tracing (comma separated)",
        Some(&externals_default),
    )?;
    let only_changed = prompter.confirm(
        "Test only stories affected by each change?",
        settings.only_changed.unwrap_or(true),
    )?;

    settings.project_id = Some(project_id);
    settings.base_dir = Some(base_dir);
    settings.config_dir = Some(config_dir);
    settings.build_dir = Some(build_dir);
    settings.externals = externals_answer
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    settings.only_changed = Some(only_changed);

    let write_it =
        prompter.confirm(&format!("Write {}?", CONFIG_FILE_NAME), true)?;
    if !write_it {
        writeln!(writer, "{} Skipped writing {}.", "●".bright_blue(), CONFIG_FILE_NAME)?;
        writer.flush()?;
        return Ok(());
    }

    save_config(&config_path, &settings)?;
    writeln!(
        writer,
        "{} Wrote {}.",
        "✓".green().bold(),
        rel_to_root(&root, &config_path).bold()
    )?;
    writer.flush()?;
    Ok(())
}
