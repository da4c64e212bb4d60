use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// One option in a selection prompt.
#[derive(Debug, Clone)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Choice { label: label.into(), value: value.into() }
    }
}

/// Interactive question-asking capability, injected so the init flow can be
/// driven by a terminal in production and by scripted answers in tests.
pub trait Prompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Prompter backed by stdin/stdout.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).context("Failed to read from stdin")?;
        Ok(line.trim().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        let mut stdout = io::stdout().lock();
        loop {
            writeln!(stdout, "{} {}", "?".cyan().bold(), message.bold())?;
            for (idx, choice) in choices.iter().enumerate() {
                writeln!(stdout, "  {}. {}", (idx + 1).to_string().cyan(), choice.label)?;
            }
            write!(stdout, "{} ", ">".dimmed())?;
            stdout.flush()?;

            let answer = self.read_line()?;
            if let Ok(n) = answer.parse::<usize>()
                && n >= 1
                && n <= choices.len()
            {
                return Ok(choices[n - 1].value.clone());
            }
            writeln!(stdout, "{}", "Please enter one of the listed numbers.".yellow())?;
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let mut stdout = io::stdout().lock();
        let hint = if default { "Y/n" } else { "y/N" };
        write!(stdout, "{} {} {} ", "?".cyan().bold(), message.bold(), format!("({hint})").dimmed())?;
        stdout.flush()?;

        let answer = self.read_line()?.to_lowercase();
        Ok(match answer.as_str() {
            "" => default,
            "y" | "yes" => true,
            _ => false,
        })
    }

    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut stdout = io::stdout().lock();
        match default {
            Some(d) => write!(
                stdout,
                "{} {} {} ",
                "?".cyan().bold(),
                message.bold(),
                format!("({d})").dimmed()
            )?,
            None => write!(stdout, "{} {} ", "?".cyan().bold(), message.bold())?,
        }
        stdout.flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            return Ok(default.unwrap_or("").to_string());
        }
        Ok(answer)
    }
}

/// A scripted answer for [`ScriptedPrompter`].
#[derive(Debug, Clone)]
pub enum Answer {
    Select(String),
    Confirm(bool),
    Text(String),
}

/// Prompter that replays a fixed answer script; used by tests and available
/// for non-interactive automation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
}

impl ScriptedPrompter {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        ScriptedPrompter { answers: answers.into_iter().collect() }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, choices: &[Choice]) -> Result<String> {
        match self.answers.pop_front() {
            Some(Answer::Select(value)) => {
                if !choices.iter().any(|c| c.value == value) {
                    return Err(anyhow!("Scripted answer '{}' is not a choice", value));
                }
                Ok(value)
            }
            other => Err(anyhow!("Unexpected select prompt '{}' (next answer: {:?})", message, other)),
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> Result<bool> {
        match self.answers.pop_front() {
            Some(Answer::Confirm(v)) => Ok(v),
            other => Err(anyhow!("Unexpected confirm prompt '{}' (next answer: {:?})", message, other)),
        }
    }

    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        match self.answers.pop_front() {
            Some(Answer::Text(v)) => {
                if v.is_empty() {
                    return Ok(default.unwrap_or("").to_string());
                }
                Ok(v)
            }
            other => Err(anyhow!("Unexpected text prompt '{}' (next answer: {:?})", message, other)),
        }
    }
}
