//! Interactive front end: asks for output name, folder and depth, then hands off to
//! the collector and writer.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::tree::{build_path_list, CollectConfig, PathCollector};
use crate::writer::write_path_list;

/// Output file name offered when the user just presses enter.
pub const DEFAULT_OUTPUT_NAME: &str = "tree.txt";

/// Path lists longer than this need an explicit yes before they are written.
pub const CONFIRM_THRESHOLD: usize = 1000;

/// Answers gathered from the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub output: PathBuf,
    pub root: PathBuf,
    pub max_depth: usize,
}

/// How an interactive run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The list was written to `path`.
    Written { path: PathBuf, count: usize },
    /// The user declined to write a large list.
    Aborted { count: usize },
}

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Print `message` on its own line.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("failed to write to terminal")
    }

    /// Ask one question. Blank input and end of input both pick `default`.
    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        write!(self.output, "{question} [{default}]: ").context("failed to write prompt")?;
        self.output.flush().context("failed to write prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read answer")?;
        let answer = line.trim();
        if read == 0 || answer.is_empty() {
            return Ok(default.to_string());
        }
        Ok(answer.to_string())
    }

    /// Run the three configuration prompts.
    pub fn gather(&mut self, default_root: &Path) -> Result<SessionConfig> {
        let output = self.ask("Output file name", DEFAULT_OUTPUT_NAME)?;
        let root = self.ask("Directory to list", &default_root.display().to_string())?;
        let depth = self.ask("Maximum depth (0 = direct children only)", "0")?;

        Ok(SessionConfig {
            output: normalize_output_name(&output),
            root: PathBuf::from(root),
            max_depth: parse_depth(&depth),
        })
    }

    /// Ask whether a list of `count` paths should still be written.
    pub fn confirm_large(&mut self, count: usize) -> Result<bool> {
        write!(self.output, "Found {count} paths. Write them anyway? [y/N]: ")
            .context("failed to write prompt")?;
        self.output.flush().context("failed to write prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("failed to read answer")?;
        let answer = line.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}

/// Append `.txt` unless the name already ends with it (any case).
pub fn normalize_output_name(raw: &str) -> PathBuf {
    let name = raw.trim();
    let name = if name.is_empty() {
        DEFAULT_OUTPUT_NAME
    } else {
        name
    };
    if name.to_lowercase().ends_with(".txt") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{name}.txt"))
    }
}

/// Parse a depth answer; anything non-numeric or negative becomes 0.
pub fn parse_depth(raw: &str) -> usize {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => usize::try_from(n).unwrap_or(usize::MAX),
        _ => 0,
    }
}

/// Prompt, collect, confirm if the list is large, then write.
pub fn run_session<C, R, W>(
    collector: &C,
    prompter: &mut Prompter<R, W>,
    default_root: &Path,
) -> Result<SessionOutcome>
where
    C: PathCollector + ?Sized,
    R: BufRead,
    W: Write,
{
    let config = prompter.gather(default_root)?;
    info!(
        "listing {} to depth {} into {}",
        config.root.display(),
        config.max_depth,
        config.output.display()
    );

    let collect_config = CollectConfig::with_depth(config.max_depth);
    let entries = collector.collect(&config.root, &collect_config)?;
    let paths = build_path_list(&entries);
    let count = paths.len();

    if count > CONFIRM_THRESHOLD && !prompter.confirm_large(count)? {
        prompter.say("Aborted, nothing written.")?;
        return Ok(SessionOutcome::Aborted { count });
    }

    let path = write_path_list(&paths, &config.output)?;
    prompter.say(&format!("Saved {count} paths to {}", path.display()))?;
    Ok(SessionOutcome::Written { path, count })
}
