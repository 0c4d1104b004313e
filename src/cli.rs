use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "treelist",
    version,
    about = "Write a directory tree as a flat list of relative paths",
    after_help = "Examples:\n  treelist\n  treelist src -o src.txt\n  treelist ~/projects -L 1 -o projects.txt\n  treelist --interactive"
)]
pub struct Args {
    /// Directory to list (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output text file, overwritten on every run
    #[arg(short = 'o', long = "output", default_value = "tree.txt")]
    pub output: PathBuf,

    /// Max depth below the starting folder (0 = direct children only; unlimited if omitted)
    #[arg(short = 'L', long = "level")]
    pub max_depth: Option<usize>,

    /// List symbolic links as plain entries instead of following them
    #[arg(short = 'P', long = "no-follow")]
    pub no_follow: bool,

    /// Ask for output name, folder and depth instead of reading arguments
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["path", "output", "max_depth"]
    )]
    pub interactive: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.quiet {
            self.verbose = 0;
        }
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }

    /// Default log filter implied by `--quiet` / `--verbose`.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Directory containing the running executable, the default folder offered by the
/// interactive session. Falls back to the working directory.
pub fn tool_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_path_buf()))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
