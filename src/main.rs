#![forbid(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use treelist::cli::{self, Args};
use treelist::session::{run_session, Prompter, SessionOutcome};
use treelist::tree::{collect_paths, CollectConfig, WalkdirCollector};
use treelist::writer;

/// Environment variable holding an `EnvFilter` directive that overrides -v/-q.
const LOG_ENV: &str = "TREELIST_LOG";

fn main() {
    let args = Args::parse().validated();
    setup_tracing(&args);

    if let Err(e) = run_app(&args) {
        eprintln!("treelist: {e:#}");
        std::process::exit(1);
    }
}

fn setup_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}

fn run_app(args: &Args) -> Result<()> {
    if args.interactive {
        return run_interactive();
    }

    let config = CollectConfig {
        max_depth: args.max_depth,
        follow_symlinks: !args.no_follow,
    };
    let paths = collect_paths(&WalkdirCollector, &args.path, &config)?;
    let written = writer::write_path_list(&paths, &args.output)?;

    info!("wrote {} paths to {}", paths.len(), written.display());
    Ok(())
}

fn run_interactive() -> Result<()> {
    let default_root = cli::tool_dir();
    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    match run_session(&WalkdirCollector, &mut prompter, &default_root)? {
        SessionOutcome::Written { path, count } => {
            info!("wrote {} paths to {}", count, path.display());
        }
        SessionOutcome::Aborted { count } => {
            info!("declined to write {} paths", count);
        }
    }
    Ok(())
}
