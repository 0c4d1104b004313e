#![forbid(unsafe_code)]
//! Writes shell completions and the `treelist(1)` man page.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`). Files land in
//! `OUT_DIR/completions/` and `OUT_DIR/man/man1/`, ready to copy under a prefix.

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;
use treelist::cli::Args;

const BIN_NAME: &str = "treelist";

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man").join("man1");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("{}: cannot create", dir.display()))?;
    }

    let mut written = Vec::new();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
        let mut cmd = Args::command();
        written.push(generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)?);
    }

    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    let mut page = Vec::new();
    Man::new(Args::command()).render(&mut page)?;
    fs::write(&man_path, page).with_context(|| format!("{}: cannot write", man_path.display()))?;
    written.push(man_path);

    for path in &written {
        eprintln!("{BIN_NAME} assets: {}", path.display());
    }
    Ok(())
}
