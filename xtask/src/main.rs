//! Developer tasks for shortnames.
//!
//! Run with `cargo run -p xtask -- <task>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Developer tasks for shortnames")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Only generate for this shell (default: all)
        #[arg(long, value_enum)]
        shell: Option<Shell>,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Task::Man { out_dir } => man(&out_dir),
        Task::Completions { out_dir, shell } => completions(&out_dir, shell),
    }
}

fn man(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    clap_mangen::generate_to(shortnames::command(), out_dir)
        .context("failed to generate man pages")?;
    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn completions(out_dir: &Path, shell: Option<Shell>) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let shells = match shell {
        Some(shell) => vec![shell],
        None => vec![
            Shell::Bash,
            Shell::Elvish,
            Shell::Fish,
            Shell::PowerShell,
            Shell::Zsh,
        ],
    };

    let mut cmd = shortnames::command();
    for shell in shells {
        let path = clap_complete::generate_to(shell, &mut cmd, "shortnames", out_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        println!("{}", path.display());
    }
    Ok(())
}
