pub mod fmt;
pub mod info;
pub mod new;
pub mod paint;
pub mod play;

use std::path::PathBuf;

use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::config::Defaults;
use crate::error::Result;

/// pxon - Read, write and replay PXON pixel-art documents
#[derive(Parser, Debug)]
#[command(name = "pxon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Defaults file (default: ./pxon.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty document
    New(new::NewArgs),

    /// Show a document's metadata and pixel summary
    Info(info::InfoArgs),

    /// Paint a pixel into a document at the current time
    Paint(paint::PaintArgs),

    /// Rewrite a document in canonical form
    Fmt(fmt::FmtArgs),

    /// Replay a document's pixels in time order
    Play(play::PlayArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Write a completion script for `shell`.
    pub fn write_completions(shell: Shell, out: &mut impl std::io::Write) {
        let mut cmd = Self::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, out);
    }

    /// Defaults from `--config`, else pxon.yaml in the working directory,
    /// else built-in defaults.
    pub fn defaults(&self) -> Result<Defaults> {
        match &self.config {
            Some(path) => Defaults::load(path),
            None => match Defaults::find(std::path::Path::new(".")) {
                Some(path) => Defaults::load(&path),
                None => Ok(Defaults::default()),
            },
        }
    }
}
