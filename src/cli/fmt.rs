//! Fmt command implementation.
//!
//! Rewrites a document in canonical form: pixels sorted by time and every
//! colour spelled `rgba(r, g, b, 1)`.

use std::path::PathBuf;

use clap::Args;

use crate::config::Defaults;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::types::PxonDocument;

/// Rewrite a document in canonical form
#[derive(Args, Debug)]
pub struct FmtArgs {
    /// Document to rewrite
    pub file: PathBuf,

    /// Write to this file instead of rewriting in place
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: FmtArgs, defaults: &Defaults, printer: &Printer) -> Result<()> {
    let doc = PxonDocument::load_with(&args.file, defaults)?;
    let target = args.output.as_ref().unwrap_or(&args.file);
    doc.save(target)?;

    printer.success(
        "Formatted",
        &format!(
            "{} ({})",
            display_path(target),
            plural(doc.pixels().len(), "pixel", "pixels")
        ),
    );
    Ok(())
}
