//! Info command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Defaults;
use crate::error::{PxonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::PxonDocument;

/// Show a document's metadata and pixel summary
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Document to inspect
    pub file: PathBuf,
}

pub fn run(args: InfoArgs, defaults: &Defaults, printer: &Printer) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(args, defaults, printer, &mut stdout.lock())
}

pub fn run_to(
    args: InfoArgs,
    defaults: &Defaults,
    printer: &Printer,
    out: &mut impl Write,
) -> Result<()> {
    let doc = PxonDocument::load_with(&args.file, defaults)?;
    let meta = doc.metadata();

    let lines = [
        ("software", meta.software.as_str()),
        ("artist", meta.artist.as_str()),
        ("imageDescription", meta.image_description.as_str()),
        ("userComment", meta.user_comment.as_str()),
        ("copyright", meta.copyright.as_str()),
        ("dateTime", meta.date_time.as_str()),
    ];

    for (key, value) in lines {
        writeln!(out, "{}: {}", key, value).map_err(PxonError::output)?;
    }
    writeln!(out, "pixels: {}", doc.pixels().len()).map_err(PxonError::output)?;
    if let Some((first, last)) = doc.pixels().span() {
        writeln!(out, "time: {}ms to {}ms", first, last).map_err(PxonError::output)?;
    }

    printer.info(
        "Read",
        &format!(
            "{} ({})",
            display_path(&args.file),
            plural(doc.pixels().len(), "pixel", "pixels")
        ),
    );
    Ok(())
}
