//! Play command implementation.
//!
//! Prints one `set_pixel` line per pixel in time order, optionally pacing
//! the output by the recorded delays.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;

use crate::config::Defaults;
use crate::error::{PxonError, Result};
use crate::output::{display_path, plural, Printer};
use crate::playback::Playback;
use crate::types::PxonDocument;

/// Replay a document's pixels in time order
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Document to replay
    pub file: PathBuf,

    /// Wait between pixels as long as the artist did
    #[arg(long)]
    pub realtime: bool,
}

pub fn run(args: PlayArgs, defaults: &Defaults, printer: &Printer) -> Result<()> {
    let stdout = std::io::stdout();
    run_to(args, defaults, printer, &mut stdout.lock())
}

pub fn run_to(
    args: PlayArgs,
    defaults: &Defaults,
    printer: &Printer,
    out: &mut impl Write,
) -> Result<()> {
    let doc = PxonDocument::load_with(&args.file, defaults)?;

    if args.realtime {
        let total = Playback::duration(doc.pixels());
        printer.info(
            "Playing",
            &format!("{} over {:.1}s", display_path(&args.file), total.as_secs_f64()),
        );
    }

    for frame in Playback::new(doc.pixels()) {
        if args.realtime && !frame.delay.is_zero() {
            out.flush().map_err(PxonError::output)?;
            std::thread::sleep(frame.delay);
        }

        let [r, g, b] = frame.pixel.colour().to_rgb();
        writeln!(
            out,
            "set_pixel({}, {}, ({}, {}, {}))",
            frame.pixel.x(),
            frame.pixel.y(),
            r,
            g,
            b
        )
        .map_err(PxonError::output)?;
    }

    printer.success("Played", &plural(doc.pixels().len(), "pixel", "pixels"));
    Ok(())
}
