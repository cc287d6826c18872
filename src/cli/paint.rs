//! Paint command implementation.
//!
//! Loads a document, paints one live pixel stamped with the time elapsed
//! since the document's creation, and saves it back. The pixel must land on
//! the canvas, since the saved file is read back with canvas bounds.

use std::path::PathBuf;

use clap::Args;

use crate::config::Defaults;
use crate::error::{PxonError, Result};
use crate::output::{display_path, Printer};
use crate::types::{Colour, Pixel, PxonDocument, CANVAS_MAX};

/// Paint a pixel into a document at the current time
#[derive(Args, Debug)]
pub struct PaintArgs {
    /// Document to paint into
    pub file: PathBuf,

    /// X coordinate
    #[arg(allow_negative_numbers = true)]
    pub x: i64,

    /// Y coordinate
    #[arg(allow_negative_numbers = true)]
    pub y: i64,

    /// Colour: rgba(r, g, b, a), #rrggbb, or a colour name
    pub color: String,
}

pub fn run(args: PaintArgs, defaults: &Defaults, printer: &Printer) -> Result<()> {
    let colour = Colour::decode(&args.color)?;
    let pixel = Pixel::live(args.x, args.y, colour)?;
    if pixel.x() > CANVAS_MAX || pixel.y() > CANVAS_MAX {
        return Err(PxonError::InvalidGeometry {
            message: format!("({}, {}) is outside the canvas", args.x, args.y),
            help: Some(format!("Saved canvases run from 0 to {}", CANVAS_MAX)),
        });
    }

    let mut doc = PxonDocument::load_with(&args.file, defaults)?;
    let time = doc.add(pixel)?;
    doc.save(&args.file)?;

    printer.status(
        "Painted",
        &format!(
            "({}, {}) {} at {}ms in {}",
            args.x,
            args.y,
            colour,
            time,
            display_path(&args.file)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_document(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("gallery.pxon");
        PxonDocument::new("Nick Young", &Defaults::default())
            .unwrap()
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_paint_rejects_off_canvas() {
        let dir = tempdir().unwrap();
        let path = new_document(dir.path());
        let before = std::fs::read_to_string(&path).unwrap();

        let args = PaintArgs {
            file: path.clone(),
            x: 300,
            y: 4,
            color: "magenta".to_string(),
        };
        let err = run(args, &Defaults::default(), &Printer::new()).unwrap_err();

        assert!(matches!(err, PxonError::InvalidGeometry { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_paint_on_canvas_round_trips() {
        let dir = tempdir().unwrap();
        let path = new_document(dir.path());

        let args = PaintArgs {
            file: path.clone(),
            x: 10,
            y: 20,
            color: "#cc9999".to_string(),
        };
        run(args, &Defaults::default(), &Printer::new()).unwrap();

        let doc = PxonDocument::load(&path).unwrap();
        let pixels = doc.ordered_pixels();
        assert_eq!(pixels.len(), 1);
        assert_eq!(pixels[0].colour(), Colour::rgb(204, 153, 153));
        assert!(pixels[0].time().unwrap() >= 0);
    }

    #[test]
    fn test_paint_rejects_bad_colour_without_touching_file() {
        let dir = tempdir().unwrap();
        let path = new_document(dir.path());
        let before = std::fs::read_to_string(&path).unwrap();

        let args = PaintArgs {
            file: path.clone(),
            x: 1,
            y: 1,
            color: "blurple".to_string(),
        };
        let err = run(args, &Defaults::default(), &Printer::new()).unwrap_err();

        assert!(matches!(err, PxonError::InvalidColor { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_paint_rejects_negative_coordinate() {
        let dir = tempdir().unwrap();
        let path = new_document(dir.path());

        let args = PaintArgs {
            file: path,
            x: -1,
            y: 1,
            color: "red".to_string(),
        };
        let err = run(args, &Defaults::default(), &Printer::new()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidGeometry { .. }));
    }
}
