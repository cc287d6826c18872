//! New command implementation.
//!
//! Creates an empty document and writes it to disk.

use std::path::PathBuf;

use clap::Args;

use crate::config::Defaults;
use crate::error::{PxonError, Result};
use crate::output::{display_path, Printer};
use crate::types::PxonDocument;

/// Create an empty document
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Document to create
    pub file: PathBuf,

    /// Artist name (default: `artist` from pxon.yaml)
    #[arg(long)]
    pub artist: Option<String>,

    /// Software name recorded in the document
    #[arg(long)]
    pub software: Option<String>,

    /// Image description
    #[arg(long)]
    pub description: Option<String>,

    /// User comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Copyright line (default: "<artist> <year>")
    #[arg(long)]
    pub copyright: Option<String>,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: NewArgs, defaults: &Defaults, printer: &Printer) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(PxonError::InvalidArgument {
            message: format!("{} already exists", display_path(&args.file)),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let mut builder = PxonDocument::builder();
    if let Some(artist) = args.artist.or_else(|| defaults.artist.clone()) {
        builder = builder.artist(artist);
    }
    if let Some(software) = args.software {
        builder = builder.software(software);
    }
    if let Some(description) = args.description {
        builder = builder.image_description(description);
    }
    if let Some(comment) = args.comment {
        builder = builder.user_comment(comment);
    }
    if let Some(copyright) = args.copyright {
        builder = builder.copyright(copyright);
    }

    let doc = builder.build(defaults)?;
    doc.save(&args.file)?;

    printer.success(
        "Created",
        &format!("{} by {}", display_path(&args.file), doc.metadata().artist),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(file: PathBuf) -> NewArgs {
        NewArgs {
            file,
            artist: Some("Nick Young".to_string()),
            software: None,
            description: None,
            comment: None,
            copyright: None,
            force: false,
        }
    }

    #[test]
    fn test_new_creates_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.pxon");

        run(args(path.clone()), &Defaults::default(), &Printer::new()).unwrap();

        let doc = PxonDocument::load(&path).unwrap();
        assert_eq!(doc.metadata().artist, "Nick Young");
        assert_eq!(doc.metadata().software, "pxon");
        assert!(doc.pixels().is_empty());
    }

    #[test]
    fn test_new_uses_artist_from_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.pxon");
        let defaults = Defaults {
            artist: Some("Jenn".to_string()),
            ..Default::default()
        };

        let mut a = args(path.clone());
        a.artist = None;
        run(a, &defaults, &Printer::new()).unwrap();

        assert_eq!(PxonDocument::load(&path).unwrap().metadata().artist, "Jenn");
    }

    #[test]
    fn test_new_without_artist_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.pxon");

        let mut a = args(path.clone());
        a.artist = None;
        let err = run(a, &Defaults::default(), &Printer::new()).unwrap_err();

        assert!(matches!(err, PxonError::InvalidArgument { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_new_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gallery.pxon");
        std::fs::write(&path, "keep me").unwrap();

        assert!(run(args(path.clone()), &Defaults::default(), &Printer::new()).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");

        let mut a = args(path.clone());
        a.force = true;
        run(a, &Defaults::default(), &Printer::new()).unwrap();
        assert!(PxonDocument::load(&path).is_ok());
    }
}
