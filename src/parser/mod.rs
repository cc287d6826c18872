//! Parser for PXON documents.
//!
//! A PXON file is a JSON object with exactly two sections:
//! - `exif` - image metadata, every field a string or null
//! - `pxif` - a `pixels` array of `{x, y, color, time}` records
//!
//! Parsing is all-or-nothing: the first invalid field aborts the load and no
//! partially populated document is returned.
//!
//! # Usage
//!
//! ```ignore
//! use pxon::parser::parse_document;
//!
//! let source = std::fs::read_to_string("gallery.pxon")?;
//! let doc = parse_document(&source, &Defaults::default())?;
//!
//! for pixel in doc.ordered_pixels() {
//!     println!("{:?}", pixel);
//! }
//! ```

mod document;
mod exif;

pub use document::{load_document, parse_document, parse_reader, parse_value};
pub use exif::{RawExif, EXIF_FIELDS};
