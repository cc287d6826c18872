//! pxon - PXON pixel-art documents
//!
//! A codec and in-memory model for PXON: a JSON document pairing image
//! metadata (`exif`) with time-stamped pixels (`pxif`). Documents load with
//! strict validation, keep their pixels ordered by time, and save in a
//! canonical form.

pub mod cli;
pub mod clock;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod playback;
pub mod types;
pub mod writer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{Defaults, CONFIG_FILENAME};
pub use error::{PxonError, Result};
pub use parser::{load_document, parse_document};
pub use playback::{Frame, Playback};
pub use types::{
    time_key, Colour, DocumentBuilder, Metadata, Pixel, PixelTimeIndex, PxonDocument, CANVAS_MAX,
};
pub use writer::{document_to_string, save_document};
