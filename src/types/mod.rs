//! Core domain types for pxon.
//!
//! This module contains the fundamental types of the format:
//! - `Colour` - RGB colour values and the colour codec
//! - `Pixel` - A time-stamped pixel
//! - `PixelTimeIndex` - Pixels ordered by time
//! - `PxonDocument` - Metadata plus pixels

mod colour;
mod document;
mod pixel;
mod timeline;

pub use colour::Colour;
pub use document::{
    format_date_time, parse_date_time, DocumentBuilder, Metadata, PxonDocument, DATE_TIME_FORMAT,
};
pub use pixel::{Pixel, CANVAS_MAX};
pub use timeline::{time_key, PixelTimeIndex, TIME_KEY_WIDTH};

pub(crate) use pixel::json_kind;
