//! The PXON document: image metadata plus time-ordered pixels.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::clock::{Clock, SystemClock};
use crate::config::Defaults;
use crate::error::{PxonError, Result};

use super::{Pixel, PixelTimeIndex};

/// Format written to `exif.dateTime`, e.g. `2018-02-23T18:09:51.761000`.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Format accepted when reading `exif.dateTime`. Any number of fractional
/// digits is accepted, including none.
const DATE_TIME_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Format a creation instant for `exif.dateTime`.
pub fn format_date_time(instant: NaiveDateTime) -> String {
    instant.format(DATE_TIME_FORMAT).to_string()
}

/// Parse an `exif.dateTime` value.
pub fn parse_date_time(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATE_TIME_PARSE_FORMAT).map_err(|e| {
        PxonError::InvalidTimestamp {
            message: format!("cannot parse dateTime '{}': {}", s, e),
            help: Some("Expected a timestamp like 2018-02-23T18:09:51.761".to_string()),
        }
    })
}

/// Image-level metadata, the `exif` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub software: String,
    pub artist: String,
    pub image_description: String,
    pub user_comment: String,
    pub copyright: String,
    pub date_time: String,
}

/// A PXON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PxonDocument {
    metadata: Metadata,
    pixels: PixelTimeIndex,
    /// Latest time handed out by `add` on this instance.
    last_stamp: Option<i64>,
}

impl PxonDocument {
    /// Start building a document.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Create an empty document for an artist.
    pub fn new(artist: impl Into<String>, defaults: &Defaults) -> Result<Self> {
        Self::builder().artist(artist).build(defaults)
    }

    /// Load a document from a file, filling missing metadata from `Defaults::default()`.
    pub fn load(path: &Path) -> Result<Self> {
        crate::parser::load_document(path, &Defaults::default())
    }

    /// Load a document from a file, filling missing metadata from `defaults`.
    pub fn load_with(path: &Path, defaults: &Defaults) -> Result<Self> {
        crate::parser::load_document(path, defaults)
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(source: &str) -> Result<Self> {
        crate::parser::parse_document(source, &Defaults::default())
    }

    /// Write the document to a file. The file is replaced atomically.
    pub fn save(&self, path: &Path) -> Result<()> {
        crate::writer::save_document(self, path)
    }

    /// Serialize the document to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        crate::writer::document_to_string(self)
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    pub fn pixels(&self) -> &PixelTimeIndex {
        &self.pixels
    }

    /// Pixels in ascending time order.
    pub fn ordered_pixels(&self) -> Vec<Pixel> {
        self.pixels.ordered_pixels()
    }

    /// The parsed creation instant.
    pub fn created_at(&self) -> Result<NaiveDateTime> {
        parse_date_time(&self.metadata.date_time)
    }

    /// Paint a pixel now, stamping it with the milliseconds elapsed since
    /// the document was created. Returns the stamped time.
    pub fn add(&mut self, pixel: Pixel) -> Result<i64> {
        self.add_with(pixel, &SystemClock)
    }

    /// Paint a pixel, reading "now" from `clock`.
    ///
    /// Each stamp lands after the previous one issued by this instance, so a
    /// clock that stalls or steps backward cannot overwrite pixels added
    /// earlier in the session. Loaded pixels do not constrain the stamp.
    pub fn add_with(&mut self, mut pixel: Pixel, clock: &impl Clock) -> Result<i64> {
        let created = self.created_at()?;
        let elapsed = elapsed_millis(created, clock.now());

        let time = match self.last_stamp {
            Some(last) if elapsed <= last => last.saturating_add(1),
            _ => elapsed,
        };

        pixel.set_time(time);
        if self.pixels.insert(pixel)?.is_some() {
            tracing::debug!(time, "live pixel replaced a pixel with the same time");
        }
        self.last_stamp = Some(time);
        tracing::debug!(x = pixel.x(), y = pixel.y(), time, "added pixel");
        Ok(time)
    }
}

/// Milliseconds from `from` to `to`, rounded to the nearest millisecond.
fn elapsed_millis(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let delta = to - from;
    match delta.num_microseconds() {
        Some(us) => (us + 500).div_euclid(1000),
        None => delta.num_milliseconds(),
    }
}

/// Builder for documents.
///
/// Empty `software`, `copyright` and `date_time` values count as unset and
/// fall back to the defaults.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    software: Option<String>,
    artist: Option<String>,
    image_description: Option<String>,
    user_comment: Option<String>,
    copyright: Option<String>,
    date_time: Option<String>,
    pixels: Option<PixelTimeIndex>,
}

impl DocumentBuilder {
    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn software(mut self, software: impl Into<String>) -> Self {
        self.software = Some(software.into());
        self
    }

    pub fn image_description(mut self, description: impl Into<String>) -> Self {
        self.image_description = Some(description.into());
        self
    }

    pub fn user_comment(mut self, comment: impl Into<String>) -> Self {
        self.user_comment = Some(comment.into());
        self
    }

    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    pub fn date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = Some(date_time.into());
        self
    }

    pub fn pixels(mut self, pixels: PixelTimeIndex) -> Self {
        self.pixels = Some(pixels);
        self
    }

    /// Build the document, applying defaults to anything left unset.
    pub fn build(self, defaults: &Defaults) -> Result<PxonDocument> {
        let artist = self.artist.ok_or_else(|| PxonError::InvalidArgument {
            message: "artist is required".to_string(),
            help: Some("Every PXON document names its artist".to_string()),
        })?;

        let created = defaults.creation_instant();

        let software = non_empty(self.software).unwrap_or_else(|| defaults.software.clone());
        let copyright =
            non_empty(self.copyright).unwrap_or_else(|| defaults.copyright_for(&artist, created));
        let date_time = non_empty(self.date_time).unwrap_or_else(|| format_date_time(created));

        Ok(PxonDocument {
            metadata: Metadata {
                software,
                artist,
                image_description: self.image_description.unwrap_or_default(),
                user_comment: self.user_comment.unwrap_or_default(),
                copyright,
                date_time,
            },
            pixels: self.pixels.unwrap_or_default(),
            last_stamp: None,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
