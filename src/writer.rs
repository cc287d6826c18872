//! PXON output.
//!
//! Documents are serialized in full before anything touches the disk, then
//! written to a temporary file beside the target and renamed over it. A
//! failed save leaves any existing file as it was.

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::{PxonError, Result};
use crate::types::{Pixel, PxonDocument};

#[derive(Serialize)]
struct PxonFile<'a> {
    exif: Exif<'a>,
    pxif: Pxif,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Exif<'a> {
    software: &'a str,
    artist: &'a str,
    user_comment: &'a str,
    image_description: &'a str,
    copyright: &'a str,
    date_time: &'a str,
}

#[derive(Serialize)]
struct Pxif {
    pixels: Vec<PixelRecord>,
}

#[derive(Serialize)]
struct PixelRecord {
    x: u32,
    y: u32,
    color: String,
    time: i64,
}

impl PixelRecord {
    fn from_pixel(pixel: &Pixel) -> Result<Self> {
        let time = pixel.time().ok_or_else(|| {
            PxonError::timestamp(format!(
                "pixel at ({}, {}) has no time and cannot be saved",
                pixel.x(),
                pixel.y()
            ))
        })?;

        Ok(Self {
            x: pixel.x(),
            y: pixel.y(),
            color: pixel.colour().encode(),
            time,
        })
    }
}

/// Serialize a document to pretty-printed JSON.
///
/// Pixels are emitted in ascending time with colours in `rgba(r, g, b, 1)` form.
pub fn document_to_string(doc: &PxonDocument) -> Result<String> {
    let meta = doc.metadata();
    let pixels = doc
        .pixels()
        .iter()
        .map(PixelRecord::from_pixel)
        .collect::<Result<Vec<_>>>()?;

    let file = PxonFile {
        exif: Exif {
            software: &meta.software,
            artist: &meta.artist,
            user_comment: &meta.user_comment,
            image_description: &meta.image_description,
            copyright: &meta.copyright,
            date_time: &meta.date_time,
        },
        pxif: Pxif { pixels },
    };

    serde_json::to_string_pretty(&file).map_err(|e| PxonError::Serialize {
        message: e.to_string(),
    })
}

/// Write a document to `path`, replacing it atomically.
pub fn save_document(doc: &PxonDocument, path: &Path) -> Result<()> {
    let mut json = document_to_string(doc)?;
    json.push('\n');

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| PxonError::io(path, format!("Failed to create temporary file: {}", e)))?;

    // Keep the mode of the document being replaced.
    if let Ok(existing) = std::fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| PxonError::io(path, format!("Failed to copy permissions: {}", e)))?;
        }
    }

    tmp.write_all(json.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| PxonError::io(path, format!("Failed to write document: {}", e)))?;

    tmp.persist(path)
        .map_err(|e| PxonError::io(path, format!("Failed to replace document: {}", e.error)))?;

    tracing::debug!(path = %path.display(), pixels = doc.pixels().len(), "saved document");
    Ok(())
}
