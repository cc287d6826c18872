//! Whole-document parsing.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::config::Defaults;
use crate::error::{PxonError, Result};
use crate::types::{json_kind, Pixel, PixelTimeIndex, PxonDocument};

use super::exif::RawExif;

/// Load a document from a file.
pub fn load_document(path: &Path, defaults: &Defaults) -> Result<PxonDocument> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| PxonError::io(path, format!("Failed to read document: {}", e)))?;

    let doc = parse_document(&source, defaults)?;
    tracing::debug!(path = %path.display(), pixels = doc.pixels().len(), "loaded document");
    Ok(doc)
}

/// Parse a document from a JSON string.
pub fn parse_document(source: &str, defaults: &Defaults) -> Result<PxonDocument> {
    let value: Value = serde_json::from_str(source).map_err(|e| PxonError::Parse {
        message: format!("Invalid JSON: {}", e),
        help: None,
    })?;

    parse_value(&value, defaults)
}

/// Parse a document from a reader.
pub fn parse_reader(mut reader: impl Read, defaults: &Defaults) -> Result<PxonDocument> {
    let mut source = String::new();
    reader.read_to_string(&mut source).map_err(|e| PxonError::Parse {
        message: format!("Failed to read document: {}", e),
        help: None,
    })?;

    parse_document(&source, defaults)
}

/// Build a document from an already-parsed JSON value.
pub fn parse_value(value: &Value, defaults: &Defaults) -> Result<PxonDocument> {
    let root = value.as_object().ok_or_else(|| PxonError::InvalidDocumentShape {
        message: format!("expected an object, found {}", json_kind(value)),
    })?;

    if root.len() != 2 {
        return Err(PxonError::InvalidDocumentShape {
            message: format!("expected 2 top-level sections, found {}", root.len()),
        });
    }

    let (exif, pxif) = match (root.get("exif"), root.get("pxif")) {
        (Some(exif), Some(pxif)) => (exif, pxif),
        _ => {
            let keys: Vec<&str> = root.keys().map(|k| k.as_str()).collect();
            return Err(PxonError::InvalidDocumentShape {
                message: format!("expected exif and pxif sections, found {}", keys.join(", ")),
            });
        }
    };

    let exif = RawExif::from_value(exif)?;
    let pixels = parse_pixels(pxif)?;

    let mut builder = PxonDocument::builder().pixels(pixels);
    if let Some(artist) = exif.artist {
        builder = builder.artist(artist);
    }
    if let Some(software) = exif.software {
        builder = builder.software(software);
    }
    if let Some(description) = exif.image_description {
        builder = builder.image_description(description);
    }
    if let Some(comment) = exif.user_comment {
        builder = builder.user_comment(comment);
    }
    if let Some(copyright) = exif.copyright {
        builder = builder.copyright(copyright);
    }
    if let Some(date_time) = exif.date_time {
        builder = builder.date_time(date_time);
    }

    builder.build(defaults)
}

/// Read `pxif.pixels` into a fresh time index.
fn parse_pixels(pxif: &Value) -> Result<PixelTimeIndex> {
    let entries = pxif
        .get("pixels")
        .and_then(Value::as_array)
        .ok_or_else(|| PxonError::InvalidDocumentShape {
            message: "pxif must be an object with a pixels array".to_string(),
        })?;

    let mut index = PixelTimeIndex::new();
    for (i, entry) in entries.iter().enumerate() {
        let pixel = Pixel::from_document(entry).map_err(|e| with_pixel_context(i, e))?;
        tracing::trace!(index = i, time = ?pixel.time(), "parsed pixel");
        index.insert(pixel)?;
    }

    if index.len() < entries.len() {
        tracing::debug!(
            entries = entries.len(),
            kept = index.len(),
            "pixels with equal times collapsed"
        );
    }

    Ok(index)
}

/// Prefix a pixel error with the entry's position in `pxif.pixels`.
fn with_pixel_context(i: usize, err: PxonError) -> PxonError {
    let at = |message: String| format!("pixels[{}]: {}", i, message);
    match err {
        PxonError::InvalidGeometry { message, help } => PxonError::InvalidGeometry {
            message: at(message),
            help,
        },
        PxonError::InvalidColor { input, message } => PxonError::InvalidColor {
            input,
            message: at(message),
        },
        PxonError::InvalidTimestamp { message, help } => PxonError::InvalidTimestamp {
            message: at(message),
            help,
        },
        PxonError::InvalidRecordShape { message } => PxonError::InvalidRecordShape {
            message: at(message),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use serde_json::json;

    fn example() -> Value {
        json!({
            "exif": {
                "software": "pxon.py",
                "artist": "Nick Young",
                "imageDescription": "drawing a blank",
                "userComment": "Some comment",
                "copyright": "Nick Young 2018",
                "dateTime": "2018-02-23T18:09:51.761"
            },
            "pxif": {
                "pixels": [
                    {"x": 35, "y": 25, "color": "magenta", "time": 1000},
                    {"x": 15, "y": 15, "color": "rgba(0, 0, 0, 1)", "time": 0},
                    {"x": 45, "y": 45, "color": "#cc9999", "time": 500}
                ]
            }
        })
    }

    #[test]
    fn test_parse_example() {
        let doc = parse_value(&example(), &Defaults::default()).unwrap();
        let meta = doc.metadata();

        assert_eq!(meta.software, "pxon.py");
        assert_eq!(meta.artist, "Nick Young");
        assert_eq!(meta.date_time, "2018-02-23T18:09:51.761");

        let pixels = doc.ordered_pixels();
        let times: Vec<Option<i64>> = pixels.iter().map(|p| p.time()).collect();
        assert_eq!(times, vec![Some(0), Some(500), Some(1000)]);
        assert_eq!(pixels[2].colour(), Colour::MAGENTA);
    }

    #[test]
    fn test_three_sections_rejected() {
        let mut value = example();
        value["extra"] = json!({});
        let err = parse_value(&value, &Defaults::default()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidDocumentShape { .. }));
    }

    #[test]
    fn test_wrong_section_names_rejected() {
        let value = json!({"exif": {"artist": "A"}, "pixels": []});
        let err = parse_value(&value, &Defaults::default()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidDocumentShape { .. }));
    }

    #[test]
    fn test_missing_pixels_array_rejected() {
        let value = json!({"exif": {"artist": "A"}, "pxif": {"pixels": {}}});
        let err = parse_value(&value, &Defaults::default()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidDocumentShape { .. }));
    }

    #[test]
    fn test_null_artist_rejected() {
        let value = json!({"exif": {"artist": null}, "pxif": {"pixels": []}});
        let err = parse_value(&value, &Defaults::default()).unwrap_err();
        assert!(matches!(err, PxonError::InvalidArgument { .. }));
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let value = json!({
            "exif": {
                "software": null,
                "artist": "Jenn",
                "imageDescription": null,
                "userComment": null,
                "copyright": null,
                "dateTime": "2018-02-23T18:09:51.761"
            },
            "pxif": {"pixels": []}
        });
        let doc = parse_value(&value, &Defaults::default()).unwrap();

        assert_eq!(doc.metadata().software, "pxon");
        assert_eq!(doc.metadata().image_description, "");
        assert_eq!(doc.metadata().copyright.split(' ').next(), Some("Jenn"));
    }

    #[test]
    fn test_bad_pixel_reports_position() {
        let mut value = example();
        value["pxif"]["pixels"][1]["x"] = json!(300);
        let err = parse_value(&value, &Defaults::default()).unwrap_err();

        match err {
            PxonError::InvalidGeometry { message, .. } => assert!(message.starts_with("pixels[1]")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_document("{ not json", &Defaults::default()).unwrap_err();
        assert!(matches!(err, PxonError::Parse { .. }));
    }

    #[test]
    fn test_parse_reader() {
        let source = example().to_string();
        let doc = parse_reader(source.as_bytes(), &Defaults::default()).unwrap();
        assert_eq!(doc.pixels().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_document(Path::new("/nonexistent/gallery.pxon"), &Defaults::default())
            .unwrap_err();
        assert!(matches!(err, PxonError::Io { .. }));
    }
}
