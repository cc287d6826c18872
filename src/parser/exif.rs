//! `exif` section validation.

use serde_json::{Map, Value};

use crate::error::{PxonError, Result};
use crate::types::json_kind;

/// Field names allowed in the `exif` section.
pub const EXIF_FIELDS: [&str; 6] = [
    "software",
    "artist",
    "imageDescription",
    "userComment",
    "copyright",
    "dateTime",
];

/// Metadata fields as read from a document. Absent and null fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawExif {
    pub software: Option<String>,
    pub artist: Option<String>,
    pub image_description: Option<String>,
    pub user_comment: Option<String>,
    pub copyright: Option<String>,
    pub date_time: Option<String>,
}

impl RawExif {
    /// Validate an `exif` object.
    ///
    /// The object may hold at most the six known fields, each a string or
    /// null. Unknown fields are rejected.
    pub fn from_value(value: &Value) -> Result<Self> {
        let exif = value.as_object().ok_or_else(|| PxonError::InvalidMetadata {
            message: format!("exif must be an object, found {}", json_kind(value)),
            help: None,
        })?;

        if exif.len() > EXIF_FIELDS.len() {
            return Err(PxonError::InvalidMetadata {
                message: format!(
                    "exif has {} fields, at most {} are allowed",
                    exif.len(),
                    EXIF_FIELDS.len()
                ),
                help: Some(format!("Allowed fields: {}", EXIF_FIELDS.join(", "))),
            });
        }

        if let Some(unknown) = exif.keys().find(|k| !EXIF_FIELDS.contains(&k.as_str())) {
            return Err(PxonError::InvalidMetadata {
                message: format!("unknown exif field '{}'", unknown),
                help: Some(format!("Allowed fields: {}", EXIF_FIELDS.join(", "))),
            });
        }

        Ok(Self {
            software: string_field(exif, "software")?,
            artist: string_field(exif, "artist")?,
            image_description: string_field(exif, "imageDescription")?,
            user_comment: string_field(exif, "userComment")?,
            copyright: string_field(exif, "copyright")?,
            date_time: string_field(exif, "dateTime")?,
        })
    }
}

fn string_field(exif: &Map<String, Value>, name: &str) -> Result<Option<String>> {
    match exif.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(PxonError::metadata(format!(
            "exif.{} must be a string or null, found {}",
            name,
            json_kind(other)
        ))),
    }
}
