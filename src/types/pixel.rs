//! A single time-stamped pixel.
//!
//! Pixels come from two places with different rules. Live pixels, painted
//! through [`PxonDocument::add`](super::PxonDocument::add), only need
//! non-negative coordinates and get their time from the document. Pixels
//! read from a saved canvas are bounded to the 256x256 canvas and must carry
//! their own integer time.

use serde_json::Value;

use crate::error::{PxonError, Result};

use super::Colour;

/// Largest coordinate a saved canvas may hold.
pub const CANVAS_MAX: u32 = 255;

/// Number of fields in a `pxif.pixels` entry.
const RECORD_FIELDS: usize = 4;

/// A pixel at an x/y position with an RGB colour and a time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pixel {
    x: u32,
    y: u32,
    colour: Colour,
    time: Option<i64>,
}

impl Pixel {
    /// Create a live pixel. Time is left unset until a document stamps it.
    ///
    /// Coordinates beyond the canvas are accepted here; only negative ones
    /// are rejected.
    pub fn live(x: i64, y: i64, colour: Colour) -> Result<Self> {
        Ok(Self {
            x: live_coordinate("x", x)?,
            y: live_coordinate("y", y)?,
            colour,
            time: None,
        })
    }

    /// Build a pixel from a `pxif.pixels` entry.
    ///
    /// The entry must be an object with exactly `x`, `y`, `color` and `time`.
    pub fn from_document(raw: &Value) -> Result<Self> {
        let record = raw.as_object().ok_or_else(|| PxonError::InvalidRecordShape {
            message: format!("expected an object, found {}", json_kind(raw)),
        })?;

        if record.len() != RECORD_FIELDS {
            return Err(PxonError::InvalidRecordShape {
                message: format!("expected {} fields, found {}", RECORD_FIELDS, record.len()),
            });
        }

        let x = canvas_coordinate("x", record.get("x"))?;
        let y = canvas_coordinate("y", record.get("y"))?;

        let colour = match record.get("color") {
            Some(Value::String(s)) => Colour::decode(s)?,
            Some(other) => {
                return Err(PxonError::colour(
                    &other.to_string(),
                    format!("expected a string, found {}", json_kind(other)),
                ))
            }
            None => return Err(PxonError::colour("", "missing 'color' field")),
        };

        let time = match record.get("time") {
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| {
                PxonError::timestamp(format!("time {} is not a 64-bit integer", n))
            })?,
            Some(other) => {
                return Err(PxonError::timestamp(format!(
                    "time must be an integer, found {}",
                    json_kind(other)
                )))
            }
            None => return Err(PxonError::timestamp("missing 'time' field")),
        };

        Ok(Self {
            x,
            y,
            colour,
            time: Some(time),
        })
    }

    /// Return this pixel with its time set.
    pub fn stamped(mut self, time: i64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }

    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Time in milliseconds since the document's creation, if stamped.
    pub fn time(&self) -> Option<i64> {
        self.time
    }

    pub(crate) fn set_time(&mut self, time: i64) {
        self.time = Some(time);
    }
}

fn live_coordinate(axis: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(PxonError::InvalidGeometry {
            message: format!("{} must be non-negative, got {}", axis, value),
            help: None,
        });
    }
    u32::try_from(value).map_err(|_| PxonError::InvalidGeometry {
        message: format!("{} = {} is too large", axis, value),
        help: None,
    })
}

fn canvas_coordinate(axis: &str, value: Option<&Value>) -> Result<u32> {
    let value = value.ok_or_else(|| PxonError::geometry(format!("missing '{}' field", axis)))?;

    let n = value
        .as_i64()
        .ok_or_else(|| PxonError::geometry(format!("{} must be an integer, found {}", axis, value)))?;

    if !(0..=CANVAS_MAX as i64).contains(&n) {
        return Err(PxonError::geometry(format!(
            "{} = {} is outside the canvas",
            axis, n
        )));
    }

    Ok(n as u32)
}

/// Short name of a JSON value's type for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
