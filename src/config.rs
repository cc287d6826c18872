//! Document defaults (pxon.yaml).
//!
//! Defaults supply the metadata a new document gets when the caller leaves
//! it out: the software name, an optional fixed copyright line, and the
//! creation instant. They can be read from a `pxon.yaml` file.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::error::{PxonError, Result};

/// Defaults file name looked up in the working directory.
pub const CONFIG_FILENAME: &str = "pxon.yaml";

/// Default metadata for new documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    /// Value for `exif.software`.
    #[serde(default = "default_software")]
    pub software: String,

    /// Artist the CLI uses when `--artist` is omitted.
    pub artist: Option<String>,

    /// Fixed copyright line. When unset, `"<artist> <year>"` is used.
    pub copyright: Option<String>,

    /// Creation instant. When unset, the clock is read at creation time.
    #[serde(skip)]
    pub created_at: Option<NaiveDateTime>,
}

fn default_software() -> String {
    "pxon".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            software: default_software(),
            artist: None,
            copyright: None,
            created_at: None,
        }
    }
}

impl Defaults {
    /// Load defaults from a pxon.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PxonError::io(path, format!("Failed to read defaults: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse defaults from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| PxonError::Parse {
            message: format!("Invalid defaults: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })
    }

    /// Find pxon.yaml in a directory, if present.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILENAME);
        path.is_file().then_some(path)
    }

    /// Fix the creation instant.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// The creation instant, reading the system clock if none is fixed.
    pub fn creation_instant(&self) -> NaiveDateTime {
        self.created_at.unwrap_or_else(|| SystemClock.now())
    }

    /// Copyright line for an artist's work created at `created`.
    pub fn copyright_for(&self, artist: &str, created: NaiveDateTime) -> String {
        match &self.copyright {
            Some(c) if !c.is_empty() => c.clone(),
            _ => format!("{} {}", artist, created.year()),
        }
    }
}
