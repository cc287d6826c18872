use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxon operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxonError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxon::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(pxon::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid geometry: {message}")]
    #[diagnostic(code(pxon::geometry))]
    InvalidGeometry {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid colour {input:?}: {message}")]
    #[diagnostic(
        code(pxon::colour),
        help("Use rgba(r, g, b, a), #rrggbb, or a named colour such as magenta")
    )]
    InvalidColor { input: String, message: String },

    #[error("Invalid timestamp: {message}")]
    #[diagnostic(code(pxon::timestamp))]
    InvalidTimestamp {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid pixel record: {message}")]
    #[diagnostic(
        code(pxon::record),
        help("Each pixel needs exactly x, y, color and time")
    )]
    InvalidRecordShape { message: String },

    #[error("Invalid document: {message}")]
    #[diagnostic(
        code(pxon::document),
        help("A PXON document has exactly two sections: exif and pxif")
    )]
    InvalidDocumentShape { message: String },

    #[error("Invalid metadata: {message}")]
    #[diagnostic(code(pxon::metadata))]
    InvalidMetadata {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to write output: {message}")]
    #[diagnostic(code(pxon::output))]
    Output { message: String },

    #[error("Failed to serialize document: {message}")]
    #[diagnostic(code(pxon::serialize))]
    Serialize { message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(pxon::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl PxonError {
    pub(crate) fn io(path: &std::path::Path, message: impl Into<String>) -> Self {
        PxonError::Io {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub(crate) fn output(err: std::io::Error) -> Self {
        PxonError::Output {
            message: err.to_string(),
        }
    }

    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        PxonError::InvalidGeometry {
            message: message.into(),
            help: Some("Canvas coordinates run from 0 to 255".to_string()),
        }
    }

    pub(crate) fn colour(input: &str, message: impl Into<String>) -> Self {
        PxonError::InvalidColor {
            input: input.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn timestamp(message: impl Into<String>) -> Self {
        PxonError::InvalidTimestamp {
            message: message.into(),
            help: None,
        }
    }

    pub(crate) fn metadata(message: impl Into<String>) -> Self {
        PxonError::InvalidMetadata {
            message: message.into(),
            help: None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PxonError>;
