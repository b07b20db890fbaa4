use std::io;
use std::path::PathBuf;

/// Errors that can occur while building, writing or reading a GAV record
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Module coordinate is missing")]
    MissingCoordinate,

    #[error("Descriptor path is missing")]
    MissingDescriptorPath,

    #[error("Descriptor path is not absolute: {}", .0.display())]
    RelativeDescriptorPath(PathBuf),

    #[error("Descriptor path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),

    #[error("Invalid coordinate '{0}', expected <group>:<artifact>:<version>")]
    InvalidCoordinate(String),

    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for gav-reader operations
pub type Result<T> = std::result::Result<T, Error>;
