//! Error type for the fallible parts of the crate.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FreeRulerError {
    /// Reading or writing the prefs file failed.
    Io(io::Error),
    /// The prefs file is not valid JSON for [`Prefs`](crate::model::Prefs).
    Json(serde_json::Error),
    /// The platform reports no user config directory.
    NoConfigDir,
    /// A windowing class or object could not be created.
    Platform(&'static str),
}

pub type Result<T> = std::result::Result<T, FreeRulerError>;

impl fmt::Display for FreeRulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeRulerError::Io(e) => write!(f, "I/O error: {}", e),
            FreeRulerError::Json(e) => write!(f, "Invalid prefs file: {}", e),
            FreeRulerError::NoConfigDir => write!(f, "No user config directory available"),
            FreeRulerError::Platform(what) => write!(f, "Platform error: {}", what),
        }
    }
}

impl std::error::Error for FreeRulerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FreeRulerError::Io(e) => Some(e),
            FreeRulerError::Json(e) => Some(e),
            FreeRulerError::NoConfigDir | FreeRulerError::Platform(_) => None,
        }
    }
}

impl From<io::Error> for FreeRulerError {
    fn from(e: io::Error) -> Self {
        FreeRulerError::Io(e)
    }
}

impl From<serde_json::Error> for FreeRulerError {
    fn from(e: serde_json::Error) -> Self {
        FreeRulerError::Json(e)
    }
}
