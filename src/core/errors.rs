//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for debug-decoders operations
///
/// Only the I/O shell produces these. Classification, naming, pairing and
/// assembly accept any input and never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The project manifest was not found where the project should be
    #[error("{manifest} did not exist at {}", .path.display())]
    ManifestNotFound { manifest: String, path: PathBuf },

    /// The interface extractor is not installed
    #[error("Unable to start {program}. Install it globally first: npm install -g {program}")]
    ExtractorMissing {
        program: String,
        #[source]
        source: Option<which::Error>,
    },

    /// The interface extractor ran but reported a failure
    #[error("{program} failed with exit code {}: {stderr}", .code.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ExtractorFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The extractor output was not the expected module list
    #[error("Could not read module interfaces: {0}")]
    InterfaceParse(#[source] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn manifest_not_found(manifest: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::ManifestNotFound {
            manifest: manifest.into(),
            path: path.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Exit status the process should terminate with for this error.
    ///
    /// Extractor failures propagate the extractor's own status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ExtractorFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).with_context(context))
    }
}
