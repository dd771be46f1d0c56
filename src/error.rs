//! Error types for icon generation.
//!
//! Every fatal condition of a run maps to one [`IconError`] variant. The one
//! non-fatal failure, `iconutil` rejecting the iconset, is not an error at
//! all: it is reported through [`crate::icons::PackagingOutcome::Failed`].

use std::{io, path::PathBuf};
use thiserror::Error;

/// Result type alias for icon generation
pub type Result<T> = std::result::Result<T, IconError>;

/// Main error type for all icon generation operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum IconError {
    /// The fixed source logo is missing.
    #[error("Logo not found at {}", .path.display())]
    SourceNotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// The tool's directory has no parent to serve as project root.
    #[error("Could not determine project root: {reason}")]
    InstallDir {
        /// Why resolution failed
        reason: String,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {}: {error}", .path.display())]
    Fs {
        /// Operation that failed (e.g. "writing iconset frame")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Decoding, resizing or PNG-encoding an image failed.
    #[error("{context} {}: {source}", .path.display())]
    Image {
        /// Operation that failed
        context: &'static str,
        /// Image file involved
        path: PathBuf,
        /// The underlying image error
        #[source]
        source: image::ImageError,
    },

    /// Encoding one frame of the Windows icon failed.
    #[error("encoding {size}x{size} icon frame: {source}")]
    IcoFrame {
        /// Edge length of the frame
        size: u32,
        /// The underlying encoder error
        #[source]
        source: io::Error,
    },

    /// A required image codec is not compiled into this build.
    #[error("{0} codec is not available in this build")]
    CodecUnavailable(&'static str),
}

impl IconError {
    /// Suggestions printed below a fatal error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            IconError::SourceNotFound { path } => vec![
                format!("Place the project logo at {}", path.display()),
                "Run the tool from a checkout that contains the logo/ directory".to_string(),
            ],
            IconError::InstallDir { .. } => {
                vec!["Build the tool from inside the project checkout".to_string()]
            }
            IconError::Image { path, .. } => vec![
                format!("Check that {} is a readable PNG image", path.display()),
                "Re-export the logo as 8-bit RGBA PNG".to_string(),
            ],
            IconError::CodecUnavailable(_) => {
                vec!["Rebuild with the image crate's \"png\" feature enabled".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

/// Extension trait for filesystem operations with automatic path context.
///
/// Wraps I/O errors with the path that caused them for better diagnostics.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating directory".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| IconError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}
