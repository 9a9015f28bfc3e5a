//! Unified error types for the image browser.

use std::fmt;

/// Why a file selection could not be turned into a displayed image.
#[derive(Debug)]
pub enum ImageLoadError {
    /// A file was chosen before any folder was selected
    NoFolderSelected,
    /// The file picker reported an empty selection
    EmptySelection,
    /// The joined path could not be opened or decoded
    Unreadable(String),
}

impl fmt::Display for ImageLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageLoadError::NoFolderSelected => write!(f, "no folder selected"),
            ImageLoadError::EmptySelection => write!(f, "empty selection"),
            ImageLoadError::Unreadable(msg) => write!(f, "{}", msg),
        }
    }
}

/// Application-specific errors.
///
/// Both kinds are recoverable: the session catches them where they occur
/// and degrades to an empty listing or a skipped view update.
#[derive(Debug)]
pub enum AppError {
    /// Folder missing, unreadable, or not a directory
    DirectoryListingFailed(String),
    /// Selected file could not be resolved or decoded
    ImageLoadFailed(ImageLoadError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::DirectoryListingFailed(msg) => write!(f, "Directory listing failed: {}", msg),
            AppError::ImageLoadFailed(err) => write!(f, "Image load failed: {}", err),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoadFailed(ImageLoadError::Unreadable(err.to_string()))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryListingFailed(err.to_string())
    }
}

impl From<ImageLoadError> for AppError {
    fn from(err: ImageLoadError) -> Self {
        AppError::ImageLoadFailed(err)
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
