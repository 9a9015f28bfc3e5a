//! Application configuration constants.

/// Lowercase filename suffixes accepted when listing a folder.
pub const SUPPORTED_IMAGE_SUFFIXES: [&str; 2] = [".png", ".gif"];

/// Text shown above the image name label.
pub const IMAGE_HINT: &str = "Choose an image from the list on the left";
