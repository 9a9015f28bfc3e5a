use crate::error::{ImageLoadError, Result};
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::path::Path;

/// Decoded RGBA8 pixels ready to hand to the view.
pub struct LoadedImage {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Load and decode an image file on the calling thread.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let reader = image::ImageReader::open(path)
        .map_err(|e| ImageLoadError::Unreadable(format!("{}: {}", path.display(), e)))?
        .with_guessed_format()
        .map_err(|e| ImageLoadError::Unreadable(format!("{}: {}", path.display(), e)))?;
    let rgba = reader.decode()?.to_rgba8();

    Ok(LoadedImage {
        width: rgba.width(),
        height: rgba.height(),
        data: rgba.into_raw(),
    })
}

/// Create a Slint image from decoded RGBA8 data.
pub fn create_slint_image(image: LoadedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.data, image.width, image.height);
    Image::from_rgba8(buffer)
}
