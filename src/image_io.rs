//! PNG export and raster image import.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use crate::color::Color;
use crate::error::ImageIoError;
use crate::picture::Picture;

/// Largest side, in cells, of an imported picture
pub const DEFAULT_IMPORT_MAX_SIZE: u32 = 100;

/// One image pixel per cell, RGB
pub fn to_rgb_image(picture: &Picture) -> RgbImage {
    RgbImage::from_fn(picture.width() as u32, picture.height() as u32, |x, y| {
        Rgb(picture.pixel(x as i32, y as i32).to_array())
    })
}

/// Encode `picture` as a pixel-exact PNG
pub fn export_png(picture: &Picture) -> Result<Vec<u8>, ImageIoError> {
    let mut bytes = Vec::new();
    to_rgb_image(picture)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(ImageIoError::Encode)?;
    Ok(bytes)
}

pub fn save_png(picture: &Picture, path: &Path) -> Result<(), ImageIoError> {
    let bytes = export_png(picture)?;
    fs::write(path, bytes)?;
    log::info!(
        "Saved {}x{} picture to {}",
        picture.width(),
        picture.height(),
        path.display()
    );
    Ok(())
}

/// Decode an image and turn it into a picture.
///
/// Anything wider or taller than `max_size` is cropped to its top-left
/// `max_size` square; alpha is dropped.
pub fn import_image(bytes: &[u8], max_size: u32) -> Result<Picture, ImageIoError> {
    let decoded = image::load_from_memory(bytes)?;
    log::debug!("Decoded image: {}x{}", decoded.width(), decoded.height());

    let rgb = decoded.to_rgb8();
    let width = rgb.width().min(max_size);
    let height = rgb.height().min(max_size);
    if width < rgb.width() || height < rgb.height() {
        log::info!(
            "Cropping {}x{} image to {}x{}",
            rgb.width(),
            rgb.height(),
            width,
            height
        );
    }

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Color::from(rgb.get_pixel(x, y).0));
        }
    }
    Ok(Picture::from_pixels(width as usize, height as usize, pixels)?)
}

pub fn load_picture(path: &Path, max_size: u32) -> Result<Picture, ImageIoError> {
    let bytes = fs::read(path)?;
    import_image(&bytes, max_size)
}
