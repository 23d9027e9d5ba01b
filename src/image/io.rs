//! I/O helpers for grayscale images and JSON.
//!
//! - `FileDecoder`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_grayscale_u8`: write an owned 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::GrayImageU8;
use crate::error::{AnalysisError, Result};
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Decoding seam between the analysis pipeline and the image-loading library.
///
/// The default [`FileDecoder`] delegates to the `image` crate; tests inject
/// in-memory decoders to run the pipeline without touching the filesystem.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<GrayImageU8>;
}

/// Decoder backed by the `image` crate.
///
/// Any decodable raster is converted to 8-bit grayscale, which collapses
/// color channels through the standard luma weighting. Callers are expected
/// to supply grayscale input; color images are accepted but their channel
/// mix is the decoder's, not a spatial pooling.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileDecoder;

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<GrayImageU8> {
        let img = image::open(path)
            .map_err(|e| AnalysisError::image_load(path, e.to_string()))?
            .into_luma8();
        let width = img.width() as usize;
        let height = img.height() as usize;
        let data = img.into_raw();
        Ok(GrayImageU8::new(width, height, data))
    }
}

/// Save an 8-bit grayscale buffer to a PNG.
pub fn save_grayscale_u8(buffer: &GrayImageU8, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let data = buffer.data().to_vec();
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(buffer.width() as u32, buffer.height() as u32, data)
            .ok_or_else(|| AnalysisError::configuration("failed to create image buffer"))?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| AnalysisError::configuration(format!("failed to save {}: {e}", path.display())))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        AnalysisError::configuration(format!(
            "failed to serialize JSON for {}: {e}",
            path.display()
        ))
    })?;
    fs::write(path, json).map_err(|e| {
        AnalysisError::configuration(format!("failed to write JSON {}: {e}", path.display()))
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                AnalysisError::configuration(format!("failed to create {}: {e}", parent.display()))
            })?;
        }
    }
    Ok(())
}
