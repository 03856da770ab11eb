//! Image decoding helpers and input directory discovery

use crate::io::configuration::IMAGE_EXTENSIONS;
use crate::io::error::{GlyphError, Result, invalid_parameter};
use crate::raster::luminance::LuminanceImage;
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Decode an image, collapse it to luminance, and apply a contrast boost
///
/// # Errors
///
/// Returns `ImageLoad` for an unreadable or corrupt file and
/// `InvalidParameter` for an empty image or an invalid contrast factor
pub fn load_luminance(path: &Path, contrast: f64) -> Result<LuminanceImage> {
    let decoded = image::open(path).map_err(|e| GlyphError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let gray = decoded.into_luma8();
    LuminanceImage::from_gray(&gray)?.with_contrast(contrast)
}

/// Decode an image to RGBA for collage placement
///
/// # Errors
///
/// Returns `ImageLoad` for an unreadable or corrupt file
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|e| GlyphError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(decoded.into_rgba8())
}

/// Collect recognized image files in a directory, sorted by name
///
/// Extension matching is case-insensitive. An empty result is not an error;
/// the caller decides whether that is a no-op
///
/// # Errors
///
/// Returns `InvalidParameter` when the path is not a directory and
/// `FileSystem` when the directory cannot be read
pub fn collect_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(invalid_parameter(
            "directory",
            &dir.display(),
            &"target must be a directory of images",
        ));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| GlyphError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| GlyphError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| ext.eq_ignore_ascii_case(known))
            });
        if recognized && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Save an RGBA image, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` when the parent directory cannot be created and
/// `ImageExport` when encoding fails
pub fn export_png(img: &RgbaImage, output_path: &Path) -> Result<()> {
    create_parent_dirs(output_path)?;
    img.save(output_path).map_err(|e| GlyphError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}

/// Create the parent directories of an output path if any are missing
///
/// # Errors
///
/// Returns `FileSystem` when directory creation fails
pub fn create_parent_dirs(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GlyphError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }
    Ok(())
}
