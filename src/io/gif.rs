//! GIF encoding with per-frame delay and loop control

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{GlyphError, Result, invalid_parameter};
use crate::io::image::create_parent_dirs;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Encode a frame sequence as an animated GIF
///
/// Frames keep their input order. The delay is floored at what viewers
/// reliably honor; a loop count of zero repeats forever
///
/// # Errors
///
/// Returns `InvalidParameter` for an empty frame list, `FileSystem` when the
/// output file cannot be created, and `ImageExport` when encoding fails
pub fn write_frames(
    frames: Vec<RgbaImage>,
    output_path: &Path,
    frame_delay_ms: u32,
    loop_count: u16,
) -> Result<()> {
    if frames.is_empty() {
        return Err(invalid_parameter(
            "frames",
            &0,
            &"no frames to encode",
        ));
    }

    let delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

    create_parent_dirs(output_path)?;
    let file = std::fs::File::create(output_path).map_err(|e| GlyphError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = GifEncoder::new(file);
    let repeat = if loop_count == 0 {
        Repeat::Infinite
    } else {
        Repeat::Finite(loop_count)
    };
    encoder
        .set_repeat(repeat)
        .map_err(|e| GlyphError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    let delay = Delay::from_numer_denom_ms(delay_ms, 1);
    encoder
        .encode_frames(
            frames
                .into_iter()
                .map(|buffer| Frame::from_parts(buffer, 0, 0, delay)),
        )
        .map_err(|e| GlyphError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
