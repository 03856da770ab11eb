//! Page composition: paste fitted images into grid cells, one canvas per page
//!
//! Decode failures are isolated at cell granularity: a failed source keeps
//! its cell slot but leaves it blank, and the run continues.

use crate::collage::layout::GridLayout;
use crate::io::configuration::CANVAS_FILL;
use crate::io::error::Result;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

/// Compose an ordered sequence of decode results into page canvases
///
/// Cells fill in row-major order within each page; when the sequence runs out
/// the remaining cells of the last page stay blank. An `Err` item is logged
/// (unless `quiet`) and its cell left blank. An empty sequence produces an
/// empty frame list
pub fn compose_pages<I>(decoded: I, layout: &GridLayout, quiet: bool) -> Vec<RgbaImage>
where
    I: IntoIterator<Item = Result<RgbaImage>>,
    I::IntoIter: ExactSizeIterator,
{
    let mut sources = decoded.into_iter();
    let page_count = layout.page_count(sources.len());
    let mut frames = Vec::with_capacity(page_count);

    for _ in 0..page_count {
        let mut canvas = blank_canvas(layout);
        for row in 0..layout.rows() {
            for col in 0..layout.cols() {
                let Some(source) = sources.next() else {
                    continue;
                };
                match source {
                    Ok(img) => paste_cell(&mut canvas, &img, layout, row, col),
                    // Allow print for user feedback on skipped cells
                    #[allow(clippy::print_stderr)]
                    Err(error) => {
                        if !quiet {
                            eprintln!("Skipping cell ({row}, {col}): {error}");
                        }
                    }
                }
            }
        }
        frames.push(canvas);
    }

    frames
}

fn blank_canvas(layout: &GridLayout) -> RgbaImage {
    RgbaImage::from_pixel(
        layout.canvas_width(),
        layout.canvas_height(),
        Rgba(CANVAS_FILL),
    )
}

// Fit-scale, center, and paste one image into its cell. Pasting clips at the
// canvas bounds only; a target larger than the cell overflows into neighbors
fn paste_cell(canvas: &mut RgbaImage, img: &RgbaImage, layout: &GridLayout, row: usize, col: usize) {
    let (new_w, new_h) = layout.fit_dimensions(img.width(), img.height());
    let resized = imageops::resize(img, new_w, new_h, FilterType::Lanczos3);
    let (x, y) = layout.cell_offset(row, col, new_w, new_h);
    imageops::overlay(canvas, &resized, x, y);
}
