//! Command-line interface for the ASCII, collage, and noise pipelines

use crate::ascii::palette::GlyphPalette;
use crate::ascii::sampler::{SamplerOptions, map_to_ascii};
use crate::collage::compositor::compose_pages;
use crate::collage::layout::GridLayout;
use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH,
    DEFAULT_COLUMNS, DEFAULT_CONTRAST, DEFAULT_FRAME_DELAY_MS, DEFAULT_GRID_COLS,
    DEFAULT_GRID_ROWS, DEFAULT_LOOP_COUNT, DEFAULT_NOISE_OCTAVES, DEFAULT_NOISE_SCALE,
    DEFAULT_NOISE_SEED, DEFAULT_NOISE_SIZE, DEFAULT_NOISE_STEP, VERTICAL_CORRECTION,
};
use crate::io::error::{GlyphError, Result};
use crate::io::gif::write_frames;
use crate::io::image::{collect_image_files, export_png, load_luminance, load_rgba};
use crate::io::progress::ProgressReporter;
use crate::noise::colormap::{Colormap, field_to_image};
use crate::noise::field::NoiseField;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glyphpage")]
#[command(
    author,
    version,
    about = "Raster toolkit: ASCII art, paged GIF collages, noise fields"
)]
/// Top-level command-line arguments
pub struct Cli {
    /// Selected pipeline
    #[command(subcommand)]
    pub command: Command,

    /// Suppress diagnostics and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// One subcommand per pipeline
#[derive(Subcommand)]
pub enum Command {
    /// Convert an image to ASCII art via luminance block sampling
    Ascii(AsciiArgs),
    /// Tile a directory of images into a paged GIF collage
    Collage(CollageArgs),
    /// Render a fractal noise field as a PNG or animated GIF
    Noise(NoiseArgs),
}

/// Arguments for the ASCII conversion pipeline
#[derive(Args)]
pub struct AsciiArgs {
    /// Input image to convert
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Number of ASCII columns
    #[arg(long, default_value_t = DEFAULT_COLUMNS)]
    pub cols: usize,

    /// Use the extended 69-glyph ramp instead of the compact 10-glyph one
    #[arg(long)]
    pub multilevel: bool,

    /// Contrast boost applied before sampling
    #[arg(long, default_value_t = DEFAULT_CONTRAST)]
    pub contrast: f64,

    /// Write the grid to a text file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the collage pipeline
#[derive(Args)]
pub struct CollageArgs {
    /// Directory of images to page into the collage
    #[arg(value_name = "DIRECTORY")]
    pub directory: PathBuf,

    /// Output GIF path
    #[arg(short, long, default_value = "output.gif")]
    pub output: PathBuf,

    /// Grid rows per page
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    pub rows: usize,

    /// Grid columns per page
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    pub cols: usize,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub canvas_width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub canvas_height: u32,

    /// Per-cell target width in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u32,

    /// Per-cell target height in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u32,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub duration_ms: u32,

    /// Times the GIF repeats, zero for forever
    #[arg(long = "loop", default_value_t = DEFAULT_LOOP_COUNT)]
    pub loop_count: u16,
}

/// Arguments for the noise rendering pipeline
#[derive(Args)]
pub struct NoiseArgs {
    /// Field edge length in samples
    #[arg(long, default_value_t = DEFAULT_NOISE_SIZE)]
    pub size: usize,

    /// Number of noise octaves (detail levels)
    #[arg(long, default_value_t = DEFAULT_NOISE_OCTAVES)]
    pub octaves: u32,

    /// Seed for reproducible fields
    #[arg(long, default_value_t = DEFAULT_NOISE_SEED)]
    pub seed: u32,

    /// Spatial frequency of the base octave
    #[arg(long, default_value_t = DEFAULT_NOISE_SCALE)]
    pub scale: f32,

    /// Number of animation frames; 1 renders a static PNG
    #[arg(long, default_value_t = 1)]
    pub frames: usize,

    /// Coordinate step between animation frames
    #[arg(long, default_value_t = DEFAULT_NOISE_STEP)]
    pub step: f32,

    /// Delay between frames in milliseconds
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub duration_ms: u32,

    /// Output path; defaults to noise.png or noise.gif by frame count
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Execute the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns the first pipeline error; the process exits non-zero with the
    /// diagnostic printed by `main`
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Command::Ascii(args) => run_ascii(args, self.quiet),
            Command::Collage(args) => run_collage(args, self.quiet),
            Command::Noise(args) => run_noise(args, self.quiet),
        }
    }
}

// Allow prints for pipeline output and user feedback
#[allow(clippy::print_stderr, clippy::print_stdout)]
fn run_ascii(args: &AsciiArgs, quiet: bool) -> Result<()> {
    let luminance = load_luminance(&args.image, args.contrast)?;
    let palette = if args.multilevel {
        GlyphPalette::full()
    } else {
        GlyphPalette::short()
    };
    let options = SamplerOptions {
        columns: args.cols,
        vertical_correction: VERTICAL_CORRECTION,
    };

    let grid = map_to_ascii(&luminance, options, &palette)?;

    if !quiet {
        eprintln!(
            "Image size: {}x{} -> ASCII size: {}x{}",
            luminance.width(),
            luminance.height(),
            grid.columns(),
            grid.rows()
        );
    }

    match &args.output {
        Some(path) => {
            std::fs::write(path, grid.to_text()).map_err(|e| GlyphError::FileSystem {
                path: path.clone(),
                operation: "write file",
                source: e,
            })?;
        }
        None => println!("{grid}"),
    }
    Ok(())
}

// Allow print for user feedback on empty input and completion
#[allow(clippy::print_stderr)]
fn run_collage(args: &CollageArgs, quiet: bool) -> Result<()> {
    let layout = GridLayout::new(
        args.rows,
        args.cols,
        (args.canvas_width, args.canvas_height),
        (args.cell_width, args.cell_height),
    )?;

    let files = collect_image_files(&args.directory)?;
    if files.is_empty() {
        // Reported as a no-op, not an error
        if !quiet {
            eprintln!(
                "{}",
                GlyphError::EmptyInput {
                    path: args.directory.clone(),
                }
            );
        }
        return Ok(());
    }

    let progress = ProgressReporter::new(!quiet, files.len() as u64, "Compositing");
    let decoded = files.iter().map(|path| {
        let result = load_rgba(path);
        progress.tick();
        result
    });
    let frames = compose_pages(decoded, &layout, quiet);
    progress.finish();

    let frame_count = frames.len();
    write_frames(frames, &args.output, args.duration_ms, args.loop_count)?;

    if !quiet {
        eprintln!(
            "Wrote '{}' with {frame_count} frames",
            args.output.display()
        );
    }
    Ok(())
}

// Allow print for user feedback on completion
#[allow(clippy::print_stderr)]
fn run_noise(args: &NoiseArgs, quiet: bool) -> Result<()> {
    let field = NoiseField::new(args.octaves, args.seed, args.scale)?;
    let colormap = Colormap::inferno();

    if args.frames <= 1 {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from("noise.png"));
        let rendered = field.render(args.size)?;
        export_png(&field_to_image(&rendered, &colormap), &output)?;
        if !quiet {
            eprintln!("Wrote '{}'", output.display());
        }
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("noise.gif"));
    let progress = ProgressReporter::new(!quiet, args.frames as u64, "Rendering");
    let mut frames = Vec::with_capacity(args.frames);
    for frame_index in 0..args.frames {
        let shift = frame_index as f32 * args.step;
        let rendered = field.render_at(args.size, shift)?;
        frames.push(field_to_image(&rendered, &colormap));
        progress.tick();
    }
    progress.finish();

    write_frames(frames, &output, args.duration_ms, DEFAULT_LOOP_COUNT)?;
    if !quiet {
        eprintln!("Wrote '{}' with {} frames", output.display(), args.frames);
    }
    Ok(())
}
