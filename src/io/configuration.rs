//! Pipeline constants and runtime configuration defaults

// ASCII conversion settings
/// Default number of output columns
pub const DEFAULT_COLUMNS: usize = 120;

/// Default contrast boost applied before sampling
pub const DEFAULT_CONTRAST: f64 = 1.5;

// Monospace glyphs render roughly twice as tall as wide, so each sampled
// block is twice as tall as it is wide
/// Vertical correction factor for block height derivation
pub const VERTICAL_CORRECTION: f64 = 0.5;

// Collage settings
/// Default collage grid row count
pub const DEFAULT_GRID_ROWS: usize = 3;
/// Default collage grid column count
pub const DEFAULT_GRID_COLS: usize = 3;
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 800;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 600;
/// Default per-cell target width in pixels
pub const DEFAULT_CELL_WIDTH: u32 = 300;
/// Default per-cell target height in pixels
pub const DEFAULT_CELL_HEIGHT: u32 = 200;
/// Canvas fill color behind pasted cells (opaque white)
pub const CANVAS_FILL: [u8; 4] = [255, 255, 255, 255];

/// Extensions recognized when scanning a collage input directory
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

// Animation settings
/// Default delay between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 500;
/// Default GIF repeat count, zero meaning loop forever
pub const DEFAULT_LOOP_COUNT: u16 = 0;
/// Minimum frame delay that GIF viewers reliably honor (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;

// Noise rendering settings
/// Default noise field edge length in samples
pub const DEFAULT_NOISE_SIZE: usize = 300;
/// Default number of noise octaves
pub const DEFAULT_NOISE_OCTAVES: u32 = 4;
/// Default noise seed for reproducible fields
pub const DEFAULT_NOISE_SEED: u32 = 123;
/// Default spatial frequency of the base octave
pub const DEFAULT_NOISE_SCALE: f32 = 2.0;
/// Default coordinate step between animation frames
pub const DEFAULT_NOISE_STEP: f32 = 0.02;

// Progress display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
