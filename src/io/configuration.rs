//! Runtime constants and configuration defaults

// Binarization
/// Default intensity threshold; pixels strictly below it become foreground
pub const DEFAULT_THRESHOLD: u8 = 128;

// Plot rendering
/// Rendered chart width in pixels
pub const PLOT_WIDTH: u32 = 640;
/// Rendered chart height in pixels
pub const PLOT_HEIGHT: u32 = 480;
/// Blank border around the plotted area in pixels
pub const PLOT_MARGIN: u32 = 48;
/// Half-width of the square data-point markers
pub const MARKER_RADIUS: u32 = 2;
/// RGBA color for data-point markers
pub const MARKER_COLOR: [u8; 4] = [178, 34, 34, 255];
/// RGBA color for the fitted line
pub const FIT_LINE_COLOR: [u8; 4] = [30, 60, 160, 255];
/// RGBA color for the axes
pub const AXIS_COLOR: [u8; 4] = [40, 40, 40, 255];
/// RGBA background color of the chart
pub const PLOT_BACKGROUND: [u8; 4] = [255, 255, 255, 255];

// Output settings
/// Suffix added to chart output filenames
pub const PLOT_SUFFIX: &str = "_boxcount";
/// Suffix added to CSV output filenames
pub const CSV_SUFFIX: &str = "_boxcount";

// Progress bar display settings
/// Batch size above which a progress bar is drawn; smaller runs finish
/// fast enough that no display is shown
pub const BATCH_BAR_THRESHOLD: usize = 5;
