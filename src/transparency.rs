// THEORY:
// The `transparency` module is the top-level API of the crate. It strings the
// core modules together into the one operation the binary performs: load an
// image, knock its near-white pixels out, and write it back over the same path
// as a PNG. Nothing is retried and nothing is backed up; the first failure is
// returned to the caller and the destination is truncated before encoding
// starts, so a failed write can leave a damaged file behind.

use crate::core_modules::knockout::knockout::knock_out_buffer;
use crate::core_modules::utils::image_helper::image_helper::{load_rgba, save_png};
use crate::error::Result;
use log::{debug, info};
use std::path::Path;

// Re-export key data structures for the public API.
pub use crate::core_modules::knockout::knockout::{BufferStats, knock_out_image};
pub use crate::core_modules::pixel::pixel::{Pixel, TRANSPARENT_WHITE, WHITE_THRESHOLD};

/// The file the binary rewrites.
pub const DEFAULT_TARGET: &str = "public/college-logo.png";

/// What a single run did to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnockoutReport {
    pub width: u32,
    pub height: u32,
    pub pixels: usize,
    /// Pixels that were replaced with `TRANSPARENT_WHITE`.
    pub knocked_out: usize,
}

/// Rewrites the image at `path` as a PNG whose near-white pixels are fully
/// transparent white. Every other pixel keeps all four channels.
pub fn make_white_transparent(path: impl AsRef<Path>) -> Result<KnockoutReport> {
    let path = path.as_ref();

    let image = load_rgba(path)?;
    let (width, height) = image.dimensions();
    info!("loaded {} ({}x{})", path.display(), width, height);

    let (buffer, stats) = knock_out_buffer(image.as_raw())?;
    debug!(
        "{} of {} pixels above threshold {}",
        stats.knocked_out, stats.pixels, WHITE_THRESHOLD
    );

    save_png(path, width, height, &buffer)?;

    let report = KnockoutReport {
        width,
        height,
        pixels: stats.pixels,
        knocked_out: stats.knocked_out,
    };
    info!(
        "wrote {}: {} of {} pixels made transparent",
        path.display(),
        report.knocked_out,
        report.pixels
    );
    Ok(report)
}
