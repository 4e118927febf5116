use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};

use crate::assets::MaskSource;
use crate::compose;
use crate::error::Result;
use crate::geometry;
use crate::image_io;
use crate::resize::{self, ResizeFilter};

/// Everything the pipeline can be configured with.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub filter: ResizeFilter,
    pub mask: MaskSource,
}

/// Resize `source` and stamp it, without touching the filesystem
/// (unless the mask is file-backed).
pub fn lgtmize(source: &DynamicImage, options: &Options) -> Result<RgbaImage> {
    let rgba = source.to_rgba8();
    let (w, h) = rgba.dimensions();

    // Step 1: Resize so the shorter side matches the stamp
    let target = geometry::resize_target(w, h);
    log::debug!(
        "Resizing {w}x{h} -> {}x{} ({})",
        target.0,
        target.1,
        options.filter.name()
    );
    let resized = resize::resize(&rgba, target, options.filter)?;

    // Step 2: Composite the stamp through the mask
    compose::draw_lgtm(&resized, &options.mask)
}

/// Load `src`, stamp it and write the result next to it.
/// Returns the path that was written.
pub fn run(src: &Path, options: &Options) -> Result<PathBuf> {
    let source = image_io::load_image(src)?;
    let stamped = lgtmize(&source, options)?;
    image_io::save_image(&stamped, src)
}
