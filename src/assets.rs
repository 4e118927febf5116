//! Bundled stamp assets.
//!
//! The LGTM mask ships inside the binary. The CLI always uses it; the
//! file-backed source exists for tests and for packagers checking a
//! rebuilt asset, and is how a missing or corrupt mask is exercised.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::path::PathBuf;

use crate::error::{LgtmError, Result};
use crate::geometry::STAMP_SIZE;

const EMBEDDED_MASK: &[u8] = include_bytes!("../assets/mask.png");

/// Where the greyscale LGTM mask is read from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaskSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl MaskSource {
    fn describe(&self) -> String {
        match self {
            MaskSource::Embedded => "embedded".to_string(),
            MaskSource::File(path) => path.display().to_string(),
        }
    }
}

/// Load the mask as per-pixel coverage: luma scaled by the asset's own alpha.
/// Assets that are not stamp-sized are scaled to `STAMP_SIZE` square.
pub fn load_mask(source: &MaskSource) -> Result<GrayImage> {
    let decoded = match source {
        MaskSource::Embedded => image::load_from_memory(EMBEDDED_MASK),
        MaskSource::File(path) => image::open(path),
    }
    .map_err(|e| LgtmError::Mask {
        origin: source.describe(),
        source: e,
    })?;

    let luma_alpha = decoded.to_luma_alpha8();
    let mut mask = GrayImage::from_fn(luma_alpha.width(), luma_alpha.height(), |x, y| {
        let [l, a] = luma_alpha.get_pixel(x, y).0;
        Luma([((l as u32 * a as u32 + 127) / 255) as u8])
    });

    if mask.dimensions() != (STAMP_SIZE, STAMP_SIZE) {
        log::debug!(
            "Scaling {}x{} mask to {STAMP_SIZE}x{STAMP_SIZE}",
            mask.width(),
            mask.height()
        );
        mask = imageops::resize(&mask, STAMP_SIZE, STAMP_SIZE, FilterType::Triangle);
    }
    Ok(mask)
}

/// The opaque white square that shows through the mask.
pub fn stamp_base() -> RgbaImage {
    RgbaImage::from_pixel(STAMP_SIZE, STAMP_SIZE, Rgba([255, 255, 255, 255]))
}
