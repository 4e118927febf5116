use fast_image_resize as fr;
use image::RgbaImage;

use crate::error::{LgtmError, Result};

/// Resampling filter for the resize step. `Box` is the stamp's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeFilter {
    #[default]
    Box,
    Nearest,
    Triangle,
    CatmullRom,
    Lanczos3,
}

impl ResizeFilter {
    pub const ALL: &[ResizeFilter] = &[
        ResizeFilter::Box,
        ResizeFilter::Nearest,
        ResizeFilter::Triangle,
        ResizeFilter::CatmullRom,
        ResizeFilter::Lanczos3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ResizeFilter::Box => "Box",
            ResizeFilter::Nearest => "Nearest",
            ResizeFilter::Triangle => "Triangle",
            ResizeFilter::CatmullRom => "Catmull-Rom",
            ResizeFilter::Lanczos3 => "Lanczos3",
        }
    }

    fn resize_alg(self) -> fr::ResizeAlg {
        match self {
            ResizeFilter::Box => fr::ResizeAlg::Convolution(fr::FilterType::Box),
            ResizeFilter::Nearest => fr::ResizeAlg::Nearest,
            ResizeFilter::Triangle => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            ResizeFilter::CatmullRom => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            ResizeFilter::Lanczos3 => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
        }
    }
}

/// Resize to exactly `width` x `height`. The input is left untouched.
///
/// Colour is averaged with premultiplied alpha, so fully transparent pixels
/// contribute no colour to their neighbours.
pub fn resize(
    img: &RgbaImage,
    (width, height): (u32, u32),
    filter: ResizeFilter,
) -> Result<RgbaImage> {
    let (src_w, src_h) = img.dimensions();
    let raw = img.as_raw().clone();
    let src = fr::images::Image::from_vec_u8(src_w, src_h, raw, fr::PixelType::U8x4)
        .map_err(|e| LgtmError::Resize(e.to_string()))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    let options = fr::ResizeOptions::new()
        .resize_alg(filter.resize_alg())
        .use_alpha(true);
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| LgtmError::Resize(e.to_string()))?;

    RgbaImage::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| LgtmError::Resize("output buffer has the wrong length".to_string()))
}
