use image::{GrayImage, Rgba, RgbaImage, imageops};

use crate::assets::{self, MaskSource};
use crate::error::{LgtmError, Result};
use crate::geometry::{self, Rect};

/// Stamp the LGTM glyph onto an already resized image.
///
/// The shorter side of `img` must already be `STAMP_SIZE`. The mask is
/// loaded here, so a missing or corrupt mask also fails this step.
pub fn draw_lgtm(img: &RgbaImage, mask_source: &MaskSource) -> Result<RgbaImage> {
    let (w, h) = img.dimensions();
    let rect = geometry::stamp_rect(w, h).ok_or(LgtmError::StampSize {
        width: w,
        height: h,
        size: geometry::STAMP_SIZE,
    })?;
    let base = assets::stamp_base();
    let mask = assets::load_mask(mask_source)?;

    let mut result = RgbaImage::new(w, h);
    imageops::replace(&mut result, img, 0, 0);

    log::debug!("Stamping {w}x{h} image at {:?}-{:?}", rect.min, rect.max);
    draw_masked_over(&mut result, rect, &base, &mask);
    Ok(result)
}

/// Composite `src` over `dst` inside `rect`, using `mask` as extra coverage.
/// `src` and `mask` are addressed from their own origin; pixels outside
/// either are skipped.
pub fn draw_masked_over(dst: &mut RgbaImage, rect: Rect, src: &RgbaImage, mask: &GrayImage) {
    let w = rect.width().min(src.width()).min(mask.width());
    let h = rect.height().min(src.height()).min(mask.height());

    for y in 0..h {
        for x in 0..w {
            let (dx, dy) = (rect.min.0 + x, rect.min.1 + y);
            if dx >= dst.width() || dy >= dst.height() {
                continue;
            }
            let m = mask.get_pixel(x, y)[0];
            if m == 0 {
                continue;
            }
            let blended = blend_over(*src.get_pixel(x, y), *dst.get_pixel(dx, dy), m);
            dst.put_pixel(dx, dy, blended);
        }
    }
}

/// Porter-Duff "over" with the source alpha scaled by `coverage`.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>, coverage: u8) -> Rgba<u8> {
    let m = coverage as f32 / 255.0;
    let sa = src[3] as f32 / 255.0 * m;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let channel = |i: usize| {
        let premul = src[i] as f32 * sa + dst[i] as f32 * da * (1.0 - sa);
        (premul / out_a).round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::STAMP_SIZE;
    use image::Luma;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn full_coverage_paints_source() {
        assert_eq!(blend_over(WHITE, Rgba([10, 20, 30, 255]), 255), WHITE);
    }

    #[test]
    fn partial_coverage_mixes_linearly() {
        let out = blend_over(WHITE, Rgba([0, 0, 0, 255]), 128);
        assert_eq!(out, Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn coverage_over_transparent_keeps_source_colour() {
        let out = blend_over(WHITE, Rgba([0, 0, 0, 0]), 51);
        assert_eq!(out, Rgba([255, 255, 255, 51]));
    }

    #[test]
    fn masked_over_only_touches_rect() {
        let mut dst = RgbaImage::from_pixel(6, 2, Rgba([0, 0, 0, 255]));
        let src = RgbaImage::from_pixel(2, 2, WHITE);
        let mask = GrayImage::from_pixel(2, 2, Luma([255]));
        draw_masked_over(&mut dst, Rect::new((2, 0), (4, 2)), &src, &mask);
        for (x, _, p) in dst.enumerate_pixels() {
            let expected = if (2..4).contains(&x) { WHITE } else { Rgba([0, 0, 0, 255]) };
            assert_eq!(*p, expected, "x={x}");
        }
    }

    #[test]
    fn stamp_lands_on_centre_square_only() {
        let img = RgbaImage::from_pixel(1000, 500, Rgba([0, 0, 255, 255]));
        let out = draw_lgtm(&img, &MaskSource::Embedded).unwrap();
        assert_eq!(out.dimensions(), (1000, 500));

        // L stem sits 30px into the mask, offset by the 250px margin
        assert_eq!(*out.get_pixel(280, 250), WHITE);
        assert_eq!(*out.get_pixel(30, 250), Rgba([0, 0, 255, 255]));
        // mask background leaves the source alone
        assert_eq!(*out.get_pixel(250, 0), Rgba([0, 0, 255, 255]));
        assert_eq!(*out.get_pixel(999, 499), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn input_is_not_mutated() {
        let img = RgbaImage::from_pixel(STAMP_SIZE, STAMP_SIZE, Rgba([9, 9, 9, 255]));
        let copy = img.clone();
        let out = draw_lgtm(&img, &MaskSource::Embedded).unwrap();
        assert_eq!(img, copy);
        assert_ne!(out, img);
    }

    #[test]
    fn unresized_image_is_an_error() {
        let img = RgbaImage::from_pixel(300, 200, Rgba([9, 9, 9, 255]));
        let err = draw_lgtm(&img, &MaskSource::Embedded).unwrap_err();
        assert!(matches!(err, LgtmError::StampSize { width: 300, height: 200, .. }));
    }

    #[test]
    fn missing_mask_propagates() {
        let img = RgbaImage::new(STAMP_SIZE, STAMP_SIZE);
        let source = MaskSource::File("/nonexistent/lgtm/mask.png".into());
        assert!(draw_lgtm(&img, &source).is_err());
    }
}
