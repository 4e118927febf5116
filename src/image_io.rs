use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, ImageReader, RgbaImage};
use std::ffi::OsString;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{LgtmError, Result};

/// Inserted between the file stem and the extension of the output path.
pub const SUFFIX: &str = "-lgtm";

/// Decode by content, falling back to the extension when the content is
/// not recognised.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(ImageError::IoError)
        .and_then(|reader| reader.decode())
        .map_err(|e| LgtmError::Load {
            path: path.to_path_buf(),
            source: e,
        })?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(LgtmError::EmptyImage {
            path: path.to_path_buf(),
        });
    }
    log::debug!("Loaded {} ({w}x{h}, {:?})", path.display(), img.color());
    Ok(img)
}

/// `photo.jpg` -> `photo-lgtm.jpg`.
///
/// Only the last component is rewritten and only its last dot counts as
/// the extension separator, so `a.b.png` -> `a.b-lgtm.png` and
/// `noext` -> `noext-lgtm`.
pub fn output_path(src: &Path) -> PathBuf {
    let mut name = OsString::from(src.file_stem().unwrap_or_default());
    name.push(SUFFIX);
    if let Some(ext) = src.extension() {
        name.push(".");
        name.push(ext);
    }
    src.with_file_name(name)
}

/// Encode `img` next to `src` in the format its extension names.
///
/// The whole file is encoded in memory first, so a failed encode never
/// leaves a truncated output behind.
pub fn save_image(img: &RgbaImage, src: &Path) -> Result<PathBuf> {
    let path = output_path(src);
    let format = ImageFormat::from_path(&path).map_err(|_| LgtmError::UnsupportedFormat {
        path: path.clone(),
    })?;
    if !format.writing_enabled() {
        return Err(LgtmError::UnsupportedFormat { path });
    }

    let encodable = encodable_for(img, format);
    let mut bytes = Cursor::new(Vec::<u8>::new());
    encodable
        .write_to(&mut bytes, format)
        .map_err(|e| LgtmError::Encode {
            path: path.clone(),
            source: e,
        })?;

    std::fs::write(&path, bytes.into_inner()).map_err(|e| LgtmError::Write {
        path: path.clone(),
        source: e,
    })?;
    log::info!("Wrote {} ({format:?})", path.display());
    Ok(path)
}

/// Convert to a colour type the encoder for `format` accepts.
fn encodable_for(img: &RgbaImage, format: ImageFormat) -> DynamicImage {
    let rgba = DynamicImage::ImageRgba8(img.clone());
    match format {
        ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgb8(rgba.to_rgb8()),
        ImageFormat::Farbfeld => DynamicImage::ImageRgba16(rgba.to_rgba16()),
        ImageFormat::OpenExr => DynamicImage::ImageRgba32F(rgba.to_rgba32f()),
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(rgba.to_rgb32f()),
        _ => rgba,
    }
}
