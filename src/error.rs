use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LgtmError>;

#[derive(Debug, thiserror::Error)]
pub enum LgtmError {
    #[error("Failed to load image {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image {} has no pixels", .path.display())]
    EmptyImage { path: PathBuf },

    #[error("Failed to resize image: {0}")]
    Resize(String),

    #[error("Cannot place a {size}x{size} stamp on a {width}x{height} image; resize it first")]
    StampSize { width: u32, height: u32, size: u32 },

    #[error("Failed to load stamp mask ({origin}): {source}")]
    Mask {
        origin: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported output format for {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
