//! LGTM stamping - library crate.
//!
//! Resizes an image so its shorter side matches the stamp, then draws the
//! bundled LGTM glyph over the centre square. The `lgtmize` binary is a thin
//! wrapper around [`pipeline::run`].

pub mod assets;
pub mod compose;
pub mod error;
pub mod geometry;
pub mod image_io;
pub mod pipeline;
pub mod resize;

pub use error::{LgtmError, Result};
