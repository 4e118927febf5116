//! Stamp geometry.
//!
//! Both functions work on plain pixel dimensions. `resize_target` maps the
//! source size to a size whose shorter side is exactly [`STAMP_SIZE`];
//! `stamp_rect` then centres an S×S square on the longer axis of that
//! resized size.

/// Side length of the stamp square, and the shorter side of every resized image.
pub const STAMP_SIZE: u32 = 500;

/// Axis-aligned rectangle, `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min: (u32, u32),
    pub max: (u32, u32),
}

impl Rect {
    pub fn new(min: (u32, u32), max: (u32, u32)) -> Self {
        debug_assert!(min.0 <= max.0 && min.1 <= max.1);
        Self { min, max }
    }

    pub fn width(&self) -> u32 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> u32 {
        self.max.1 - self.min.1
    }
}

/// Target dimensions for the resize step.
///
/// The ratio is taken in single precision and the scaled side is truncated,
/// so 640x480 becomes 666x500 rather than 667x500.
pub fn resize_target(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (STAMP_SIZE, STAMP_SIZE);
    }
    let s = STAMP_SIZE as f32;
    if width > height {
        let ratio = width as f32 / height as f32;
        ((s * ratio) as u32, STAMP_SIZE)
    } else if width < height {
        let ratio = height as f32 / width as f32;
        (STAMP_SIZE, (s * ratio) as u32)
    } else {
        (STAMP_SIZE, STAMP_SIZE)
    }
}

/// Placement of the stamp inside an image that has already been resized
/// with [`resize_target`]. `None` unless the shorter side is exactly
/// `STAMP_SIZE`.
pub fn stamp_rect(width: u32, height: u32) -> Option<Rect> {
    if width.min(height) != STAMP_SIZE {
        return None;
    }
    let min = if width > height {
        ((width - STAMP_SIZE) / 2, 0)
    } else if width < height {
        (0, (height - STAMP_SIZE) / 2)
    } else {
        (0, 0)
    };
    Some(Rect::new(min, (min.0 + STAMP_SIZE, min.1 + STAMP_SIZE)))
}
