use crate::foundation::error::{ViewfinderError, ViewfinderResult};

pub use kurbo::{Point, Vec2};

/// Pixel dimensions of a buffer or source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Larger of the two dimensions.
    pub fn max_dim(self) -> u32 {
        self.width.max(self.height)
    }
}

/// A straight line between two points in preview pixel space.
///
/// Origin is top-left, x grows right, y grows down. Segments are plain values;
/// builders hand them out by value and never share them.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    /// Start point.
    pub a: Point,
    /// End point.
    pub b: Point,
}

impl LineSegment {
    /// Construct a segment from two endpoints.
    pub fn new(a: impl Into<Point>, b: impl Into<Point>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }

    /// Euclidean length of the segment.
    pub fn length(self) -> f64 {
        (self.b - self.a).hypot()
    }
}

/// Straight-alpha RGBA8 color (r,g,b are *not* premultiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white, the fallback stroke color.
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Construct from channel bytes.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// A straight-alpha RGBA8 pixel grid with explicit dimensions.
///
/// `data` is tightly packed, row-major, `width * height * 4` bytes. All raster
/// math in this crate operates on straight alpha; premultiplication never
/// enters the pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl PreviewBuffer {
    /// Wrap raw RGBA8 bytes, validating the length against the dimensions.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> ViewfinderResult<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| ViewfinderError::validation("preview buffer size overflow"))?;
        if data.len() != expected {
            return Err(ViewfinderError::validation(format!(
                "preview buffer expects {expected} bytes for {width}x{height}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Allocate a buffer filled with a single color.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Self {
        let px = [color.r, color.g, color.b, color.a];
        let n = (width as usize) * (height as usize);
        let mut data = Vec::with_capacity(n * 4);
        for _ in 0..n {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Read the pixel at `(x, y)`; callers guarantee in-bounds coordinates.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        let i = self.pixel_index(x, y);
        Rgba8 {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Overwrite the pixel at `(x, y)`; callers guarantee in-bounds coordinates.
    pub fn put_pixel(&mut self, x: u32, y: u32, px: Rgba8) {
        let i = self.pixel_index(x, y);
        self.data[i] = px.r;
        self.data[i + 1] = px.g;
        self.data[i + 2] = px.b;
        self.data[i + 3] = px.a;
    }

    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
