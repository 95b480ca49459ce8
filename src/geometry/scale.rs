use crate::foundation::core::Canvas;

/// Result of fitting a source image inside the preview resolution limit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewScale {
    /// Preview width in pixels.
    pub width: u32,
    /// Preview height in pixels.
    pub height: u32,
    /// Factor mapping source coordinates into preview coordinates (`<= 1`).
    pub factor: f64,
}

impl PreviewScale {
    /// Preview dimensions as a [`Canvas`].
    pub fn canvas(self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }
}

/// Compute preview dimensions so that `max(width, height) <= limit`.
///
/// Aspect ratio is preserved: the larger dimension becomes `limit` and the
/// smaller one is rounded. Images already inside the limit pass through with
/// factor 1.0; this never upsamples.
pub fn fit_within(source: Canvas, limit: u32) -> PreviewScale {
    let Canvas { width, height } = source;
    if source.max_dim() <= limit {
        return PreviewScale {
            width,
            height,
            factor: 1.0,
        };
    }

    let factor = f64::from(limit) / f64::from(source.max_dim());
    let scaled = |v: u32| ((f64::from(v) * factor).round() as u32).max(1);

    if width >= height {
        PreviewScale {
            width: limit,
            height: scaled(height),
            factor,
        }
    } else {
        PreviewScale {
            width: scaled(width),
            height: limit,
            factor,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
