use crate::foundation::error::{ViewfinderError, ViewfinderResult};

/// An H×W×C image tensor with float channels in `[0, 1]`.
///
/// This mirrors the host's image socket: row-major, channel-interleaved,
/// with 1 (gray), 3 (RGB) or 4 (RGBA) channels. The tensor is the node's
/// passthrough payload and is never modified by the pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageTensor {
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Channel count: 1, 3 or 4.
    pub channels: u8,
    /// Interleaved float samples, `height * width * channels` values.
    pub data: Vec<f32>,
}

impl ImageTensor {
    /// Wrap raw tensor data, validating shape and channel count.
    pub fn new(height: u32, width: u32, channels: u8, data: Vec<f32>) -> ViewfinderResult<Self> {
        if !matches!(channels, 1 | 3 | 4) {
            return Err(ViewfinderError::validation(format!(
                "image tensor supports 1, 3 or 4 channels, got {channels}"
            )));
        }
        let expected = (height as usize)
            .checked_mul(width as usize)
            .and_then(|v| v.checked_mul(channels as usize))
            .ok_or_else(|| ViewfinderError::validation("image tensor size overflow"))?;
        if data.len() != expected {
            return Err(ViewfinderError::validation(format!(
                "image tensor expects {expected} samples for {height}x{width}x{channels}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Convert to an RGBA8 image, clamping samples into `[0, 255]`.
    ///
    /// Gray broadcasts to all color channels; alpha defaults to opaque when
    /// the tensor has no alpha channel.
    pub fn to_rgba8(&self) -> image::RgbaImage {
        fn byte(v: f32) -> u8 {
            (v * 255.0).clamp(0.0, 255.0) as u8
        }

        let n = (self.height as usize) * (self.width as usize);
        let c = self.channels as usize;
        let mut out = Vec::with_capacity(n * 4);
        for px in self.data.chunks_exact(c) {
            let (r, g, b, a) = match c {
                1 => (px[0], px[0], px[0], 1.0),
                3 => (px[0], px[1], px[2], 1.0),
                _ => (px[0], px[1], px[2], px[3]),
            };
            out.extend_from_slice(&[byte(r), byte(g), byte(b), byte(a)]);
        }

        // Length is n * 4 by construction, so from_raw cannot fail.
        image::RgbaImage::from_raw(self.width, self.height, out)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

/// An H×W mask tensor with float coverage in `[0, 1]`.
///
/// Passthrough-only: the pipeline never reads or writes mask samples.
#[derive(Clone, Debug, PartialEq)]
pub struct MaskTensor {
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Row-major coverage samples, `height * width` values.
    pub data: Vec<f32>,
}

impl MaskTensor {
    /// Wrap raw mask data, validating the sample count.
    pub fn new(height: u32, width: u32, data: Vec<f32>) -> ViewfinderResult<Self> {
        let expected = (height as usize)
            .checked_mul(width as usize)
            .ok_or_else(|| ViewfinderError::validation("mask tensor size overflow"))?;
        if data.len() != expected {
            return Err(ViewfinderError::validation(format!(
                "mask tensor expects {expected} samples for {height}x{width}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }
}
