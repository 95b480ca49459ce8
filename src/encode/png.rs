use std::io::Cursor;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::foundation::core::PreviewBuffer;
use crate::foundation::error::{ViewfinderError, ViewfinderResult};

/// Encode a preview buffer as a PNG and return the base64 payload string.
pub fn encode_png_base64(buffer: &PreviewBuffer) -> ViewfinderResult<String> {
    let img = image::RgbaImage::from_raw(buffer.width, buffer.height, buffer.data.clone())
        .ok_or_else(|| ViewfinderError::encode("preview buffer does not match its dimensions"))?;

    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .context("encode preview png")?;
    Ok(STANDARD.encode(bytes.into_inner()))
}
