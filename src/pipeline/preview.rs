//! Preview pipeline orchestration.
//!
//! One invocation is synchronous and owns every buffer it touches: tensor →
//! scaled RGBA8 preview → overlay geometry → composited buffer → transport.
//! The passthrough image/mask never enter this module.

use crate::config::params::GuideConfig;
use crate::encode::png::encode_png_base64;
use crate::encode::sink::PreviewSink;
use crate::foundation::core::{Canvas, PreviewBuffer};
use crate::foundation::error::ViewfinderResult;
use crate::geometry::builders::build_overlay;
use crate::geometry::scale::fit_within;
use crate::node::tensor::ImageTensor;
use crate::raster::composite::composite;

/// Downscale the source, build the overlay and composite it.
///
/// Pure apart from allocation: the same tensor and config always produce the
/// same buffer. The source tensor is read once and never written.
#[tracing::instrument(skip(image, config), fields(w = image.width, h = image.height))]
pub fn render_preview(image: &ImageTensor, config: &GuideConfig) -> ViewfinderResult<PreviewBuffer> {
    let src = image.to_rgba8();
    let scale = fit_within(
        Canvas {
            width: image.width,
            height: image.height,
        },
        config.resolution_limit,
    );

    let resized = if scale.factor < 1.0 {
        image::imageops::resize(
            &src,
            scale.width,
            scale.height,
            image::imageops::FilterType::Triangle,
        )
    } else {
        src
    };

    let preview = PreviewBuffer::from_rgba8(scale.width, scale.height, resized.into_raw())?;
    let overlay = build_overlay(
        f64::from(preview.width),
        f64::from(preview.height),
        config,
    );
    Ok(composite(&preview, &overlay))
}

/// Render a preview and push it to the transport sink.
///
/// Encoding or delivery failures are logged and swallowed: the side channel
/// is fire-and-forget and must never fail the invocation.
pub fn run(
    image: &ImageTensor,
    config: &GuideConfig,
    node_id: &str,
    sink: &mut dyn PreviewSink,
) -> ViewfinderResult<PreviewBuffer> {
    let composited = render_preview(image, config)?;
    let delivery = encode_png_base64(&composited).and_then(|b64| sink.send(node_id, &b64));
    if let Err(err) = delivery {
        tracing::warn!(node_id, error = %err, "preview delivery failed");
    }
    Ok(composited)
}
