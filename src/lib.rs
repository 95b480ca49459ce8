//! Viewfinder overlays non-destructive compositional guides onto image previews.
//!
//! The engine computes exact guide geometry (grid, diagonals, phi grid,
//! pyramid, golden triangles, perspective fan) for an arbitrary aspect ratio,
//! scales it into a downsampled preview, and composites the strokes with a
//! configurable color, thickness and blend mode. The source image and mask
//! flow through untouched — the preview travels on a side channel only.
//!
//! # Pipeline overview
//!
//! 1. **Scale**: [`fit_within`] bounds the preview by the resolution limit
//! 2. **Build**: [`build_overlay`] turns `(w, h, GuideConfig)` into segments
//! 3. **Composite**: [`composite`] rasterizes strokes onto a buffer copy
//! 4. **Deliver**: [`preview::run`](crate::pipeline::preview::run) encodes a
//!    PNG and notifies a [`PreviewSink`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure geometry**: builders depend only on dimensions and config.
//! - **No passthrough mutation**: compositing always writes a new buffer.
//! - **Straight-alpha RGBA8** end-to-end in the raster path.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Host-facing parameter set and validated configuration.
pub mod config;
/// Preview encoding and the transport sink boundary.
pub mod encode;
/// Guide geometry: scaling and per-guide segment builders.
pub mod geometry;
/// Graph-host adapter: tensors, registration metadata, execute entry point.
pub mod node;
/// Per-invocation orchestration.
pub mod pipeline;
/// Stroke rasterization and blend-mode compositing.
pub mod raster;

pub use config::params::{
    BlendMode, GoldenTriangleSet, GridConfig, GuideConfig, GuideParams, PerspectiveConfig,
    PyramidMode, parse_color_string,
};
pub use encode::png::encode_png_base64;
pub use encode::sink::{InMemorySink, PREVIEW_EVENT, PreviewSink};
pub use foundation::core::{Canvas, LineSegment, Point, PreviewBuffer, Rgba8, Vec2};
pub use foundation::error::{ViewfinderError, ViewfinderResult};
pub use geometry::builders::{
    INV_PHI, Overlay, build_overlay, diagonals, golden_triangles, grid, perspective, phi_grid,
    pyramid,
};
pub use geometry::scale::{PreviewScale, fit_within};
pub use node::adapter::{GuideNode, change_token, input_spec};
pub use node::tensor::{ImageTensor, MaskTensor};
pub use pipeline::preview::render_preview;
pub use raster::composite::composite;
