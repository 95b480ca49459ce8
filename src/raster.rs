pub(crate) mod blend;
/// Stroke rasterization onto preview buffers.
pub mod composite;
