/// PNG + base64 encoding of preview buffers.
pub mod png;
/// The transport sink boundary.
pub mod sink;
