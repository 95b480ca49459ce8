/// Per-guide segment builders and overlay assembly.
pub mod builders;
/// Preview downscale computation.
pub mod scale;
