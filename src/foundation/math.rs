/// Convert a channel byte to a unit-interval float.
pub(crate) fn unit_from_u8(v: u8) -> f32 {
    f32::from(v) / 255.0
}

/// Convert a unit-interval float back to a channel byte with rounding.
pub(crate) fn u8_from_unit(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
