use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ViewfinderError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ViewfinderError::raster("x")
            .to_string()
            .contains("raster error:")
    );
    assert!(
        ViewfinderError::encode("x")
            .to_string()
            .contains("encode error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ViewfinderError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
