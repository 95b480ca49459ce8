use super::*;

#[test]
fn from_rgba8_validates_length() {
    assert!(PreviewBuffer::from_rgba8(2, 2, vec![0; 16]).is_ok());
    assert!(PreviewBuffer::from_rgba8(2, 2, vec![0; 15]).is_err());
    assert!(PreviewBuffer::from_rgba8(3, 1, vec![0; 16]).is_err());
}

#[test]
fn pixel_round_trips_through_put_pixel() {
    let mut buf = PreviewBuffer::filled(3, 2, Rgba8::new(0, 0, 0, 255));
    let px = Rgba8::new(10, 20, 30, 40);
    buf.put_pixel(2, 1, px);
    assert_eq!(buf.pixel(2, 1), px);
    assert_eq!(buf.pixel(0, 0), Rgba8::new(0, 0, 0, 255));
}

#[test]
fn segment_length_is_euclidean() {
    let seg = LineSegment::new((0.0, 0.0), (3.0, 4.0));
    assert_eq!(seg.length(), 5.0);
    assert_eq!(LineSegment::new((1.0, 1.0), (1.0, 1.0)).length(), 0.0);
}

#[test]
fn canvas_max_dim_picks_larger_axis() {
    assert_eq!(
        Canvas {
            width: 640,
            height: 480
        }
        .max_dim(),
        640
    );
    assert_eq!(
        Canvas {
            width: 480,
            height: 640
        }
        .max_dim(),
        640
    );
}
