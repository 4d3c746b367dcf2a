use super::*;

#[test]
fn surface_size_rounds_up() {
    assert_eq!(
        surface_size(Rect::new(0.0, 0.0, 374.5, 667.0)).unwrap(),
        (375, 667)
    );
}

#[test]
fn surface_size_rejects_empty_and_huge() {
    assert!(surface_size(Rect::new(0.0, 0.0, 0.0, 10.0)).is_err());
    assert!(surface_size(Rect::new(0.0, 0.0, 1e6, 10.0)).is_err());
    assert!(surface_size(Rect::new(0.0, 0.0, f64::INFINITY, 10.0)).is_err());
}

#[test]
fn pixel_reads_row_major() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
}
