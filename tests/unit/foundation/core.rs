use super::*;

#[test]
fn canvas_pixel_count_and_emptiness() {
    let c = Canvas {
        width: 4,
        height: 3,
    };
    assert_eq!(c.pixel_count(), 12);
    assert!(!c.is_empty());
    assert!(
        Canvas {
            width: 0,
            height: 3
        }
        .is_empty()
    );
}
