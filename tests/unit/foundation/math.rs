use super::*;

#[test]
fn unorm8_rounds_and_clamps() {
    assert_eq!(unorm8(0.0), 0);
    assert_eq!(unorm8(1.0), 255);
    assert_eq!(unorm8(0.5), 128);
    assert_eq!(unorm8(-3.0), 0);
    assert_eq!(unorm8(7.0), 255);
}

#[test]
fn unorm8_roundtrips_every_byte() {
    for b in 0u8..=255 {
        let c = rgba_from_unorm8([b, b, b, b]);
        assert_eq!(unorm8_rgba(c), [b, b, b, b]);
    }
}

#[test]
fn mix_endpoints() {
    let a = Vec4::new(0.0, 0.2, 0.4, 1.0);
    let b = Vec4::new(1.0, 0.8, 0.6, 0.0);
    assert_eq!(mix(a, b, 0.0), a);
    assert_eq!(mix(a, b, 1.0), b);
}

#[test]
fn sign_keeps_zero() {
    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-2.0), -1.0);
    assert_eq!(sign(3.0), 1.0);
}
