use super::*;

fn checker_rgb() -> Texture {
    // 2x2, bottom row red/green, top row blue/white.
    #[rustfmt::skip]
    let data = vec![
        255, 0, 0,     0, 255, 0,
        0, 0, 255,     255, 255, 255,
    ];
    Texture::new(2, 2, 3, data).unwrap()
}

#[test]
fn new_validates_size_and_channels() {
    assert!(Texture::new(2, 2, 3, vec![0u8; 11]).is_err());
    assert!(Texture::new(1, 1, 5, vec![0u8; 5]).is_err());
    assert!(Texture::new(1, 1, 1, vec![9u8]).is_ok());
}

#[test]
fn empty_texture_samples_zero() {
    assert_eq!(Texture::default().sample(Vec2::new(0.3, 0.3)), Vec4::ZERO);
}

#[test]
fn nearest_sampling_picks_texels_and_fills_alpha() {
    let t = checker_rgb();
    assert_eq!(t.sample(Vec2::new(0.1, 0.1)), Vec4::X + Vec4::W);
    assert_eq!(t.sample(Vec2::new(0.9, 0.1)), Vec4::Y + Vec4::W);
    assert_eq!(t.sample(Vec2::new(0.1, 0.9)), Vec4::Z + Vec4::W);
    assert_eq!(read_texture(&t, Vec2::new(0.9, 0.9)), Vec4::ONE);
}

#[test]
fn uv_wraps_by_fractional_part() {
    let t = checker_rgb();
    let wrapped = t.sample(Vec2::new(1.1, 2.1));
    assert_eq!(wrapped, t.sample(Vec2::new(0.1, 0.1)));
    let below_zero = t.sample(Vec2::new(-0.1, 0.1));
    assert_eq!(below_zero, t.sample(Vec2::new(0.9, 0.1)));
}

#[test]
fn single_channel_leaves_others_default() {
    let t = Texture::new(1, 1, 1, vec![51u8]).unwrap();
    assert_eq!(t.sample(Vec2::ZERO), Vec4::new(0.2, 0.0, 0.0, 1.0));
}

#[test]
fn from_image_flips_rows() {
    let mut img = image::RgbaImage::new(1, 2);
    img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255])); // top row
    img.put_pixel(0, 1, image::Rgba([0, 0, 255, 255])); // bottom row
    let t = Texture::from_image(&image::DynamicImage::ImageRgba8(img));
    assert_eq!(t.channels(), 4);
    assert_eq!(t.sample(Vec2::new(0.5, 0.9)), Vec4::X + Vec4::W);
    assert_eq!(t.sample(Vec2::new(0.5, 0.1)), Vec4::Z + Vec4::W);
}
