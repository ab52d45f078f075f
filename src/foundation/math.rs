use crate::foundation::core::Vec4;

/// Float channel in `[0,1]` to a byte, rounding to nearest.
pub(crate) fn unorm8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub(crate) fn unorm8_rgba(c: Vec4) -> [u8; 4] {
    [unorm8(c.x), unorm8(c.y), unorm8(c.z), unorm8(c.w)]
}

pub(crate) fn rgba_from_unorm8(c: [u8; 4]) -> Vec4 {
    Vec4::new(
        f32::from(c[0]),
        f32::from(c[1]),
        f32::from(c[2]),
        f32::from(c[3]),
    ) / 255.0
}

/// `a*(1-t) + b*t`, the GLSL `mix`.
pub(crate) fn mix(a: Vec4, b: Vec4, t: f32) -> Vec4 {
    a * (1.0 - t) + b * t
}

/// GLSL `sign`: zero stays zero.
pub(crate) fn sign(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
