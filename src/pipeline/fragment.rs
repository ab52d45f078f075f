use crate::foundation::core::Vec4;
use crate::foundation::math::{mix, rgba_from_unorm8, unorm8_rgba};
use crate::memory::frame::Frame;

/// Minimum alpha for a fragment to write depth.
pub const DEPTH_WRITE_ALPHA: f32 = 0.5;

/// Per-fragment operations: depth test, alpha blend, color and depth write.
///
/// The fragment passes when `depth` is strictly less than the stored depth; a failing fragment
/// changes nothing. A passing fragment is blended over the stored color by its own alpha (opaque
/// fragments replace it) and writes depth only when alpha exceeds [`DEPTH_WRITE_ALPHA`].
/// Returns whether the depth test passed. Pixels outside the frame are ignored.
pub fn write_fragment(frame: &mut Frame, x: u32, y: u32, depth: f32, color: Vec4) -> bool {
    let Some(idx) = frame.pixel_index(x, y) else {
        return false;
    };
    let passes = depth < frame.depth()[idx];
    if !passes {
        return false;
    }

    let color = color.clamp(Vec4::ZERO, Vec4::ONE);
    let alpha = color.w;
    let blended = if alpha < 1.0 {
        mix(rgba_from_unorm8(frame.pixel_color(idx)), color, alpha)
    } else {
        color
    };
    frame.set_pixel_color(idx, unorm8_rgba(blended));
    if alpha > DEPTH_WRITE_ALPHA {
        frame.set_pixel_depth(idx, depth);
    }
    true
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/fragment.rs"]
mod tests;
