use smallvec::{SmallVec, smallvec};

use crate::pipeline::attribute::Attribute;
use crate::pipeline::shader::OutVertex;

/// Triangles produced by clipping one triangle against the near plane (0, 1 or 2).
pub type ClippedTriangles = SmallVec<[[OutVertex; 3]; 2]>;

/// Near-plane test in clip space: `z >= -w`.
pub fn is_inside_near(v: &OutVertex) -> bool {
    v.gl_position.z >= -v.gl_position.w
}

/// Point where the segment from `inside` to `outside` crosses `z = -w`.
///
/// Position and float attributes are blended linearly in clip space; integer attributes keep the
/// value of `inside`.
fn near_intersection(inside: &OutVertex, outside: &OutVertex) -> OutVertex {
    let a = inside.gl_position;
    let b = outside.gl_position;
    let da = a.z + a.w;
    let db = b.z + b.w;
    // da >= 0 > db, so the denominator is positive.
    let t = da / (da - db);

    let mut out = OutVertex {
        gl_position: a.lerp(b, t),
        attributes: inside.attributes,
    };
    for (dst, (sa, sb)) in out
        .attributes
        .iter_mut()
        .zip(inside.attributes.iter().zip(outside.attributes.iter()))
    {
        *dst = Attribute::lerp(sa, sb, t);
    }
    out
}

/// Clip a triangle against the near plane, preserving winding order.
///
/// * all three vertices inside: the triangle is returned unchanged
/// * one vertex outside: the remaining quad is split into two triangles
/// * two vertices outside: one smaller triangle
/// * all outside: nothing
pub fn clip_triangle(tri: &[OutVertex; 3]) -> ClippedTriangles {
    let inside = [
        is_inside_near(&tri[0]),
        is_inside_near(&tri[1]),
        is_inside_near(&tri[2]),
    ];
    let n_inside = inside.iter().filter(|&&b| b).count();

    match n_inside {
        3 => smallvec![*tri],
        2 => {
            let Some(k) = inside.iter().position(|&b| !b) else {
                return SmallVec::new();
            };
            let a = &tri[k];
            let b = &tri[(k + 1) % 3];
            let c = &tri[(k + 2) % 3];
            let p = near_intersection(b, a);
            let q = near_intersection(c, a);
            smallvec![[p, *b, *c], [p, *c, q]]
        }
        1 => {
            let Some(k) = inside.iter().position(|&b| b) else {
                return SmallVec::new();
            };
            let a = &tri[k];
            let p = near_intersection(a, &tri[(k + 1) % 3]);
            let q = near_intersection(a, &tri[(k + 2) % 3]);
            smallvec![[*a, p, q]]
        }
        _ => SmallVec::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/clip.rs"]
mod tests;
