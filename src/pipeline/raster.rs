use crate::foundation::core::{Canvas, MAX_ATTRIBUTES, Vec2, Vec4};
use crate::pipeline::attribute::{Attribute, AttributeType};
use crate::pipeline::shader::{InFragment, OutVertex};

/// Vertices with `w` at or below this are treated as degenerate.
const MIN_W: f32 = 1e-8;
/// Triangles with a smaller screen-space doubled area cover no pixel centers.
const MIN_AREA: f32 = 1e-12;

/// Triangle setup result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RasterOutcome {
    /// The triangle was scanned; `fragments` pixel centers were covered.
    Rasterized { fragments: u64 },
    /// Back face discarded by culling.
    Culled,
    /// Screen bounds lie entirely outside the frame.
    Offscreen,
    /// Zero area or a vertex at/behind the eye.
    Degenerate,
}

#[derive(Clone, Copy, Debug)]
struct ScreenVertex {
    xy: Vec2,
    z: f32,
    inv_w: f32,
}

fn to_screen(v: &OutVertex, canvas: Canvas) -> Option<ScreenVertex> {
    let p = v.gl_position;
    if p.w.is_nan() || p.w <= MIN_W {
        return None;
    }
    let inv_w = 1.0 / p.w;
    let ndc = p.truncate() * inv_w;
    let dim = Vec2::new(canvas.width as f32, canvas.height as f32);
    Some(ScreenVertex {
        xy: (ndc.truncate() * 0.5 + Vec2::splat(0.5)) * dim,
        z: ndc.z,
        inv_w,
    })
}

fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Half-space value of `p` against the edge `a -> b`; non-negative on the inner side of a
/// counter-clockwise triangle.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    cross(b - a, p - a)
}

/// Rasterize one clipped triangle into `canvas`, calling `emit(x, y, fragment)` for every covered
/// pixel center in row-major order.
///
/// Screen space has its origin at the bottom-left. A pixel `(x, y)` is covered when its center
/// `(x + 0.5, y + 0.5)` lies inside or on the boundary of the triangle. Depth is interpolated
/// linearly in screen space; float attributes are interpolated perspective-correctly and integer
/// attributes are taken from the first vertex. Attributes are converted to the types in `vs2fs`.
pub fn rasterize_triangle(
    tri: &[OutVertex; 3],
    canvas: Canvas,
    cull_back_faces: bool,
    vs2fs: &[AttributeType; MAX_ATTRIBUTES],
    mut emit: impl FnMut(u32, u32, InFragment),
) -> RasterOutcome {
    if canvas.is_empty() {
        return RasterOutcome::Degenerate;
    }
    let [Some(s0), Some(s1), Some(s2)] = tri.each_ref().map(|v| to_screen(v, canvas)) else {
        return RasterOutcome::Degenerate;
    };

    let mut verts = [(s0, &tri[0]), (s1, &tri[1]), (s2, &tri[2])];
    let mut area = cross(s1.xy - s0.xy, s2.xy - s0.xy);
    if area.is_nan() || area.abs() <= MIN_AREA {
        return RasterOutcome::Degenerate;
    }
    if area < 0.0 {
        if cull_back_faces {
            return RasterOutcome::Culled;
        }
        verts.swap(1, 2);
        area = -area;
    }
    let [(a, va), (b, vb), (c, vc)] = verts;

    let dim = Vec2::new(canvas.width as f32, canvas.height as f32);
    let min = a.xy.min(b.xy).min(c.xy).floor().max(Vec2::ZERO);
    let max = a.xy.max(b.xy).max(c.xy).ceil().min(dim);
    if min.x >= max.x || min.y >= max.y {
        return RasterOutcome::Offscreen;
    }
    let (x0, y0, x1, y1) = (min.x as u32, min.y as u32, max.x as u32, max.y as u32);

    let attrs = [&va.attributes, &vb.attributes, &vc.attributes];
    let inv_area = 1.0 / area;
    let mut fragments = 0u64;

    for y in y0..y1 {
        for x in x0..x1 {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let e0 = edge(a.xy, b.xy, p);
            let e1 = edge(b.xy, c.xy, p);
            let e2 = edge(c.xy, a.xy, p);
            if e0 < 0.0 || e1 < 0.0 || e2 < 0.0 {
                continue;
            }
            let l = [e1 * inv_area, e2 * inv_area, e0 * inv_area];

            let z = l[0] * a.z + l[1] * b.z + l[2] * c.z;
            let pw = [l[0] * a.inv_w, l[1] * b.inv_w, l[2] * c.inv_w];
            let inv_w = pw[0] + pw[1] + pw[2];
            let persp = if inv_w != 0.0 {
                [pw[0] / inv_w, pw[1] / inv_w, pw[2] / inv_w]
            } else {
                l
            };

            let mut frag = InFragment {
                gl_frag_coord: Vec4::new(p.x, p.y, z, inv_w),
                attributes: [Attribute::Empty; MAX_ATTRIBUTES],
            };
            for (slot, out) in frag.attributes.iter_mut().enumerate() {
                *out = interpolate(vs2fs[slot], attrs.map(|a| &a[slot]), persp);
            }
            emit(x, y, frag);
            fragments += 1;
        }
    }

    RasterOutcome::Rasterized { fragments }
}

fn interpolate(ty: AttributeType, src: [&Attribute; 3], w: [f32; 3]) -> Attribute {
    if ty.is_integer() {
        return Attribute::from_uint_lanes(ty, src[0].uint_lanes());
    }
    if !ty.is_float() {
        return Attribute::Empty;
    }
    let [a, b, c] = src.map(Attribute::float_lanes);
    let lanes = std::array::from_fn(|i| a[i] * w[0] + b[i] * w[1] + c[i] * w[2]);
    Attribute::from_float_lanes(ty, lanes)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/raster.rs"]
mod tests;
