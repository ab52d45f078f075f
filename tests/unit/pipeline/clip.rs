use super::*;
use crate::foundation::core::{MAX_ATTRIBUTES, Vec4};

fn vert(x: f32, y: f32, z: f32, w: f32) -> OutVertex {
    OutVertex {
        gl_position: Vec4::new(x, y, z, w),
        attributes: [Attribute::Empty; MAX_ATTRIBUTES],
    }
}

fn signed_area_xy(t: &[OutVertex; 3]) -> f32 {
    let a = t[0].gl_position;
    let b = t[1].gl_position;
    let c = t[2].gl_position;
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

#[test]
fn fully_inside_is_untouched() {
    let tri = [
        vert(-1.0, -1.0, 0.0, 1.0),
        vert(1.0, -1.0, 0.0, 1.0),
        vert(0.0, 1.0, 0.0, 1.0),
    ];
    let out = clip_triangle(&tri);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0], tri);
}

#[test]
fn fully_behind_is_dropped() {
    let tri = [
        vert(-1.0, -1.0, -7.0, -1.0),
        vert(1.0, -1.0, -7.0, -1.0),
        vert(0.0, 1.0, -7.0, -1.0),
    ];
    assert!(clip_triangle(&tri).is_empty());
}

#[test]
fn vertex_on_plane_counts_as_inside() {
    let v = vert(0.0, 0.0, -2.0, 2.0);
    assert!(is_inside_near(&v));
    assert!(!is_inside_near(&vert(0.0, 0.0, -2.1, 2.0)));
}

#[test]
fn one_vertex_behind_yields_two_triangles() {
    let z = 2.0 / 3.0;
    let tri = [
        vert(-2.0, -2.0, 2.0, 2.0),
        vert(2.0, -2.0, 2.0, 2.0),
        vert(-z, z, -2.0, z),
    ];
    let out = clip_triangle(&tri);
    assert_eq!(out.len(), 2);
    for t in &out {
        for v in t {
            assert!(v.gl_position.z + v.gl_position.w >= -1e-5);
        }
        assert!(signed_area_xy(t) > 0.0);
    }
    // Both new vertices sit exactly on the plane.
    let on_plane = out
        .iter()
        .flatten()
        .filter(|v| (v.gl_position.z + v.gl_position.w).abs() < 1e-5)
        .count();
    assert!(on_plane >= 2);
}

#[test]
fn two_vertices_behind_yields_one_triangle() {
    let z = 2.0 / 3.0;
    let tri = [
        vert(-z, -z, -2.0, z),
        vert(z, -z, -2.0, z),
        vert(-2.0, 2.0, 2.0, 2.0),
    ];
    let out = clip_triangle(&tri);
    assert_eq!(out.len(), 1);
    let t = &out[0];
    assert_eq!(t[0], tri[2]);
    assert!(signed_area_xy(t) > 0.0);
    for v in &t[1..] {
        assert!((v.gl_position.z + v.gl_position.w).abs() < 1e-5);
    }
}

#[test]
fn attributes_are_blended_at_the_crossing() {
    let mut a = vert(0.0, 0.0, 1.0, 1.0);
    let mut b = vert(1.0, 0.0, 1.0, 1.0);
    let mut c = vert(0.0, 0.0, -3.0, 1.0);
    a.attributes[0] = Attribute::Float(0.0);
    b.attributes[0] = Attribute::Float(0.0);
    c.attributes[0] = Attribute::Float(4.0);
    a.attributes[1] = Attribute::Uint(7);
    b.attributes[1] = Attribute::Uint(7);
    c.attributes[1] = Attribute::Uint(99);

    let out = clip_triangle(&[a, b, c]);
    assert_eq!(out.len(), 2);
    // b -> c: db = 2, dc = -2, t = 0.5
    let q = out[1][2];
    assert!((q.gl_position.z - -1.0).abs() < 1e-6);
    assert_eq!(q.attributes[0], Attribute::Float(2.0));
    assert_eq!(q.attributes[1], Attribute::Uint(7));
}
