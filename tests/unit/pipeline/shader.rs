use super::*;

#[test]
fn out_vertex_defaults_to_homogeneous_origin() {
    let v = OutVertex::default();
    assert_eq!(v.gl_position, Vec4::new(0.0, 0.0, 0.0, 1.0));
    assert!(v.attributes.iter().all(|a| *a == Attribute::Empty));
}

#[test]
fn interface_helpers_fall_back_on_missing_or_mistyped_slots() {
    let uniforms = vec![
        Uniform::Mat4(Mat4::from_scale(Vec3::splat(2.0))),
        Uniform::Vec3(Vec3::new(1.0, 2.0, 3.0)),
        Uniform::Int(-1),
    ];
    let textures = vec![Texture::default()];
    let si = ShaderInterface::new(&uniforms, &textures);

    assert_eq!(si.mat4(0), Mat4::from_scale(Vec3::splat(2.0)));
    assert_eq!(si.mat4(1), Mat4::IDENTITY);
    assert_eq!(si.mat4(99), Mat4::IDENTITY);
    assert_eq!(si.vec3(1), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(si.int(2), -1);
    assert_eq!(si.float(2), 0.0);
    assert!(si.texture(0).is_some());
    assert!(si.texture(1).is_none());
}

#[test]
fn integer_vector_readers_return_zero_unless_types_match() {
    let uniforms = vec![
        Uniform::from(UVec2::new(1, 2)),
        Uniform::from(UVec3::new(3, 4, 5)),
        Uniform::from(UVec4::new(6, 7, 8, 9)),
        Uniform::from(IVec2::new(-1, 2)),
        Uniform::from(IVec3::new(-3, 4, -5)),
        Uniform::from(IVec4::new(6, -7, 8, -9)),
    ];
    let si = ShaderInterface::new(&uniforms, &[]);

    assert_eq!(si.uvec2(0), UVec2::new(1, 2));
    assert_eq!(si.uvec3(1), UVec3::new(3, 4, 5));
    assert_eq!(si.uvec4(2), UVec4::new(6, 7, 8, 9));
    assert_eq!(si.ivec2(3), IVec2::new(-1, 2));
    assert_eq!(si.ivec3(4), IVec3::new(-3, 4, -5));
    assert_eq!(si.ivec4(5), IVec4::new(6, -7, 8, -9));

    // Signedness and width must both match.
    assert_eq!(si.ivec2(0), IVec2::ZERO);
    assert_eq!(si.uvec3(4), UVec3::ZERO);
    assert_eq!(si.uvec4(1), UVec4::ZERO);
    assert_eq!(si.ivec4(9), IVec4::ZERO);
}
