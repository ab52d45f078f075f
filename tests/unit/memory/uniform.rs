use super::*;

#[test]
fn typed_accessors_match_only_their_variant() {
    let u = Uniform::from(Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)));
    assert!(u.as_mat4().is_some());
    assert!(u.as_vec4().is_none());
    assert_eq!(Uniform::from(-1).as_i32(), Some(-1));
    assert_eq!(Uniform::from(7u32).as_i32(), None);
    assert_eq!(Uniform::Empty.as_f32(), None);
}

#[test]
fn vec4_reads_back_as_vec3() {
    let u = Uniform::from(Vec4::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(u.as_vec3(), Some(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn serde_uses_snake_case_tags() {
    let json = serde_json::to_string(&Uniform::Float(0.5)).unwrap();
    assert_eq!(json, r#"{"float":0.5}"#);
    let back: Uniform = serde_json::from_str(r#"{"vec3":[1.0,2.0,3.0]}"#).unwrap();
    assert_eq!(back, Uniform::Vec3(Vec3::new(1.0, 2.0, 3.0)));
}

#[test]
fn integer_vector_accessors_cover_every_width() {
    assert_eq!(
        Uniform::from(UVec2::new(1, 2)).as_uvec2(),
        Some(UVec2::new(1, 2))
    );
    assert_eq!(
        Uniform::from(UVec3::new(1, 2, 3)).as_uvec3(),
        Some(UVec3::new(1, 2, 3))
    );
    assert_eq!(Uniform::from(UVec4::ONE).as_uvec4(), Some(UVec4::ONE));
    assert_eq!(
        Uniform::from(IVec2::new(-1, 2)).as_ivec2(),
        Some(IVec2::new(-1, 2))
    );
    assert_eq!(
        Uniform::from(IVec3::new(-1, 2, -3)).as_ivec3(),
        Some(IVec3::new(-1, 2, -3))
    );
    assert_eq!(
        Uniform::from(IVec4::NEG_ONE).as_ivec4(),
        Some(IVec4::NEG_ONE)
    );
    assert_eq!(Uniform::from(UVec2::ONE).as_ivec2(), None);
    assert_eq!(Uniform::from(IVec3::ONE).as_uvec3(), None);
}

#[test]
fn integer_vectors_round_trip_through_json_tags() {
    let json = serde_json::to_string(&Uniform::IVec2(IVec2::new(-1, 2))).unwrap();
    assert_eq!(json, r#"{"ivec2":[-1,2]}"#);
    let back: Uniform = serde_json::from_str(r#"{"uvec3":[1,2,3]}"#).unwrap();
    assert_eq!(back.as_uvec3(), Some(UVec3::new(1, 2, 3)));
}
