use super::*;
use crate::foundation::core::{Mat4, Vec4};

#[test]
fn default_limits_match_fixed_capacities() {
    let mem = GpuMemory::default();
    assert_eq!(mem.limits(), GpuLimits::default());
    assert_eq!(mem.uniforms().len(), 10_000);
    assert!(mem.buffer(99).is_none());
    assert!(mem.program(99).is_some());
    assert!(mem.program(100).is_none());
}

#[test]
fn setters_reject_ids_past_capacity() {
    let limits = GpuLimits::default()
        .with_max_buffers(2)
        .with_max_uniforms(3)
        .with_max_textures(1)
        .with_max_programs(1);
    let mut mem = GpuMemory::new(limits);

    assert!(mem.set_buffer(1, Buffer::from_pod(&[1.0f32])).is_ok());
    let err = mem.set_buffer(2, Buffer::default()).unwrap_err();
    assert!(err.to_string().contains("capacity error:"));
    assert!(mem.set_uniform(3, 1.0f32).is_err());
    assert!(mem.set_texture(1, Texture::default()).is_err());
    assert!(mem.set_program(1, Program::default()).is_err());
}

#[test]
fn ids_are_stable_slots() {
    let mut mem = GpuMemory::default();
    mem.set_uniform(5, Mat4::IDENTITY).unwrap();
    mem.set_uniform(6, Vec4::ONE).unwrap();
    assert_eq!(mem.uniform(5), Some(&Uniform::Mat4(Mat4::IDENTITY)));
    assert_eq!(mem.uniform(6), Some(&Uniform::Vec4(Vec4::ONE)));

    mem.set_buffer(3, Buffer::from_pod(&[1u8, 2, 3])).unwrap();
    assert_eq!(mem.buffer(3).map(Buffer::size), Some(3));
    assert!(mem.remove_buffer(3).is_some());
    assert!(mem.buffer(3).is_none());
}

#[test]
fn framebuffer_can_be_swapped() {
    let mut mem = GpuMemory::default().with_framebuffer(Frame::new(4, 4));
    let old = mem.set_framebuffer(Frame::new(2, 2));
    assert_eq!(old.width(), 4);
    assert_eq!(mem.framebuffer().width(), 2);
}

#[test]
fn shader_interface_exposes_full_arrays() {
    let mem = GpuMemory::default();
    let si = mem.shader_interface();
    assert_eq!(si.uniforms.len(), 10_000);
    assert_eq!(si.textures.len(), 1_000);
}
