use super::*;
use crate::foundation::core::Vec4;
use crate::memory::gpu::GpuLimits;
use crate::memory::program::Program;
use crate::pipeline::shader::{InFragment, InVertex, OutFragment};

fn small_memory() -> GpuMemory {
    GpuMemory::new(GpuLimits::default().with_max_programs(2)).with_framebuffer(Frame::new(4, 4))
}

fn fullscreen_program() -> Program {
    Program::new(
        |v: &InVertex, _: &ShaderInterface<'_>| {
            let corners = [
                Vec4::new(-1.0, -1.0, 0.0, 1.0),
                Vec4::new(3.0, -1.0, 0.0, 1.0),
                Vec4::new(-1.0, 3.0, 0.0, 1.0),
            ];
            OutVertex {
                gl_position: corners[(v.gl_vertex_id % 3) as usize],
                ..OutVertex::default()
            }
        },
        |_: &InFragment, _: &ShaderInterface<'_>| OutFragment {
            gl_frag_color: Vec4::new(0.0, 1.0, 0.0, 1.0),
        },
    )
}

#[test]
fn clear_only_touches_selected_planes() {
    let mut frame = Frame::new(2, 1);
    apply_clear(&mut frame, &ClearCommand::depth_only(0.25));
    assert_eq!(frame.color_at(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(frame.depth_at(1, 0), Some(0.25));
    let orange = ClearCommand::color_only(Vec4::new(1.0, 0.5, 0.0, 1.0));
    apply_clear(&mut frame, &orange);
    assert_eq!(frame.color_at(1, 0), Some([255, 128, 0, 255]));
    assert_eq!(frame.depth_at(0, 0), Some(0.25));
}

#[test]
fn fullscreen_triangle_fills_frame() {
    let mut mem = small_memory();
    mem.set_program(0, fullscreen_program()).unwrap();
    let mut cb = CommandBuffer::new();
    cb.push_draw(DrawCommand::new(0, 3)).unwrap();

    let stats = gpu_execute(&mut mem, &cb);
    assert_eq!(stats.vertices_shaded, 3);
    assert_eq!(stats.triangles_rasterized, 1);
    assert_eq!(stats.fragments_written, 16);
    let mut pixels = mem.framebuffer().color().chunks_exact(4);
    assert!(pixels.all(|px| px == [0, 255, 0, 255]));
}

#[test]
fn misconfigured_draws_are_skipped_but_numbered() {
    let mut mem = small_memory();
    let mut cb = CommandBuffer::new();
    cb.push_draw(DrawCommand::new(1, 3)).unwrap();
    cb.push_draw(DrawCommand::new(40, 3)).unwrap();
    cb.push_clear(ClearCommand::default()).unwrap();

    let stats = gpu_execute(&mut mem, &cb);
    assert_eq!(stats.draws, 2);
    assert_eq!(stats.draws_skipped, 2);
    assert_eq!(stats.clears, 1);
    assert_eq!(stats.vertices_shaded, 0);
}

#[test]
fn leftover_vertices_are_shaded_but_not_assembled() {
    let mut mem = small_memory();
    mem.set_program(0, fullscreen_program()).unwrap();
    let mut cb = CommandBuffer::new();
    cb.push_draw(DrawCommand::new(0, 5)).unwrap();

    let stats = gpu_execute(&mut mem, &cb);
    assert_eq!(stats.vertices_shaded, 5);
    assert_eq!(stats.triangles_assembled, 1);
}

#[test]
fn off_frame_triangle_is_assembled_but_not_rasterized() {
    let mut mem = small_memory();
    let program = Program::new(
        |v: &InVertex, _: &ShaderInterface<'_>| {
            let x = 2.0 + v.gl_vertex_id as f32;
            let y = (v.gl_vertex_id % 2) as f32;
            OutVertex {
                gl_position: Vec4::new(x, y, 0.0, 1.0),
                ..OutVertex::default()
            }
        },
        |_: &InFragment, _: &ShaderInterface<'_>| OutFragment::default(),
    );
    mem.set_program(0, program).unwrap();
    let mut cb = CommandBuffer::new();
    cb.push_draw(DrawCommand::new(0, 3)).unwrap();

    let stats = gpu_execute(&mut mem, &cb);
    assert_eq!(stats.draws_skipped, 0);
    assert_eq!(stats.triangles_assembled, 1);
    assert_eq!(stats.triangles_culled, 0);
    assert_eq!(stats.triangles_rasterized, 0);
    assert_eq!(stats.fragments_shaded, 0);
}
