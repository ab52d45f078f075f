use crate::command::buffer::{ClearCommand, Command, CommandBuffer, DrawCommand};
use crate::foundation::math::unorm8_rgba;
use crate::memory::frame::Frame;
use crate::memory::gpu::GpuMemory;
use crate::pipeline::clip::clip_triangle;
use crate::pipeline::fragment::write_fragment;
use crate::pipeline::puller::VertexPuller;
use crate::pipeline::raster::{RasterOutcome, rasterize_triangle};
use crate::pipeline::shader::{OutVertex, ShaderInterface};

/// Counters collected while executing a command buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecStats {
    pub clears: u64,
    pub draws: u64,
    /// Draws skipped because their program slot is missing or incomplete.
    pub draws_skipped: u64,
    pub vertices_shaded: u64,
    pub triangles_assembled: u64,
    /// Triangles entirely behind the near plane.
    pub triangles_clipped_away: u64,
    /// Triangles (after clipping) whose screen bounds overlapped the frame and were scanned.
    pub triangles_rasterized: u64,
    pub triangles_culled: u64,
    pub fragments_shaded: u64,
    /// Fragments that passed the depth test.
    pub fragments_written: u64,
}

/// Execute `commands` in order against `mem`.
///
/// Draws are numbered from 0 in command order, counting every draw whether or not it produced
/// anything. A draw whose program slot is missing or lacks a shader is skipped; out-of-range
/// buffer reads degrade to zeros. Execution itself cannot fail.
#[tracing::instrument(skip(mem, commands), fields(commands = commands.len()))]
pub fn gpu_execute(mem: &mut GpuMemory, commands: &CommandBuffer) -> ExecStats {
    let mut stats = ExecStats::default();
    let mut draw_id = 0u32;

    for command in commands {
        match command {
            Command::Clear(clear) => {
                apply_clear(&mut mem.framebuffer, clear);
                stats.clears += 1;
            }
            Command::Draw(draw) => {
                execute_draw(mem, draw, draw_id, &mut stats);
                stats.draws += 1;
                draw_id = draw_id.wrapping_add(1);
            }
        }
    }

    tracing::debug!(?stats, "command buffer executed");
    stats
}

fn apply_clear(frame: &mut Frame, clear: &ClearCommand) {
    if clear.clear_color {
        frame.fill_color(unorm8_rgba(clear.color));
    }
    if clear.clear_depth {
        frame.fill_depth(clear.depth);
    }
}

fn execute_draw(mem: &mut GpuMemory, draw: &DrawCommand, draw_id: u32, stats: &mut ExecStats) {
    let Some(program) = mem.programs.get(draw.program_id as usize) else {
        tracing::warn!(
            draw_id,
            program_id = draw.program_id,
            "draw references a program outside memory, skipped"
        );
        stats.draws_skipped += 1;
        return;
    };
    let Some((vs, fs)) = program.shaders() else {
        tracing::warn!(
            draw_id,
            program_id = draw.program_id,
            "draw references an incomplete program, skipped"
        );
        stats.draws_skipped += 1;
        return;
    };

    let si = ShaderInterface::new(&mem.uniforms, &mem.textures);
    let puller = VertexPuller::from_slots(&mem.buffers, &draw.vao);
    let frame = &mut mem.framebuffer;
    let canvas = frame.canvas();
    let cull = draw.backface_culling;

    let mut tri = [OutVertex::default(); 3];
    for n in 0..draw.nof_vertices {
        let corner = (n % 3) as usize;
        tri[corner] = vs(&puller.pull(n, draw_id), &si);
        stats.vertices_shaded += 1;
        if corner != 2 {
            continue;
        }

        stats.triangles_assembled += 1;
        let clipped = clip_triangle(&tri);
        if clipped.is_empty() {
            stats.triangles_clipped_away += 1;
        }
        for t in &clipped {
            let outcome = rasterize_triangle(t, canvas, cull, &program.vs2fs, |x, y, frag| {
                let out = fs(&frag, &si);
                stats.fragments_shaded += 1;
                if write_fragment(frame, x, y, frag.gl_frag_coord.z, out.gl_frag_color) {
                    stats.fragments_written += 1;
                }
            });
            match outcome {
                RasterOutcome::Rasterized { .. } => stats.triangles_rasterized += 1,
                RasterOutcome::Culled => stats.triangles_culled += 1,
                RasterOutcome::Offscreen | RasterOutcome::Degenerate => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/executor.rs"]
mod tests;
