use crate::command::buffer::{ClearCommand, CommandBuffer, DrawCommand};
use crate::foundation::core::{DEFAULT_CLEAR_DEPTH, Mat4, Vec3, Vec4};
use crate::foundation::error::{GpuError, GpuResult};
use crate::memory::gpu::GpuMemory;
use crate::memory::program::Program;
use crate::model::shaders::{draw_model_fragment_shader, draw_model_vertex_shader};
use crate::model::types::{Model, Node};
use crate::pipeline::attribute::AttributeType;
use crate::pipeline::vertex_array::VertexArray;

/// Uniform slot of the view-projection matrix.
pub const VIEW_PROJECTION_SLOT: usize = 0;
/// Uniform slot of the light position (vec3, world space).
pub const LIGHT_POSITION_SLOT: usize = 1;
/// Uniform slot of the camera position (vec3, world space).
pub const CAMERA_POSITION_SLOT: usize = 2;

/// First uniform slot used by per-draw data.
pub const DRAW_UNIFORMS_BASE: usize = 10;
/// Uniform slots reserved for each draw.
pub const DRAW_UNIFORMS_STRIDE: usize = 5;

/// Offsets of per-draw uniforms relative to [`draw_uniform_base`].
pub const MODEL_MATRIX_OFFSET: usize = 0;
pub const INVERSE_TRANSPOSE_OFFSET: usize = 1;
pub const DIFFUSE_COLOR_OFFSET: usize = 2;
pub const DIFFUSE_TEXTURE_OFFSET: usize = 3;
pub const DOUBLE_SIDED_OFFSET: usize = 4;

/// Program slot the model program is installed in.
pub const DRAW_MODEL_PROGRAM: u32 = 0;

/// Background used by the clear that opens a prepared model.
pub const MODEL_CLEAR_COLOR: Vec4 = Vec4::new(0.1, 0.15, 0.1, 1.0);

/// First uniform slot holding data for draw `draw_id`.
pub fn draw_uniform_base(draw_id: u32) -> usize {
    DRAW_UNIFORMS_BASE + draw_id as usize * DRAW_UNIFORMS_STRIDE
}

/// The model program: Lambert-shaded, optionally textured meshes.
pub fn draw_model_program() -> Program {
    Program::new(draw_model_vertex_shader, draw_model_fragment_shader).with_vs2fs([
        AttributeType::Vec3,
        AttributeType::Vec3,
        AttributeType::Vec2,
        AttributeType::Uint,
    ])
}

/// Write the scene-wide uniforms read by the model program.
pub fn set_scene_uniforms(
    mem: &mut GpuMemory,
    view_projection: Mat4,
    light: Vec3,
    camera: Vec3,
) -> GpuResult<()> {
    mem.set_uniform(VIEW_PROJECTION_SLOT as u32, view_projection)?;
    mem.set_uniform(LIGHT_POSITION_SLOT as u32, light)?;
    mem.set_uniform(CAMERA_POSITION_SLOT as u32, camera)?;
    Ok(())
}

/// Upload `model` into `mem` and record the commands that draw it.
///
/// Buffers and textures land at their model ids, the model program at
/// [`DRAW_MODEL_PROGRAM`]. A clear is recorded first, then one draw per node with a mesh in
/// depth-first order. Draw ids continue from the draws already in `cb`, and per-draw uniforms
/// are written at [`draw_uniform_base`] of each draw's id.
#[tracing::instrument(skip_all, fields(meshes = model.meshes.len(), roots = model.roots.len()))]
pub fn prepare_model(mem: &mut GpuMemory, cb: &mut CommandBuffer, model: &Model) -> GpuResult<()> {
    for (id, buffer) in model.buffers.iter().enumerate() {
        mem.set_buffer(slot_id(id, "buffer")?, buffer.clone())?;
    }
    for (id, texture) in model.textures.iter().enumerate() {
        mem.set_texture(slot_id(id, "texture")?, texture.clone())?;
    }
    mem.set_program(DRAW_MODEL_PROGRAM, draw_model_program())?;

    cb.push_clear(ClearCommand::new(MODEL_CLEAR_COLOR, DEFAULT_CLEAR_DEPTH))?;

    let mut next_draw_id = slot_id(cb.draw_count(), "draw")?;
    for root in &model.roots {
        prepare_node(mem, cb, model, root, Mat4::IDENTITY, &mut next_draw_id)?;
    }
    tracing::debug!(draws = cb.draw_count(), "model prepared");
    Ok(())
}

fn prepare_node(
    mem: &mut GpuMemory,
    cb: &mut CommandBuffer,
    model: &Model,
    node: &Node,
    parent: Mat4,
    next_draw_id: &mut u32,
) -> GpuResult<()> {
    let matrix = parent * node.model_matrix;

    if let Some(mesh_id) = node.mesh {
        let Some(mesh) = model.meshes.get(mesh_id) else {
            let count = model.meshes.len();
            let msg = format!("node references mesh {mesh_id}, model has {count}");
            return Err(GpuError::validation(msg));
        };

        let mut vao = VertexArray::default();
        vao.attributes[0] = mesh.position;
        vao.attributes[1] = mesh.normal;
        vao.attributes[2] = mesh.tex_coord;
        vao.index = mesh.index;
        let draw = DrawCommand::new(DRAW_MODEL_PROGRAM, mesh.nof_indices)
            .with_vao(vao)
            .with_backface_culling(!mesh.double_sided);
        cb.push_draw(draw)?;

        let base = draw_uniform_base(*next_draw_id);
        let slot = |offset: usize| slot_id(base + offset, "uniform");
        let normal_matrix = matrix.inverse().transpose();
        let texture = mesh.diffuse_texture.and_then(|t| i32::try_from(t).ok());
        let double_sided = if mesh.double_sided { 1.0f32 } else { 0.0 };
        mem.set_uniform(slot(MODEL_MATRIX_OFFSET)?, matrix)?;
        mem.set_uniform(slot(INVERSE_TRANSPOSE_OFFSET)?, normal_matrix)?;
        mem.set_uniform(slot(DIFFUSE_COLOR_OFFSET)?, mesh.diffuse_color)?;
        mem.set_uniform(slot(DIFFUSE_TEXTURE_OFFSET)?, texture.unwrap_or(-1))?;
        mem.set_uniform(slot(DOUBLE_SIDED_OFFSET)?, double_sided)?;
        *next_draw_id = next_draw_id.wrapping_add(1);
    }

    for child in &node.children {
        prepare_node(mem, cb, model, child, matrix, next_draw_id)?;
    }
    Ok(())
}

fn slot_id(index: usize, what: &str) -> GpuResult<u32> {
    u32::try_from(index).map_err(|_| GpuError::capacity(format!("{what} id {index} exceeds u32")))
}

#[cfg(test)]
#[path = "../../tests/unit/model/prepare.rs"]
mod tests;
