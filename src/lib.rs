//! softgpu is a CPU simulator of a simplified GPU graphics pipeline.
//!
//! Work is described the way a modern graphics API describes it:
//!
//! - Populate a [`GpuMemory`] with buffers, textures, uniforms and [`Program`]s
//! - Record clears and draws into a [`CommandBuffer`]
//! - Run them with [`gpu_execute`] and read the resulting [`Frame`]
//!
//! A draw pulls vertices through a [`VertexArray`], shades them, clips each triangle against
//! the near plane, rasterizes it with perspective-correct interpolation, shades fragments and
//! composites them with a depth test and alpha blending. Shaders are plain closures over a
//! read-only [`ShaderInterface`].
#![forbid(unsafe_code)]

mod command;
mod foundation;
mod memory;
mod model;
mod pipeline;
mod scene;
/// Built-in shaders addressable by name.
pub mod shaders;

pub use crate::foundation::core::{
    Canvas, DEFAULT_CLEAR_DEPTH, IVec2, IVec3, IVec4, MAX_ATTRIBUTES, Mat4, UVec2, UVec3, UVec4,
    Vec2, Vec3, Vec4,
};
pub use crate::foundation::error::{GpuError, GpuResult};

pub use crate::command::buffer::{
    ClearCommand, Command, CommandBuffer, DEFAULT_COMMAND_CAPACITY, DrawCommand,
};
pub use crate::command::executor::{ExecStats, gpu_execute};
pub use crate::memory::buffer::Buffer;
pub use crate::memory::frame::Frame;
pub use crate::memory::gpu::{GpuLimits, GpuMemory};
pub use crate::memory::program::Program;
pub use crate::memory::texture::{Texture, read_texture};
pub use crate::memory::uniform::Uniform;
pub use crate::model::prepare::{
    CAMERA_POSITION_SLOT, DIFFUSE_COLOR_OFFSET, DIFFUSE_TEXTURE_OFFSET, DOUBLE_SIDED_OFFSET,
    DRAW_MODEL_PROGRAM, DRAW_UNIFORMS_BASE, DRAW_UNIFORMS_STRIDE, INVERSE_TRANSPOSE_OFFSET,
    LIGHT_POSITION_SLOT, MODEL_CLEAR_COLOR, MODEL_MATRIX_OFFSET, VIEW_PROJECTION_SLOT,
    draw_model_program, draw_uniform_base, prepare_model, set_scene_uniforms,
};
pub use crate::model::shaders::{AMBIENT, draw_model_fragment_shader, draw_model_vertex_shader};
pub use crate::model::types::{Mesh, Model, Node};
pub use crate::pipeline::attribute::{Attribute, AttributeType};
pub use crate::pipeline::clip::{ClippedTriangles, clip_triangle, is_inside_near};
pub use crate::pipeline::fragment::{DEPTH_WRITE_ALPHA, write_fragment};
pub use crate::pipeline::raster::{RasterOutcome, rasterize_triangle};
pub use crate::pipeline::shader::{
    FragmentShader, InFragment, InVertex, OutFragment, OutVertex, ShaderInterface, VertexShader,
};
pub use crate::pipeline::vertex_array::{IndexBinding, IndexType, VertexArray, VertexAttrib};
pub use crate::scene::desc::{BufferDesc, ProgramDesc, SceneDesc, TextureDesc};
