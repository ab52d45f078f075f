use std::sync::Arc;

use crate::foundation::core::{
    IVec2, IVec3, IVec4, MAX_ATTRIBUTES, Mat4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4,
};
use crate::memory::texture::Texture;
use crate::memory::uniform::Uniform;
use crate::pipeline::attribute::Attribute;

/// Vertex shader input: pulled attributes plus invocation ids.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InVertex {
    pub attributes: [Attribute; MAX_ATTRIBUTES],
    pub gl_vertex_id: u32,
    pub gl_draw_id: u32,
}

/// Vertex shader output: clip-space position and attributes for the fragment stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutVertex {
    pub gl_position: Vec4,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for OutVertex {
    fn default() -> Self {
        Self {
            gl_position: Vec4::new(0.0, 0.0, 0.0, 1.0),
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// Fragment shader input.
///
/// `gl_frag_coord` holds the pixel center in `xy`, the interpolated NDC depth in `z` and the
/// interpolated `1/w` in `w`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InFragment {
    pub gl_frag_coord: Vec4,
    pub attributes: [Attribute; MAX_ATTRIBUTES],
}

impl Default for InFragment {
    fn default() -> Self {
        Self {
            gl_frag_coord: Vec4::ONE,
            attributes: [Attribute::Empty; MAX_ATTRIBUTES],
        }
    }
}

/// Fragment shader output. The color is clamped to `[0,1]` by the pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OutFragment {
    pub gl_frag_color: Vec4,
}

/// Read-only view of GPU memory handed to every shader invocation.
///
/// Shaders see the whole uniform and texture arrays, not a per-draw slice; per-draw data is
/// found by offsetting with `gl_draw_id`.
#[derive(Clone, Copy, Debug)]
pub struct ShaderInterface<'a> {
    pub uniforms: &'a [Uniform],
    pub textures: &'a [Texture],
}

impl<'a> ShaderInterface<'a> {
    pub fn new(uniforms: &'a [Uniform], textures: &'a [Texture]) -> Self {
        Self { uniforms, textures }
    }

    pub fn uniform(&self, slot: usize) -> Option<&'a Uniform> {
        self.uniforms.get(slot)
    }

    pub fn texture(&self, id: usize) -> Option<&'a Texture> {
        self.textures.get(id)
    }

    /// Matrix at `slot`, identity when the slot is missing or holds something else.
    pub fn mat4(&self, slot: usize) -> Mat4 {
        self.uniform(slot)
            .and_then(Uniform::as_mat4)
            .unwrap_or(Mat4::IDENTITY)
    }

    pub fn vec4(&self, slot: usize) -> Vec4 {
        self.uniform(slot)
            .and_then(Uniform::as_vec4)
            .unwrap_or(Vec4::ZERO)
    }

    pub fn vec3(&self, slot: usize) -> Vec3 {
        self.uniform(slot)
            .and_then(Uniform::as_vec3)
            .unwrap_or(Vec3::ZERO)
    }

    pub fn vec2(&self, slot: usize) -> Vec2 {
        self.uniform(slot)
            .and_then(Uniform::as_vec2)
            .unwrap_or(Vec2::ZERO)
    }

    pub fn float(&self, slot: usize) -> f32 {
        self.uniform(slot).and_then(Uniform::as_f32).unwrap_or(0.0)
    }

    pub fn int(&self, slot: usize) -> i32 {
        self.uniform(slot).and_then(Uniform::as_i32).unwrap_or(0)
    }

    pub fn uint(&self, slot: usize) -> u32 {
        self.uniform(slot).and_then(Uniform::as_u32).unwrap_or(0)
    }

    pub fn uvec2(&self, slot: usize) -> UVec2 {
        self.uniform(slot)
            .and_then(Uniform::as_uvec2)
            .unwrap_or(UVec2::ZERO)
    }

    pub fn uvec3(&self, slot: usize) -> UVec3 {
        self.uniform(slot)
            .and_then(Uniform::as_uvec3)
            .unwrap_or(UVec3::ZERO)
    }

    pub fn uvec4(&self, slot: usize) -> UVec4 {
        self.uniform(slot)
            .and_then(Uniform::as_uvec4)
            .unwrap_or(UVec4::ZERO)
    }

    pub fn ivec2(&self, slot: usize) -> IVec2 {
        self.uniform(slot)
            .and_then(Uniform::as_ivec2)
            .unwrap_or(IVec2::ZERO)
    }

    pub fn ivec3(&self, slot: usize) -> IVec3 {
        self.uniform(slot)
            .and_then(Uniform::as_ivec3)
            .unwrap_or(IVec3::ZERO)
    }

    pub fn ivec4(&self, slot: usize) -> IVec4 {
        self.uniform(slot)
            .and_then(Uniform::as_ivec4)
            .unwrap_or(IVec4::ZERO)
    }
}

/// A vertex shader: one call per vertex, in vertex order.
pub type VertexShader = Arc<dyn Fn(&InVertex, &ShaderInterface<'_>) -> OutVertex + Send + Sync>;

/// A fragment shader: one call per covered pixel.
pub type FragmentShader =
    Arc<dyn Fn(&InFragment, &ShaderInterface<'_>) -> OutFragment + Send + Sync>;

#[cfg(test)]
#[path = "../../tests/unit/pipeline/shader.rs"]
mod tests;
