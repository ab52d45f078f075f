//! Named shaders for scenes that cannot carry code.

use std::sync::Arc;

use crate::foundation::core::{MAX_ATTRIBUTES, Vec4};
use crate::foundation::error::{GpuError, GpuResult};
use crate::model::shaders::{draw_model_fragment_shader, draw_model_vertex_shader};
use crate::pipeline::attribute::{Attribute, AttributeType};
use crate::pipeline::shader::{
    FragmentShader, InFragment, InVertex, OutFragment, OutVertex, ShaderInterface, VertexShader,
};

pub const VERTEX_SHADER_NAMES: &[&str] = &["passthrough", "transform", "draw_model"];
pub const FRAGMENT_SHADER_NAMES: &[&str] = &["white", "attribute_color", "textured", "draw_model"];

/// Attribute as a homogeneous point: missing `z` is 0, missing `w` is 1.
fn as_point(a: &Attribute) -> Vec4 {
    let mut p = a.as_vec4();
    if a.attr_type().components() < 4 {
        p.w = 1.0;
    }
    p
}

fn forward(v: &InVertex, gl_position: Vec4) -> OutVertex {
    let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
    attributes[1..].copy_from_slice(&v.attributes[1..]);
    OutVertex {
        gl_position,
        attributes,
    }
}

/// Attribute 0 is already a clip-space position; attributes 1.. are forwarded unchanged.
pub fn passthrough(v: &InVertex, _: &ShaderInterface<'_>) -> OutVertex {
    forward(v, as_point(&v.attributes[0]))
}

/// Attribute 0 transformed by the matrix in uniform 0; attributes 1.. are forwarded unchanged.
pub fn transform(v: &InVertex, si: &ShaderInterface<'_>) -> OutVertex {
    let position = v.attributes[0].as_vec3().extend(1.0);
    forward(v, si.mat4(0) * position)
}

pub fn white(_: &InFragment, _: &ShaderInterface<'_>) -> OutFragment {
    OutFragment {
        gl_frag_color: Vec4::ONE,
    }
}

/// Attribute 1 as the color; RGB inputs are opaque.
pub fn attribute_color(f: &InFragment, _: &ShaderInterface<'_>) -> OutFragment {
    let a = &f.attributes[1];
    let gl_frag_color = if a.attr_type() == AttributeType::Vec4 {
        a.as_vec4()
    } else {
        a.as_vec3().extend(1.0)
    };
    OutFragment { gl_frag_color }
}

/// Texture 0 sampled at the UV in attribute 1.
pub fn textured(f: &InFragment, si: &ShaderInterface<'_>) -> OutFragment {
    let gl_frag_color = si
        .texture(0)
        .map(|t| t.sample(f.attributes[1].as_vec2()))
        .unwrap_or(Vec4::ZERO);
    OutFragment { gl_frag_color }
}

/// Look up a vertex shader by name.
pub fn vertex_shader(name: &str) -> GpuResult<VertexShader> {
    let shader: VertexShader = match name {
        "passthrough" => Arc::new(passthrough),
        "transform" => Arc::new(transform),
        "draw_model" => Arc::new(draw_model_vertex_shader),
        _ => {
            return Err(GpuError::validation(format!(
                "unknown vertex shader '{name}' (known: {})",
                VERTEX_SHADER_NAMES.join(", ")
            )));
        }
    };
    Ok(shader)
}

/// Look up a fragment shader by name.
pub fn fragment_shader(name: &str) -> GpuResult<FragmentShader> {
    let shader: FragmentShader = match name {
        "white" => Arc::new(white),
        "attribute_color" => Arc::new(attribute_color),
        "textured" => Arc::new(textured),
        "draw_model" => Arc::new(draw_model_fragment_shader),
        _ => {
            return Err(GpuError::validation(format!(
                "unknown fragment shader '{name}' (known: {})",
                FRAGMENT_SHADER_NAMES.join(", ")
            )));
        }
    };
    Ok(shader)
}

#[cfg(test)]
#[path = "../tests/unit/shaders.rs"]
mod tests;
