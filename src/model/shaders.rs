use crate::foundation::core::{Vec3, Vec4};
use crate::foundation::math::sign;
use crate::model::prepare::{
    CAMERA_POSITION_SLOT, DIFFUSE_COLOR_OFFSET, DIFFUSE_TEXTURE_OFFSET, DOUBLE_SIDED_OFFSET,
    INVERSE_TRANSPOSE_OFFSET, LIGHT_POSITION_SLOT, MODEL_MATRIX_OFFSET, VIEW_PROJECTION_SLOT,
    draw_uniform_base,
};
use crate::pipeline::attribute::Attribute;
use crate::pipeline::shader::{InFragment, InVertex, OutFragment, OutVertex, ShaderInterface};

/// Ambient light factor of the model program.
pub const AMBIENT: f32 = 0.2;

/// Transforms attribute 0 (position) and 1 (normal) with the draw's model matrices.
///
/// Outputs: 0 world position, 1 world normal, 2 tex coord, 3 draw id (flat).
pub fn draw_model_vertex_shader(v: &InVertex, si: &ShaderInterface<'_>) -> OutVertex {
    let base = draw_uniform_base(v.gl_draw_id);
    let view_projection = si.mat4(VIEW_PROJECTION_SLOT);
    let model = si.mat4(base + MODEL_MATRIX_OFFSET);
    let inverse_transpose = si.mat4(base + INVERSE_TRANSPOSE_OFFSET);

    let world = model * v.attributes[0].as_vec3().extend(1.0);
    let normal = inverse_transpose * v.attributes[1].as_vec3().extend(0.0);

    OutVertex {
        gl_position: view_projection * world,
        attributes: [
            Attribute::Vec3(world.truncate()),
            Attribute::Vec3(normal.truncate()),
            Attribute::Vec2(v.attributes[2].as_vec2()),
            Attribute::Uint(v.gl_draw_id),
        ],
    }
}

/// Lambert shading with a constant ambient term.
pub fn draw_model_fragment_shader(f: &InFragment, si: &ShaderInterface<'_>) -> OutFragment {
    let base = draw_uniform_base(f.attributes[3].as_u32());
    let position = f.attributes[0].as_vec3();
    let mut normal = f.attributes[1].as_vec3();
    let uv = f.attributes[2].as_vec2();

    let light = si.vec3(LIGHT_POSITION_SLOT);
    let camera = si.vec3(CAMERA_POSITION_SLOT);

    if si.float(base + DOUBLE_SIDED_OFFSET) > 0.0 {
        normal *= sign((camera - position).dot(normal));
    }

    let diffuse = usize::try_from(si.int(base + DIFFUSE_TEXTURE_OFFSET))
        .ok()
        .and_then(|id| si.texture(id))
        .map(|t| t.sample(uv))
        .unwrap_or_else(|| si.vec4(base + DIFFUSE_COLOR_OFFSET));

    let to_light = (light - position).normalize_or_zero();
    let factor = to_light.dot(normal.normalize_or_zero()).max(0.0);
    let rgb: Vec3 = diffuse.truncate() * (AMBIENT + factor);

    OutFragment {
        gl_frag_color: Vec4::new(rgb.x, rgb.y, rgb.z, diffuse.w),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shaders.rs"]
mod tests;
