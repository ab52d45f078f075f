use crate::foundation::core::{IVec2, IVec3, IVec4, Mat4, UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

/// One uniform slot.
///
/// Slots are untyped until written; shaders read them through the typed accessors on
/// [`crate::ShaderInterface`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Uniform {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Uint(u32),
    #[serde(rename = "uvec2")]
    UVec2(UVec2),
    #[serde(rename = "uvec3")]
    UVec3(UVec3),
    #[serde(rename = "uvec4")]
    UVec4(UVec4),
    Int(i32),
    #[serde(rename = "ivec2")]
    IVec2(IVec2),
    #[serde(rename = "ivec3")]
    IVec3(IVec3),
    #[serde(rename = "ivec4")]
    IVec4(IVec4),
    Mat4(Mat4),
}

impl Uniform {
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Self::Float(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vec2(&self) -> Option<Vec2> {
        match *self {
            Self::Vec2(v) => Some(v),
            _ => None,
        }
    }

    /// A `vec4` slot reads back as its `xyz`.
    pub fn as_vec3(&self) -> Option<Vec3> {
        match *self {
            Self::Vec3(v) => Some(v),
            Self::Vec4(v) => Some(v.truncate()),
            _ => None,
        }
    }

    pub fn as_vec4(&self) -> Option<Vec4> {
        match *self {
            Self::Vec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Self::Uint(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uvec2(&self) -> Option<UVec2> {
        match *self {
            Self::UVec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uvec3(&self) -> Option<UVec3> {
        match *self {
            Self::UVec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_uvec4(&self) -> Option<UVec4> {
        match *self {
            Self::UVec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ivec2(&self) -> Option<IVec2> {
        match *self {
            Self::IVec2(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ivec3(&self) -> Option<IVec3> {
        match *self {
            Self::IVec3(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ivec4(&self) -> Option<IVec4> {
        match *self {
            Self::IVec4(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_mat4(&self) -> Option<Mat4> {
        match *self {
            Self::Mat4(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f32> for Uniform {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<Vec2> for Uniform {
    fn from(v: Vec2) -> Self {
        Self::Vec2(v)
    }
}

impl From<Vec3> for Uniform {
    fn from(v: Vec3) -> Self {
        Self::Vec3(v)
    }
}

impl From<Vec4> for Uniform {
    fn from(v: Vec4) -> Self {
        Self::Vec4(v)
    }
}

impl From<u32> for Uniform {
    fn from(v: u32) -> Self {
        Self::Uint(v)
    }
}

impl From<i32> for Uniform {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<UVec2> for Uniform {
    fn from(v: UVec2) -> Self {
        Self::UVec2(v)
    }
}

impl From<UVec3> for Uniform {
    fn from(v: UVec3) -> Self {
        Self::UVec3(v)
    }
}

impl From<UVec4> for Uniform {
    fn from(v: UVec4) -> Self {
        Self::UVec4(v)
    }
}

impl From<IVec2> for Uniform {
    fn from(v: IVec2) -> Self {
        Self::IVec2(v)
    }
}

impl From<IVec3> for Uniform {
    fn from(v: IVec3) -> Self {
        Self::IVec3(v)
    }
}

impl From<IVec4> for Uniform {
    fn from(v: IVec4) -> Self {
        Self::IVec4(v)
    }
}

impl From<Mat4> for Uniform {
    fn from(m: Mat4) -> Self {
        Self::Mat4(m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memory/uniform.rs"]
mod tests;
