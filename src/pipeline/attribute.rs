use crate::foundation::core::{UVec2, UVec3, UVec4, Vec2, Vec3, Vec4};

/// Element type of a vertex/fragment attribute slot.
///
/// `Empty` disables the slot. Float types are interpolated between vertices; unsigned types are
/// carried flat from the provoking vertex.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    #[default]
    Empty,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Uint,
    #[serde(rename = "uvec2")]
    UVec2,
    #[serde(rename = "uvec3")]
    UVec3,
    #[serde(rename = "uvec4")]
    UVec4,
}

impl AttributeType {
    /// Number of 32-bit lanes.
    pub fn components(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Float | Self::Uint => 1,
            Self::Vec2 | Self::UVec2 => 2,
            Self::Vec3 | Self::UVec3 => 3,
            Self::Vec4 | Self::UVec4 => 4,
        }
    }

    pub fn byte_size(self) -> usize {
        self.components() * 4
    }

    pub fn is_integer(self) -> bool {
        matches!(self, Self::Uint | Self::UVec2 | Self::UVec3 | Self::UVec4)
    }

    pub fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Vec2 | Self::Vec3 | Self::Vec4)
    }
}

/// One typed attribute value.
///
/// Accessors never panic: reading a slot through the "wrong" accessor converts lanes (floats are
/// cast to integers and back) and pads missing lanes with zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Attribute {
    #[default]
    Empty,
    Float(f32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Uint(u32),
    UVec2(UVec2),
    UVec3(UVec3),
    UVec4(UVec4),
}

impl Attribute {
    pub fn attr_type(&self) -> AttributeType {
        match self {
            Self::Empty => AttributeType::Empty,
            Self::Float(_) => AttributeType::Float,
            Self::Vec2(_) => AttributeType::Vec2,
            Self::Vec3(_) => AttributeType::Vec3,
            Self::Vec4(_) => AttributeType::Vec4,
            Self::Uint(_) => AttributeType::Uint,
            Self::UVec2(_) => AttributeType::UVec2,
            Self::UVec3(_) => AttributeType::UVec3,
            Self::UVec4(_) => AttributeType::UVec4,
        }
    }

    pub fn as_f32(&self) -> f32 {
        self.float_lanes()[0]
    }

    pub fn as_vec2(&self) -> Vec2 {
        let l = self.float_lanes();
        Vec2::new(l[0], l[1])
    }

    pub fn as_vec3(&self) -> Vec3 {
        let l = self.float_lanes();
        Vec3::new(l[0], l[1], l[2])
    }

    pub fn as_vec4(&self) -> Vec4 {
        Vec4::from_array(self.float_lanes())
    }

    pub fn as_u32(&self) -> u32 {
        self.uint_lanes()[0]
    }

    pub fn as_uvec2(&self) -> UVec2 {
        let l = self.uint_lanes();
        UVec2::new(l[0], l[1])
    }

    pub fn as_uvec3(&self) -> UVec3 {
        let l = self.uint_lanes();
        UVec3::new(l[0], l[1], l[2])
    }

    pub fn as_uvec4(&self) -> UVec4 {
        UVec4::from_array(self.uint_lanes())
    }

    pub(crate) fn float_lanes(&self) -> [f32; 4] {
        match *self {
            Self::Empty => [0.0; 4],
            Self::Float(v) => [v, 0.0, 0.0, 0.0],
            Self::Vec2(v) => [v.x, v.y, 0.0, 0.0],
            Self::Vec3(v) => [v.x, v.y, v.z, 0.0],
            Self::Vec4(v) => v.to_array(),
            Self::Uint(_) | Self::UVec2(_) | Self::UVec3(_) | Self::UVec4(_) => {
                self.uint_lanes().map(|u| u as f32)
            }
        }
    }

    pub(crate) fn uint_lanes(&self) -> [u32; 4] {
        match *self {
            Self::Uint(v) => [v, 0, 0, 0],
            Self::UVec2(v) => [v.x, v.y, 0, 0],
            Self::UVec3(v) => [v.x, v.y, v.z, 0],
            Self::UVec4(v) => v.to_array(),
            Self::Empty => [0; 4],
            Self::Float(_) | Self::Vec2(_) | Self::Vec3(_) | Self::Vec4(_) => {
                self.float_lanes().map(|f| f as u32)
            }
        }
    }

    /// Build a value of type `ty` from float lanes (integer types are cast).
    pub(crate) fn from_float_lanes(ty: AttributeType, l: [f32; 4]) -> Self {
        match ty {
            AttributeType::Empty => Self::Empty,
            AttributeType::Float => Self::Float(l[0]),
            AttributeType::Vec2 => Self::Vec2(Vec2::new(l[0], l[1])),
            AttributeType::Vec3 => Self::Vec3(Vec3::new(l[0], l[1], l[2])),
            AttributeType::Vec4 => Self::Vec4(Vec4::from_array(l)),
            _ => Self::from_uint_lanes(ty, l.map(|f| f as u32)),
        }
    }

    /// Build a value of type `ty` from unsigned lanes (float types are cast).
    pub(crate) fn from_uint_lanes(ty: AttributeType, l: [u32; 4]) -> Self {
        match ty {
            AttributeType::Uint => Self::Uint(l[0]),
            AttributeType::UVec2 => Self::UVec2(UVec2::new(l[0], l[1])),
            AttributeType::UVec3 => Self::UVec3(UVec3::new(l[0], l[1], l[2])),
            AttributeType::UVec4 => Self::UVec4(UVec4::from_array(l)),
            _ => Self::from_float_lanes(ty, l.map(|u| u as f32)),
        }
    }

    /// Zero value of a type; `Empty` stays `Empty`.
    pub(crate) fn zeroed(ty: AttributeType) -> Self {
        Self::from_float_lanes(ty, [0.0; 4])
    }

    /// Reinterpret raw buffer bytes as a value of type `ty`.
    ///
    /// This is the only place the pipeline treats memory as untyped. Returns `None` when `bytes`
    /// is shorter than the type.
    pub(crate) fn read_raw(ty: AttributeType, bytes: &[u8]) -> Option<Self> {
        let raw = bytes.get(..ty.byte_size())?;
        let mut lanes = [0u32; 4];
        for (lane, chunk) in lanes.iter_mut().zip(raw.chunks_exact(4)) {
            *lane = bytemuck::pod_read_unaligned::<u32>(chunk);
        }
        Some(if ty.is_float() {
            Self::from_float_lanes(ty, lanes.map(f32::from_bits))
        } else {
            Self::from_uint_lanes(ty, lanes)
        })
    }

    /// Linear blend `a + (b-a)*t` used by clipping.
    ///
    /// Integer attributes are not blended: the value of `a` is kept.
    pub(crate) fn lerp(a: &Self, b: &Self, t: f32) -> Self {
        let ty = a.attr_type();
        if !ty.is_float() {
            return *a;
        }
        let la = a.float_lanes();
        let lb = b.float_lanes();
        let out = std::array::from_fn(|i| la[i] + (lb[i] - la[i]) * t);
        Self::from_float_lanes(ty, out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/attribute.rs"]
mod tests;
