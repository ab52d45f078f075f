use crate::foundation::core::MAX_ATTRIBUTES;
use crate::pipeline::attribute::AttributeType;

/// Where one attribute lives: element `i` is read from
/// `buffer[offset + stride * i]` as `attr_type`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VertexAttrib {
    pub buffer_id: Option<u32>,
    pub offset: u64,
    pub stride: u64,
    pub attr_type: AttributeType,
}

impl VertexAttrib {
    pub fn new(buffer_id: u32, offset: u64, stride: u64, attr_type: AttributeType) -> Self {
        Self {
            buffer_id: Some(buffer_id),
            offset,
            stride,
            attr_type,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.attr_type != AttributeType::Empty
    }
}

/// Width of one index in an index buffer.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IndexType {
    U8,
    U16,
    #[default]
    U32,
}

impl IndexType {
    pub fn byte_width(self) -> u64 {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 => 4,
        }
    }

    /// Decode one index from the front of `bytes` (native byte order).
    pub(crate) fn read(self, bytes: &[u8]) -> Option<u32> {
        let raw = bytes.get(..self.byte_width() as usize)?;
        Some(match self {
            Self::U8 => u32::from(raw[0]),
            Self::U16 => u32::from(bytemuck::pod_read_unaligned::<u16>(raw)),
            Self::U32 => bytemuck::pod_read_unaligned::<u32>(raw),
        })
    }
}

/// An index buffer binding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct IndexBinding {
    pub buffer_id: u32,
    pub offset: u64,
    pub index_type: IndexType,
}

/// Vertex puller configuration of a draw: attribute sources plus optional indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct VertexArray {
    pub attributes: [VertexAttrib; MAX_ATTRIBUTES],
    pub index: Option<IndexBinding>,
}

impl VertexArray {
    pub fn with_attribute(mut self, slot: usize, attrib: VertexAttrib) -> Self {
        if let Some(a) = self.attributes.get_mut(slot) {
            *a = attrib;
        }
        self
    }

    pub fn with_index(mut self, buffer_id: u32, offset: u64, index_type: IndexType) -> Self {
        self.index = Some(IndexBinding {
            buffer_id,
            offset,
            index_type,
        });
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/vertex_array.rs"]
mod tests;
