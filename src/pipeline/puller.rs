use crate::foundation::core::MAX_ATTRIBUTES;
use crate::memory::buffer::Buffer;
use crate::pipeline::attribute::Attribute;
use crate::pipeline::shader::InVertex;
use crate::pipeline::vertex_array::{VertexArray, VertexAttrib};

/// Vertex assembly: turns an invocation counter into an [`InVertex`].
///
/// Reads never leave the bound buffers. An index that cannot be read resolves as if no index
/// buffer were bound; an attribute that cannot be read (unbound buffer, past the end) is the zero
/// value of its declared type.
#[derive(Clone, Copy, Debug)]
pub struct VertexPuller<'a> {
    buffers: &'a [Option<Buffer>],
    vao: &'a VertexArray,
}

impl<'a> VertexPuller<'a> {
    pub(crate) fn from_slots(buffers: &'a [Option<Buffer>], vao: &'a VertexArray) -> Self {
        Self { buffers, vao }
    }

    fn buffer(&self, id: u32) -> Option<&'a Buffer> {
        self.buffers.get(id as usize).and_then(Option::as_ref)
    }

    /// `gl_VertexID` for invocation `n`.
    pub fn vertex_id(&self, n: u32) -> u32 {
        let Some(binding) = self.vao.index else {
            return n;
        };
        let width = binding.index_type.byte_width();
        let index = self.buffer(binding.buffer_id).and_then(|buf| {
            let at = u64::from(n)
                .checked_mul(width)
                .and_then(|o| o.checked_add(binding.offset))?;
            let at = usize::try_from(at).ok()?;
            binding.index_type.read(buf.data().get(at..)?)
        });
        index.unwrap_or_else(|| {
            tracing::trace!(
                n,
                buffer_id = binding.buffer_id,
                "unreadable index, using invocation counter"
            );
            n
        })
    }

    fn read_attribute(&self, attrib: &VertexAttrib, vertex_id: u32) -> Attribute {
        let ty = attrib.attr_type;
        let value = attrib
            .buffer_id
            .and_then(|id| self.buffer(id))
            .and_then(|buf| {
                let at = u64::from(vertex_id)
                    .checked_mul(attrib.stride)
                    .and_then(|o| o.checked_add(attrib.offset))?;
                let at = usize::try_from(at).ok()?;
                Attribute::read_raw(ty, buf.data().get(at..)?)
            });
        value.unwrap_or_else(|| {
            tracing::trace!(vertex_id, ?attrib, "unreadable attribute, using zero");
            Attribute::zeroed(ty)
        })
    }

    /// Assemble the input vertex of invocation `n` of draw `draw_id`.
    pub fn pull(&self, n: u32, draw_id: u32) -> InVertex {
        let gl_vertex_id = self.vertex_id(n);
        let mut attributes = [Attribute::Empty; MAX_ATTRIBUTES];
        for (out, attrib) in attributes.iter_mut().zip(self.vao.attributes.iter()) {
            if attrib.is_enabled() {
                *out = self.read_attribute(attrib, gl_vertex_id);
            }
        }
        InVertex {
            attributes,
            gl_vertex_id,
            gl_draw_id: draw_id,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/puller.rs"]
mod tests;
