use std::sync::Arc;

/// Immutable byte blob addressed by index from vertex arrays.
///
/// The bytes are shared (`Arc`) so the caller can keep its own handle while GPU memory holds a
/// reference. The pipeline only ever reads them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Buffer {
    data: Arc<[u8]>,
}

impl Buffer {
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self { data: bytes.into() }
    }

    /// Copy a slice of plain values (floats, indices, packed vertices) into a new buffer.
    pub fn from_pod<T: bytemuck::Pod>(values: &[T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice::<T, u8>(values).to_vec())
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
