use std::fmt;
use std::sync::Arc;

use crate::foundation::core::MAX_ATTRIBUTES;
use crate::pipeline::attribute::AttributeType;
use crate::pipeline::shader::{
    FragmentShader, InFragment, InVertex, OutFragment, OutVertex, ShaderInterface, VertexShader,
};

/// A vertex/fragment shader pair plus the `vs2fs` table declaring which vertex outputs reach the
/// fragment shader and how.
///
/// A program slot without both shaders is unusable; draws referencing it are skipped.
#[derive(Clone, Default)]
pub struct Program {
    pub vertex_shader: Option<VertexShader>,
    pub fragment_shader: Option<FragmentShader>,
    pub vs2fs: [AttributeType; MAX_ATTRIBUTES],
}

impl Program {
    pub fn new<V, F>(vertex_shader: V, fragment_shader: F) -> Self
    where
        V: Fn(&InVertex, &ShaderInterface<'_>) -> OutVertex + Send + Sync + 'static,
        F: Fn(&InFragment, &ShaderInterface<'_>) -> OutFragment + Send + Sync + 'static,
    {
        Self {
            vertex_shader: Some(Arc::new(vertex_shader)),
            fragment_shader: Some(Arc::new(fragment_shader)),
            vs2fs: [AttributeType::Empty; MAX_ATTRIBUTES],
        }
    }

    pub fn with_vs2fs(mut self, vs2fs: [AttributeType; MAX_ATTRIBUTES]) -> Self {
        self.vs2fs = vs2fs;
        self
    }

    /// Declare a single interpolated slot; out-of-range slots are ignored.
    pub fn with_varying(mut self, slot: usize, ty: AttributeType) -> Self {
        if let Some(s) = self.vs2fs.get_mut(slot) {
            *s = ty;
        }
        self
    }

    /// Both shaders, or `None` when either is missing.
    pub fn shaders(&self) -> Option<(&VertexShader, &FragmentShader)> {
        let vs = self.vertex_shader.as_ref()?;
        let fs = self.fragment_shader.as_ref()?;
        Some((vs, fs))
    }

    pub fn is_complete(&self) -> bool {
        self.shaders().is_some()
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("vertex_shader", &self.vertex_shader.is_some())
            .field("fragment_shader", &self.fragment_shader.is_some())
            .field("vs2fs", &self.vs2fs)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memory/program.rs"]
mod tests;
