use crate::foundation::core::{Mat4, Vec4};
use crate::memory::buffer::Buffer;
use crate::memory::texture::Texture;
use crate::pipeline::vertex_array::{IndexBinding, VertexAttrib};

/// One drawable piece of geometry with a single material.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    /// Index buffer; `None` draws vertices `0..nof_indices` directly.
    pub index: Option<IndexBinding>,
    pub position: VertexAttrib,
    pub normal: VertexAttrib,
    pub tex_coord: VertexAttrib,
    pub nof_indices: u32,
    pub diffuse_color: Vec4,
    pub diffuse_texture: Option<u32>,
    pub double_sided: bool,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            index: None,
            position: VertexAttrib::default(),
            normal: VertexAttrib::default(),
            tex_coord: VertexAttrib::default(),
            nof_indices: 0,
            diffuse_color: Vec4::ONE,
            diffuse_texture: None,
            double_sided: false,
        }
    }
}

/// Scene-graph node; its matrix is relative to the parent.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub model_matrix: Mat4,
    /// Index into [`Model::meshes`].
    pub mesh: Option<usize>,
    pub children: Vec<Node>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            model_matrix: Mat4::IDENTITY,
            mesh: None,
            children: Vec::new(),
        }
    }
}

impl Node {
    pub fn with_mesh(mesh: usize) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::default()
        }
    }

    pub fn with_matrix(mut self, model_matrix: Mat4) -> Self {
        self.model_matrix = model_matrix;
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }
}

/// A loaded model: meshes, node hierarchy and the data they reference.
///
/// Buffer and texture ids inside meshes index `buffers` and `textures`; [`crate::prepare_model`]
/// uploads both at the same ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub meshes: Vec<Mesh>,
    pub roots: Vec<Node>,
    pub buffers: Vec<Buffer>,
    pub textures: Vec<Texture>,
}
