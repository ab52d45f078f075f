pub(crate) mod buffer;
pub(crate) mod frame;
pub(crate) mod gpu;
pub(crate) mod program;
pub(crate) mod texture;
pub(crate) mod uniform;
