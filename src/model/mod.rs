pub(crate) mod prepare;
pub(crate) mod shaders;
pub(crate) mod types;
