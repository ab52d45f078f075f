pub(crate) mod attribute;
pub(crate) mod clip;
pub(crate) mod fragment;
pub(crate) mod puller;
pub(crate) mod raster;
pub(crate) mod shader;
pub(crate) mod vertex_array;
