use std::collections::BTreeMap;
use std::path::Path;

use crate::command::buffer::{Command, CommandBuffer};
use crate::foundation::core::{Canvas, MAX_ATTRIBUTES};
use crate::foundation::error::{GpuError, GpuResult};
use crate::memory::buffer::Buffer;
use crate::memory::frame::Frame;
use crate::memory::gpu::{GpuLimits, GpuMemory};
use crate::memory::program::Program;
use crate::memory::texture::Texture;
use crate::memory::uniform::Uniform;
use crate::pipeline::attribute::AttributeType;
use crate::shaders::{FRAGMENT_SHADER_NAMES, VERTEX_SHADER_NAMES, fragment_shader, vertex_shader};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete, self-contained frame description.
///
/// Everything a command buffer needs is spelled out as data: typed buffer contents, textures,
/// uniform values, programs built from named shaders (see [`crate::shaders`]) and the command
/// list itself. Resource maps are keyed by slot id.
pub struct SceneDesc {
    /// Framebuffer size.
    pub canvas: Canvas,
    #[serde(default)]
    pub buffers: BTreeMap<u32, BufferDesc>,
    #[serde(default)]
    pub textures: BTreeMap<u32, TextureDesc>,
    #[serde(default)]
    pub uniforms: BTreeMap<u32, Uniform>,
    #[serde(default)]
    pub programs: BTreeMap<u32, ProgramDesc>,
    /// Commands in execution order.
    pub commands: Vec<Command>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Buffer contents as a typed array, stored in native byte order.
pub enum BufferDesc {
    F32(Vec<f32>),
    U32(Vec<u32>),
    U16(Vec<u16>),
    U8(Vec<u8>),
}

impl BufferDesc {
    pub fn to_buffer(&self) -> Buffer {
        match self {
            Self::F32(v) => Buffer::from_pod(v),
            Self::U32(v) => Buffer::from_pod(v),
            Self::U16(v) => Buffer::from_pod(v),
            Self::U8(v) => Buffer::from_pod(v),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Texture source.
pub enum TextureDesc {
    /// Raw interleaved bytes, bottom row first.
    Inline {
        width: u32,
        height: u32,
        channels: u32,
        data: Vec<u8>,
    },
    /// An image file relative to the scene file, decoded to RGBA.
    Image { path: String },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A program assembled from built-in shaders.
pub struct ProgramDesc {
    pub vertex_shader: String,
    pub fragment_shader: String,
    /// Interpolation table; defaults to all slots disabled.
    #[serde(default)]
    pub vs2fs: [AttributeType; MAX_ATTRIBUTES],
}

impl SceneDesc {
    pub fn from_json_str(json: &str) -> GpuResult<Self> {
        serde_json::from_str(json).map_err(|e| GpuError::serde(format!("parse scene JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> GpuResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            let context = format!("read scene '{}'", path.display());
            GpuError::Other(anyhow::Error::new(e).context(context))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string_pretty(&self) -> GpuResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GpuError::serde(format!("encode scene JSON: {e}")))
    }

    /// Check references that can be verified without touching the filesystem.
    pub fn validate(&self) -> GpuResult<()> {
        if self.canvas.is_empty() {
            return Err(GpuError::validation("canvas width/height must be > 0"));
        }
        for (id, program) in &self.programs {
            if !VERTEX_SHADER_NAMES.contains(&program.vertex_shader.as_str()) {
                return Err(GpuError::validation(format!(
                    "program {id} uses unknown vertex shader '{}'",
                    program.vertex_shader
                )));
            }
            if !FRAGMENT_SHADER_NAMES.contains(&program.fragment_shader.as_str()) {
                return Err(GpuError::validation(format!(
                    "program {id} uses unknown fragment shader '{}'",
                    program.fragment_shader
                )));
            }
        }
        for (id, texture) in &self.textures {
            if let TextureDesc::Image { path } = texture {
                validate_rel_source(path, &format!("texture {id} path"))?;
            }
        }
        for (i, command) in self.commands.iter().enumerate() {
            if let Command::Draw(draw) = command
                && !self.programs.contains_key(&draw.program_id)
            {
                tracing::warn!(
                    command = i,
                    program_id = draw.program_id,
                    "draw references a program the scene does not define"
                );
            }
        }
        Ok(())
    }

    /// Build memory and commands, resolving image paths against the current directory.
    pub fn build(&self) -> GpuResult<(GpuMemory, CommandBuffer)> {
        self.build_with_root(Path::new("."))
    }

    /// Build memory and commands, resolving image paths against `assets_root`.
    ///
    /// Memory capacities come from [`GpuLimits::from_env`].
    #[tracing::instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn build_with_root(&self, assets_root: &Path) -> GpuResult<(GpuMemory, CommandBuffer)> {
        self.validate()?;

        let mut mem = GpuMemory::new(GpuLimits::from_env())
            .with_framebuffer(Frame::new(self.canvas.width, self.canvas.height));

        for (&id, desc) in &self.buffers {
            mem.set_buffer(id, desc.to_buffer())?;
        }
        for (&id, desc) in &self.textures {
            mem.set_texture(id, load_texture(desc, assets_root)?)?;
        }
        for (&id, &value) in &self.uniforms {
            mem.set_uniform(id, value)?;
        }
        for (&id, desc) in &self.programs {
            let program = Program {
                vertex_shader: Some(vertex_shader(&desc.vertex_shader)?),
                fragment_shader: Some(fragment_shader(&desc.fragment_shader)?),
                vs2fs: desc.vs2fs,
            };
            mem.set_program(id, program)?;
        }

        let mut cb = CommandBuffer::new();
        for &command in &self.commands {
            cb.push(command)?;
        }
        Ok((mem, cb))
    }
}

fn load_texture(desc: &TextureDesc, assets_root: &Path) -> GpuResult<Texture> {
    match desc {
        TextureDesc::Inline {
            width,
            height,
            channels,
            data,
        } => Texture::new(*width, *height, *channels, data.clone()),
        TextureDesc::Image { path } => {
            let full = assets_root.join(path);
            let img = image::open(&full)
                .map_err(|e| GpuError::image(format!("decode '{}': {e}", full.display())))?;
            Ok(Texture::from_image(&img))
        }
    }
}

fn validate_rel_source(source: &str, field: &str) -> GpuResult<()> {
    let s = source.replace('\\', "/");
    let problem = if source.trim().is_empty() {
        "must be non-empty"
    } else if s.starts_with('/') {
        "must be a relative path"
    } else if s.split('/').any(|part| part == "..") {
        "must not contain '..'"
    } else {
        return Ok(());
    };
    Err(GpuError::validation(format!("{field} {problem}")))
}

#[cfg(test)]
#[path = "../../tests/unit/scene/desc.rs"]
mod tests;
