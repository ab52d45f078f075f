use crate::foundation::error::{GpuError, GpuResult};
use crate::memory::buffer::Buffer;
use crate::memory::frame::Frame;
use crate::memory::program::Program;
use crate::memory::texture::Texture;
use crate::memory::uniform::Uniform;
use crate::pipeline::shader::ShaderInterface;

/// Fixed capacities of a [`GpuMemory`] instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GpuLimits {
    pub max_uniforms: usize,
    pub max_textures: usize,
    pub max_buffers: usize,
    pub max_programs: usize,
}

impl Default for GpuLimits {
    fn default() -> Self {
        Self {
            max_uniforms: 10_000,
            max_textures: 1_000,
            max_buffers: 100,
            max_programs: 100,
        }
    }
}

impl GpuLimits {
    /// Defaults, overridden by `SOFTGPU_MAX_{UNIFORMS,TEXTURES,BUFFERS,PROGRAMS}` when those hold
    /// positive integers.
    pub fn from_env() -> Self {
        fn env_usize(key: &str) -> Option<usize> {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
        }

        let d = Self::default();
        Self {
            max_uniforms: env_usize("SOFTGPU_MAX_UNIFORMS").unwrap_or(d.max_uniforms),
            max_textures: env_usize("SOFTGPU_MAX_TEXTURES").unwrap_or(d.max_textures),
            max_buffers: env_usize("SOFTGPU_MAX_BUFFERS").unwrap_or(d.max_buffers),
            max_programs: env_usize("SOFTGPU_MAX_PROGRAMS").unwrap_or(d.max_programs),
        }
    }

    pub fn with_max_uniforms(mut self, n: usize) -> Self {
        self.max_uniforms = n;
        self
    }

    pub fn with_max_textures(mut self, n: usize) -> Self {
        self.max_textures = n;
        self
    }

    pub fn with_max_buffers(mut self, n: usize) -> Self {
        self.max_buffers = n;
        self
    }

    pub fn with_max_programs(mut self, n: usize) -> Self {
        self.max_programs = n;
        self
    }
}

/// All state a command buffer executes against.
///
/// Every array is allocated once at its full capacity, so an id stays valid (and keeps meaning
/// the same slot) for the lifetime of the instance.
#[derive(Clone, Debug)]
pub struct GpuMemory {
    limits: GpuLimits,
    pub(crate) buffers: Vec<Option<Buffer>>,
    pub(crate) textures: Vec<Texture>,
    pub(crate) uniforms: Vec<Uniform>,
    pub(crate) programs: Vec<Program>,
    pub(crate) framebuffer: Frame,
}

impl Default for GpuMemory {
    fn default() -> Self {
        Self::new(GpuLimits::default())
    }
}

impl GpuMemory {
    /// Empty memory with a zero-sized framebuffer.
    pub fn new(limits: GpuLimits) -> Self {
        Self {
            limits,
            buffers: vec![None; limits.max_buffers],
            textures: vec![Texture::default(); limits.max_textures],
            uniforms: vec![Uniform::Empty; limits.max_uniforms],
            programs: vec![Program::default(); limits.max_programs],
            framebuffer: Frame::new(0, 0),
        }
    }

    pub fn with_framebuffer(mut self, frame: Frame) -> Self {
        self.framebuffer = frame;
        self
    }

    pub fn limits(&self) -> GpuLimits {
        self.limits
    }

    /// Swap in a new render target, returning the previous one.
    pub fn set_framebuffer(&mut self, frame: Frame) -> Frame {
        std::mem::replace(&mut self.framebuffer, frame)
    }

    pub fn framebuffer(&self) -> &Frame {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Frame {
        &mut self.framebuffer
    }

    pub fn set_buffer(&mut self, id: u32, buffer: Buffer) -> GpuResult<()> {
        *slot_mut(&mut self.buffers, id, "buffer")? = Some(buffer);
        Ok(())
    }

    pub fn remove_buffer(&mut self, id: u32) -> Option<Buffer> {
        self.buffers.get_mut(id as usize).and_then(Option::take)
    }

    pub fn buffer(&self, id: u32) -> Option<&Buffer> {
        self.buffers.get(id as usize).and_then(Option::as_ref)
    }

    pub fn set_texture(&mut self, id: u32, texture: Texture) -> GpuResult<()> {
        *slot_mut(&mut self.textures, id, "texture")? = texture;
        Ok(())
    }

    pub fn texture(&self, id: u32) -> Option<&Texture> {
        self.textures.get(id as usize)
    }

    pub fn set_uniform(&mut self, id: u32, value: impl Into<Uniform>) -> GpuResult<()> {
        *slot_mut(&mut self.uniforms, id, "uniform")? = value.into();
        Ok(())
    }

    pub fn uniform(&self, id: u32) -> Option<&Uniform> {
        self.uniforms.get(id as usize)
    }

    pub fn uniforms(&self) -> &[Uniform] {
        &self.uniforms
    }

    pub fn set_program(&mut self, id: u32, program: Program) -> GpuResult<()> {
        *slot_mut(&mut self.programs, id, "program")? = program;
        Ok(())
    }

    pub fn program(&self, id: u32) -> Option<&Program> {
        self.programs.get(id as usize)
    }

    /// The view shaders get during execution.
    pub fn shader_interface(&self) -> ShaderInterface<'_> {
        ShaderInterface::new(&self.uniforms, &self.textures)
    }
}

fn slot_mut<'a, T>(slots: &'a mut [T], id: u32, what: &str) -> GpuResult<&'a mut T> {
    let cap = slots.len();
    let Some(slot) = slots.get_mut(id as usize) else {
        let msg = format!("{what} id {id} out of range (capacity {cap})");
        return Err(GpuError::capacity(msg));
    };
    Ok(slot)
}

#[cfg(test)]
#[path = "../../tests/unit/memory/gpu.rs"]
mod tests;
