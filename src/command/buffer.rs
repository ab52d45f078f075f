use crate::foundation::core::{DEFAULT_CLEAR_DEPTH, Vec4};
use crate::foundation::error::{GpuError, GpuResult};
use crate::pipeline::vertex_array::VertexArray;

/// Default maximum number of commands in a [`CommandBuffer`].
pub const DEFAULT_COMMAND_CAPACITY: usize = 10_000;

/// Fill the color and/or depth plane of the framebuffer.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ClearCommand {
    pub color: Vec4,
    pub depth: f32,
    pub clear_color: bool,
    pub clear_depth: bool,
}

impl Default for ClearCommand {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            depth: DEFAULT_CLEAR_DEPTH,
            clear_color: true,
            clear_depth: true,
        }
    }
}

impl ClearCommand {
    pub fn new(color: Vec4, depth: f32) -> Self {
        Self {
            color,
            depth,
            ..Self::default()
        }
    }

    pub fn color_only(color: Vec4) -> Self {
        Self {
            color,
            clear_depth: false,
            ..Self::default()
        }
    }

    pub fn depth_only(depth: f32) -> Self {
        Self {
            depth,
            clear_color: false,
            ..Self::default()
        }
    }
}

/// Run `nof_vertices` vertices through program `program_id` as a triangle list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DrawCommand {
    pub program_id: u32,
    pub nof_vertices: u32,
    pub backface_culling: bool,
    pub vao: VertexArray,
}

impl DrawCommand {
    pub fn new(program_id: u32, nof_vertices: u32) -> Self {
        Self {
            program_id,
            nof_vertices,
            ..Self::default()
        }
    }

    pub fn with_vao(mut self, vao: VertexArray) -> Self {
        self.vao = vao;
        self
    }

    pub fn with_backface_culling(mut self, enabled: bool) -> Self {
        self.backface_culling = enabled;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    Clear(ClearCommand),
    Draw(DrawCommand),
}

impl Command {
    /// One-line human readable description.
    pub fn summary(&self) -> String {
        match self {
            Self::Clear(c) => {
                let mut planes = Vec::new();
                if c.clear_color {
                    planes.push(format!("color={:?}", c.color.to_array()));
                }
                if c.clear_depth {
                    planes.push(format!("depth={}", c.depth));
                }
                if planes.is_empty() {
                    "clear (no planes)".to_owned()
                } else {
                    format!("clear {}", planes.join(" "))
                }
            }
            Self::Draw(d) => {
                let enabled = d.vao.attributes.iter().filter(|a| a.is_enabled());
                let attributes = enabled.count();
                let mut s = format!(
                    "draw program={} vertices={} triangles={} attributes={attributes}",
                    d.program_id,
                    d.nof_vertices,
                    d.nof_vertices / 3
                );
                if let Some(index) = d.vao.index {
                    s.push_str(&format!(" indexed={:?}", index.index_type));
                }
                if d.backface_culling {
                    s.push_str(" cull");
                }
                s
            }
        }
    }
}

/// Ordered, bounded list of commands.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandBuffer {
    commands: Vec<Command>,
    capacity: usize,
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_COMMAND_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, command: Command) -> GpuResult<()> {
        if self.commands.len() >= self.capacity {
            return Err(GpuError::capacity(format!(
                "command buffer is full ({} commands)",
                self.capacity
            )));
        }
        self.commands.push(command);
        Ok(())
    }

    pub fn push_clear(&mut self, clear: ClearCommand) -> GpuResult<()> {
        self.push(Command::Clear(clear))
    }

    pub fn push_draw(&mut self, draw: DrawCommand) -> GpuResult<()> {
        self.push(Command::Draw(draw))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Number of draw commands, i.e. the draw ids a full execution hands out.
    pub fn draw_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, Command::Draw(_)))
            .count()
    }
}

impl<'a> IntoIterator for &'a CommandBuffer {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/buffer.rs"]
mod tests;
