use std::path::Path;

use crate::foundation::core::{Canvas, DEFAULT_CLEAR_DEPTH};
use crate::foundation::error::{GpuError, GpuResult};

/// Render target: RGBA8 color plus an `f32` depth per pixel.
///
/// Both planes are row-major with the origin at the **bottom-left** corner: row 0 is the bottom
/// row of the image. [`Frame::to_rgba_image`] flips rows for top-left display/PNG output.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Frame {
    /// A black, fully transparent frame with depth at [`DEFAULT_CLEAR_DEPTH`].
    pub fn new(width: u32, height: u32) -> Self {
        let n = Canvas { width, height }.pixel_count();
        Self {
            width,
            height,
            color: vec![0; n * 4],
            depth: vec![DEFAULT_CLEAR_DEPTH; n],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn color(&self) -> &[u8] {
        &self.color
    }

    pub fn depth(&self) -> &[f32] {
        &self.depth
    }

    /// Linear pixel index for `(x, y)` (bottom-left origin).
    pub fn pixel_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn color_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.pixel_index(x, y)? * 4;
        Some([
            self.color[i],
            self.color[i + 1],
            self.color[i + 2],
            self.color[i + 3],
        ])
    }

    pub fn depth_at(&self, x: u32, y: u32) -> Option<f32> {
        Some(self.depth[self.pixel_index(x, y)?])
    }

    pub(crate) fn pixel_color(&self, idx: usize) -> [u8; 4] {
        let i = idx * 4;
        [
            self.color[i],
            self.color[i + 1],
            self.color[i + 2],
            self.color[i + 3],
        ]
    }

    pub(crate) fn set_pixel_color(&mut self, idx: usize, rgba: [u8; 4]) {
        self.color[idx * 4..idx * 4 + 4].copy_from_slice(&rgba);
    }

    pub(crate) fn set_pixel_depth(&mut self, idx: usize, depth: f32) {
        self.depth[idx] = depth;
    }

    pub fn fill_color(&mut self, rgba: [u8; 4]) {
        for px in self.color.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn fill_depth(&mut self, depth: f32) {
        self.depth.fill(depth);
    }

    /// Copy the color plane into an image with a top-left origin.
    pub fn to_rgba_image(&self) -> GpuResult<image::RgbaImage> {
        let row = self.width as usize * 4;
        let mut flipped = Vec::with_capacity(self.color.len());
        if row > 0 {
            for src in self.color.chunks_exact(row).rev() {
                flipped.extend_from_slice(src);
            }
        }
        image::RgbaImage::from_raw(self.width, self.height, flipped)
            .ok_or_else(|| GpuError::image("frame color plane does not match its dimensions"))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> GpuResult<()> {
        let path = path.as_ref();
        self.to_rgba_image()?
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| GpuError::image(format!("write '{}': {e}", path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/memory/frame.rs"]
mod tests;
