use std::sync::Arc;

use crate::foundation::core::{Vec2, Vec4};
use crate::foundation::error::{GpuError, GpuResult};

/// Read-only 8-bit image with 1 to 4 interleaved channels.
///
/// Row 0 is the bottom row (`v = 0`), matching the framebuffer origin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    data: Arc<[u8]>,
    width: u32,
    height: u32,
    channels: u32,
}

impl Texture {
    pub fn new(
        width: u32,
        height: u32,
        channels: u32,
        data: impl Into<Arc<[u8]>>,
    ) -> GpuResult<Self> {
        if !(1..=4).contains(&channels) {
            return Err(GpuError::validation(format!(
                "texture channels must be 1..=4, got {channels}"
            )));
        }
        let data = data.into();
        let expected = (width as usize) * (height as usize) * (channels as usize);
        if data.len() != expected {
            return Err(GpuError::validation(format!(
                "texture {width}x{height}x{channels} expects {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Convert a decoded image into an RGBA texture, flipping rows so that the image's top row
    /// ends up at `v = 1`.
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let rgba = image::imageops::flip_vertical(&img.to_rgba8());
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw().into(),
            width,
            height,
            channels: 4,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u32 {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Nearest-neighbour sample with repeat addressing.
    ///
    /// Channels the texture does not have default to `(0, 0, 0, 1)`; a texture without data
    /// samples as all zeros.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        if self.is_empty() || self.width == 0 || self.height == 0 {
            return Vec4::ZERO;
        }
        let wrapped = uv - uv.floor();
        let texel = wrapped * Vec2::new((self.width - 1) as f32, (self.height - 1) as f32)
            + Vec2::splat(0.5);
        // NaN uv casts to 0, overshoot is clamped to the last texel.
        let x = (texel.x.max(0.0) as u32).min(self.width - 1) as usize;
        let y = (texel.y.max(0.0) as u32).min(self.height - 1) as usize;

        let ch = self.channels as usize;
        let base = (y * self.width as usize + x) * ch;
        let mut color = [0.0, 0.0, 0.0, 1.0];
        for (c, out) in color.iter_mut().enumerate().take(ch) {
            *out = f32::from(self.data[base + c]) / 255.0;
        }
        Vec4::from_array(color)
    }
}

/// Sample `texture` at `uv`; see [`Texture::sample`].
pub fn read_texture(texture: &Texture, uv: Vec2) -> Vec4 {
    texture.sample(uv)
}

#[cfg(test)]
#[path = "../../tests/unit/memory/texture.rs"]
mod tests;
