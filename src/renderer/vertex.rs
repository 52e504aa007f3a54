//! GPU vertex format and the game palette

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

pub type Rgba = [f32; 4];

/// Triangle corner: a position (field pixels before upload, NDC after)
/// and a flat color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Rgba,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn new(position: Vec2, color: Rgba) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }

    pub fn position(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }

    /// Same color, new position
    pub fn moved_to(self, position: Vec2) -> Self {
        Self {
            position: position.to_array(),
            ..self
        }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub mod colors {
    use super::Rgba;

    /// Opaque color from a `0xRRGGBB` literal
    pub const fn rgb(hex: u32) -> Rgba {
        [
            ((hex >> 16) & 0xff) as f32 / 255.0,
            ((hex >> 8) & 0xff) as f32 / 255.0,
            (hex & 0xff) as f32 / 255.0,
            1.0,
        ]
    }

    pub const BIRD: Rgba = rgb(0xffff00);
    pub const PIPE: Rgba = rgb(0x00aa00);
    /// Sky blue
    pub const BACKGROUND: Rgba = rgb(0x87ceeb);
}
