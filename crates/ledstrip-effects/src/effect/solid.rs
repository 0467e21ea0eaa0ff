//! Static color fill effect

use super::EffectImpl;
use crate::{buffer::PixelBuffer, color::Rgb};

/// Set every pixel to `color`
pub fn render_solid<const N: usize>(buffer: &mut PixelBuffer<N>, color: Rgb) {
    buffer.fill(color);
}

/// Static color effect - fills all LEDs with one color
#[derive(Clone, Copy, Debug)]
pub struct SolidEffect {
    color: Rgb,
}

impl SolidEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl<const N: usize> EffectImpl<N> for SolidEffect {
    fn render(&mut self, buffer: &mut PixelBuffer<N>) {
        render_solid(buffer, self.color);
    }
}
