//! Single-pixel chase effect

use super::EffectImpl;
use crate::{buffer::PixelBuffer, color::Rgb};

/// Blank the strip and light only pixel `position`
///
/// A position past the end is taken modulo `N`.
///
/// # Returns
/// The position for the next frame, `(position + 1) mod N`
pub fn render_chase<const N: usize>(
    buffer: &mut PixelBuffer<N>,
    color: Rgb,
    position: usize,
) -> usize {
    let position = position % N;
    buffer.clear();
    buffer[position] = color;
    (position + 1) % N
}

/// Chase effect holding the moving pixel position
#[derive(Clone, Copy, Debug)]
pub struct ChaseEffect {
    color: Rgb,
    position: usize,
}

impl ChaseEffect {
    pub const fn new(color: Rgb) -> Self {
        Self { color, position: 0 }
    }

    /// Pixel lit by the next frame
    pub const fn position(&self) -> usize {
        self.position
    }
}

impl<const N: usize> EffectImpl<N> for ChaseEffect {
    fn render(&mut self, buffer: &mut PixelBuffer<N>) {
        self.position = render_chase(buffer, self.color, self.position);
    }
}
