//! Rainbow sweep effect
//!
//! Spreads the whole hue wheel over the strip and rotates it by
//! [`HUE_STEP`] every frame.

use super::EffectImpl;
use crate::{
    buffer::PixelBuffer,
    color::{WHEEL_BRIGHTNESS, wheel},
};

/// Hue advance per frame
pub const HUE_STEP: u8 = 2;

/// Render one rainbow frame starting at `hue`
///
/// Pixel `i` gets hue `(hue + i * 256 / N) mod 256`.
///
/// # Returns
/// The hue for the next frame, `hue + 2 mod 256`
#[allow(clippy::cast_possible_truncation)]
pub fn render_rainbow<const N: usize>(buffer: &mut PixelBuffer<N>, hue: u8) -> u8 {
    for (i, pixel) in buffer.iter_mut().enumerate() {
        let pixel_hue = ((usize::from(hue) + i * 256 / N) % 256) as u8;
        *pixel = wheel(pixel_hue, WHEEL_BRIGHTNESS);
    }
    hue.wrapping_add(HUE_STEP)
}

/// Rainbow effect holding the rotating base hue
#[derive(Clone, Copy, Debug, Default)]
pub struct RainbowEffect {
    hue: u8,
}

impl RainbowEffect {
    /// Base hue of the next frame
    pub const fn hue(&self) -> u8 {
        self.hue
    }
}

impl<const N: usize> EffectImpl<N> for RainbowEffect {
    fn render(&mut self, buffer: &mut PixelBuffer<N>) {
        self.hue = render_rainbow(buffer, self.hue);
    }
}
