//! Effect system with compile-time known effect variants
//!
//! The rotation is a fixed enum, [`EffectId`]. Stateful effects keep their
//! state in explicit structs owned by the engine, so it survives between
//! frames and across effect switches.

mod chase;
mod rainbow;
mod solid;

pub use chase::{ChaseEffect, render_chase};
pub use rainbow::{HUE_STEP, RainbowEffect, render_rainbow};
pub use solid::{SolidEffect, render_solid};

use crate::{buffer::PixelBuffer, color::Rgb};

/// Trait for effect implementations
///
/// Each effect renders one frame into the buffer per call.
pub trait EffectImpl<const N: usize> {
    fn render(&mut self, buffer: &mut PixelBuffer<N>);
}

pub const SOLID_RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const SOLID_GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const SOLID_BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

/// Number of effects in the rotation
pub const EFFECT_COUNT: u8 = 5;

pub const EFFECT_NAME_SOLID_RED: &str = "solid_red";
pub const EFFECT_NAME_SOLID_GREEN: &str = "solid_green";
pub const EFFECT_NAME_SOLID_BLUE: &str = "solid_blue";
pub const EFFECT_NAME_RAINBOW: &str = "rainbow";
pub const EFFECT_NAME_CHASE: &str = "chase";

/// Effect selector, in rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    SolidRed = 0,
    SolidGreen = 1,
    SolidBlue = 2,
    Rainbow = 3,
    Chase = 4,
}

impl EffectId {
    /// The effect that follows this one, wrapping after [`EffectId::Chase`]
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index((self as u8 + 1) % EFFECT_COUNT)
    }

    /// Position in the rotation, modulo [`EFFECT_COUNT`]
    pub const fn from_index(index: u8) -> Self {
        match index % EFFECT_COUNT {
            0 => Self::SolidRed,
            1 => Self::SolidGreen,
            2 => Self::SolidBlue,
            3 => Self::Rainbow,
            _ => Self::Chase,
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SolidRed => EFFECT_NAME_SOLID_RED,
            Self::SolidGreen => EFFECT_NAME_SOLID_GREEN,
            Self::SolidBlue => EFFECT_NAME_SOLID_BLUE,
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Chase => EFFECT_NAME_CHASE,
        }
    }
}

impl core::fmt::Display for EffectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
