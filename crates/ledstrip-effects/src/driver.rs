//! LED strip device abstraction layer
//!
//! Provides a trait-based abstraction for LED strip drivers,
//! allowing the effect engine to be hardware-agnostic.

use crate::color::Rgb;

/// Status code reported by a failed driver write (negative errno style)
pub type DriverStatus = i32;

/// `-ENODEV`: the strip was never brought up
pub const STATUS_NO_DEVICE: DriverStatus = -19;
/// `-EIO`: the transfer to the strip failed
pub const STATUS_IO: DriverStatus = -5;
/// `-EOVERFLOW`: the frame does not fit the driver buffer
pub const STATUS_OVERFLOW: DriverStatus = -75;

/// Abstract LED strip device
///
/// Implement this trait to support different hardware platforms.
/// The effect engine is generic over this trait and only ever
/// consumes it.
pub trait StripDevice<const N: usize> {
    /// Whether the strip is configured and able to accept frames
    fn is_ready(&self) -> bool;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), DriverStatus>;
}

impl<const N: usize, D: StripDevice<N>> StripDevice<N> for &mut D {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), DriverStatus> {
        (**self).write(colors)
    }
}
