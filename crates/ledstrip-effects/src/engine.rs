//! Effect Engine - main tick loop
//!
//! The `EffectEngine` is the central coordinator that:
//! - Owns the pixel buffer and the strip device
//! - Renders the current effect into the buffer
//! - Pushes the buffer to the device once per tick
//! - Sleeps the tick interval and rotates effects on a fixed schedule
//!
//! Push failures are logged and never abort the loop.

use embedded_hal_async::delay::DelayNs;
use log::{error, info};

use crate::{
    buffer::PixelBuffer,
    color::Rgb,
    cycle::{DEFAULT_TICKS_PER_EFFECT, EffectCycle},
    driver::StripDevice,
    effect::{
        ChaseEffect, EffectId, EffectImpl, RainbowEffect, SOLID_BLUE, SOLID_GREEN, SOLID_RED,
        SolidEffect, render_chase, render_rainbow, render_solid,
    },
    error::{EngineError, PushError},
};

/// Default delay between ticks
pub const DEFAULT_TICK_MS: u32 = 50;

/// Color of the moving chase pixel
pub const CHASE_COLOR: Rgb = Rgb { r: 255, g: 255, b: 255 };

/// Loop timing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineTiming {
    /// Sleep after every push, in milliseconds
    pub tick_ms: u32,
    /// Ticks before the next effect is selected
    pub ticks_per_effect: u16,
}

impl Default for EngineTiming {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            ticks_per_effect: DEFAULT_TICKS_PER_EFFECT,
        }
    }
}

/// Outcome of a single [`EffectEngine::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Effect rendered during this tick
    pub effect: EffectId,
    /// Result of pushing the frame
    pub push: Result<(), PushError>,
    /// Effect selected for the next tick, if the rotation moved on
    pub switched_to: Option<EffectId>,
}

/// Effect Engine - the main orchestrator
///
/// Generic over `D: StripDevice` to support different hardware backends.
pub struct EffectEngine<D: StripDevice<N>, const N: usize> {
    /// Hardware device for LED output
    device: D,
    /// Frame sent on every push
    buffer: PixelBuffer<N>,
    /// Effect rotation
    cycle: EffectCycle,
    /// Rainbow hue, kept across effect switches
    rainbow: RainbowEffect,
    /// Chase position, kept across effect switches
    chase: ChaseEffect,
    tick_ms: u32,
}

impl<D: StripDevice<N>, const N: usize> EffectEngine<D, N> {
    /// Bind the engine to a strip with the default timing
    ///
    /// Fails with [`EngineError::DeviceNotReady`] before touching the
    /// buffer or the device when the strip is not ready.
    pub fn initialize(device: D) -> Result<Self, EngineError> {
        Self::with_timing(device, EngineTiming::default())
    }

    /// Bind the engine to a strip with custom timing
    pub fn with_timing(device: D, timing: EngineTiming) -> Result<Self, EngineError> {
        if !device.is_ready() {
            error!("LED strip device is not ready");
            return Err(EngineError::DeviceNotReady);
        }

        info!("Found LED strip device");
        info!("Number of LEDs: {}", N);

        Ok(Self {
            device,
            buffer: PixelBuffer::new(),
            cycle: EffectCycle::new(timing.ticks_per_effect),
            rainbow: RainbowEffect::default(),
            chase: ChaseEffect::new(CHASE_COLOR),
            tick_ms: timing.tick_ms,
        })
    }

    /// Set every pixel to black, no I/O
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Set every pixel to one color
    pub fn apply_solid(&mut self, r: u8, g: u8, b: u8) {
        render_solid(&mut self.buffer, Rgb { r, g, b });
    }

    /// Render a rainbow frame from `hue`, returning the next hue
    pub fn apply_rainbow(&mut self, hue: u8) -> u8 {
        render_rainbow(&mut self.buffer, hue)
    }

    /// Render a chase frame at `position`, returning the next position
    pub fn apply_chase(&mut self, r: u8, g: u8, b: u8, position: usize) -> usize {
        render_chase(&mut self.buffer, Rgb { r, g, b }, position)
    }

    /// Write the buffer to the strip
    ///
    /// Does not retry. The buffer is left untouched on failure.
    pub fn push(&mut self) -> Result<(), PushError> {
        self.device
            .write(self.buffer.as_array())
            .map_err(|code| PushError { code })
    }

    /// Turn the whole strip off
    pub fn blank(&mut self) -> Result<(), PushError> {
        self.clear();
        self.push()
    }

    /// Render the current effect into the buffer
    pub fn render(&mut self) -> EffectId {
        let effect = self.cycle.current();
        match effect {
            EffectId::Rainbow => self.rainbow.render(&mut self.buffer),
            EffectId::Chase => self.chase.render(&mut self.buffer),
            EffectId::SolidRed => SolidEffect::new(SOLID_RED).render(&mut self.buffer),
            EffectId::SolidGreen => SolidEffect::new(SOLID_GREEN).render(&mut self.buffer),
            EffectId::SolidBlue => SolidEffect::new(SOLID_BLUE).render(&mut self.buffer),
        }
        effect
    }

    /// Run one loop iteration
    ///
    /// Renders, pushes, logs a failed push, sleeps the tick interval and
    /// then counts the tick towards the next effect switch.
    pub async fn tick<T: DelayNs>(&mut self, delay: &mut T) -> TickReport {
        let effect = self.render();

        let push = self.push();
        if let Err(err) = push {
            error!("Failed to update LED strip: {}", err.code);
        }

        delay.delay_ms(self.tick_ms).await;

        let switched_to = self.cycle.advance();
        if let Some(next) = switched_to {
            info!("Switching to effect {} ({})", next.index(), next);
        }

        TickReport {
            effect,
            push,
            switched_to,
        }
    }

    /// Tick forever
    pub async fn run<T: DelayNs>(&mut self, delay: &mut T) -> ! {
        loop {
            self.tick(delay).await;
        }
    }

    /// Current frame
    pub fn pixels(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    /// Effect rendered by the next tick
    pub fn effect(&self) -> EffectId {
        self.cycle.current()
    }

    /// Ticks spent on the current effect
    pub fn tick_count(&self) -> u16 {
        self.cycle.ticks()
    }

    /// Rainbow base hue for its next frame
    pub fn hue(&self) -> u8 {
        self.rainbow.hue()
    }

    /// Chase pixel for its next frame
    pub fn position(&self) -> usize {
        self.chase.position()
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}
