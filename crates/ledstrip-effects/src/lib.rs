#![no_std]

//! LED strip effect engine
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction (`[StripDevice]` trait)
//! - `color` - Color type and the six-sector hue wheel
//! - `buffer` - Fixed-length pixel buffer owned by the engine
//! - `effect` - Effect implementations and [`EffectId`] selector
//! - `cycle` - Timed effect rotation state machine
//! - `engine` - Tick loop tying buffer, effects and device together
//!
//! The engine is generic over `StripDevice`, allowing different hardware backends.

pub mod buffer;
pub mod color;
pub mod cycle;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod error;

// Driver exports
pub use driver::{DriverStatus, StripDevice};

// Color exports
pub use color::Rgb;

// Buffer exports
pub use buffer::PixelBuffer;

// Effect exports
pub use effect::EffectId;

// Engine exports
pub use cycle::EffectCycle;
pub use engine::{EffectEngine, EngineTiming, TickReport};
pub use error::{EngineError, PushError};
