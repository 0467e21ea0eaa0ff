use crate::driver::DriverStatus;

/// Error type for bringing up the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The strip device reported not-ready at startup
    DeviceNotReady,
}

/// A frame could not be written to the strip
///
/// Carries the status code reported by the driver. The buffer is kept as
/// is, so the LEDs lag the intended frame until the next successful push.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushError {
    pub code: DriverStatus,
}
