use embassy_time::Delay;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::peripherals::RMT;

use ledstrip_effects::{EffectEngine, EngineError};

use crate::infrastructure::config::TIMING;
use crate::infrastructure::drivers::EspStripDevice;
use crate::infrastructure::types::StripEngine;

/// Task for running the effect engine
/// It renders, pushes and sleeps one tick at a time and never returns.
#[embassy_executor::task]
pub async fn strip_cycle_task(mut engine: StripEngine) {
    let mut delay = Delay;
    engine.run(&mut delay).await
}

/// Bind the strip and bring up the engine
///
/// The strip is blanked once before the engine is handed out. A failed
/// blank is logged and otherwise ignored, the first tick overwrites it.
pub fn init_strip_engine<O>(rmt: RMT<'static>, pin: O) -> Result<StripEngine, EngineError>
where
    O: PeripheralOutput<'static>,
{
    let device = EspStripDevice::new(rmt, pin);
    let mut engine = EffectEngine::with_timing(device, TIMING)?;

    if let Err(err) = engine.blank() {
        log::warn!("strip: initial blank failed: {}", err.code);
    }

    Ok(engine)
}
