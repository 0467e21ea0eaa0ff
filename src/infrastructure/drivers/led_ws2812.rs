use static_cell::make_static;

use esp_hal::{gpio::interconnect::PeripheralOutput, peripherals::RMT, rmt::Rmt, time::Rate};
use esp_hal_smartled::{LedAdapterError, SmartLedsAdapter, buffer_size, smart_led_buffer};
use smart_leds::SmartLedsWrite;

use ledstrip_effects::driver::{STATUS_IO, STATUS_NO_DEVICE, STATUS_OVERFLOW};
use ledstrip_effects::{DriverStatus, Rgb, StripDevice};

use crate::infrastructure::config::LED_COUNT;

/// ESP-specific WS2812 strip using the RMT peripheral
///
/// The RMT (Remote Control) peripheral generates the precise timing
/// signals required by WS2812B LEDs. When the peripheral cannot be
/// configured the device reports not-ready and every write fails with
/// `-ENODEV`.
pub struct EspStripDevice<'a> {
    adapter: Option<SmartLedsAdapter<'a, { buffer_size(LED_COUNT) }>>,
}

impl<'a> EspStripDevice<'a> {
    /// Bind the strip
    ///
    /// # Arguments
    /// * `rmt` - RMT peripheral
    /// * `pin` - GPIO pin connected to the LED data line
    pub fn new<O>(rmt: RMT<'a>, pin: O) -> Self
    where
        O: PeripheralOutput<'a>,
    {
        let adapter = match Rmt::new(rmt, Rate::from_mhz(80)) {
            Ok(rmt) => {
                // The RMT buffer lives for the entire program
                let rmt_buffer = make_static!(smart_led_buffer!(LED_COUNT));
                Some(SmartLedsAdapter::new(rmt.channel0, pin, rmt_buffer))
            }
            Err(err) => {
                log::error!("led: failed to configure RMT: {:?}", err);
                None
            }
        };

        Self { adapter }
    }
}

impl StripDevice<LED_COUNT> for EspStripDevice<'static> {
    fn is_ready(&self) -> bool {
        self.adapter.is_some()
    }

    fn write(&mut self, colors: &[Rgb; LED_COUNT]) -> Result<(), DriverStatus> {
        let Some(adapter) = self.adapter.as_mut() else {
            return Err(STATUS_NO_DEVICE);
        };

        critical_section::with(|_| adapter.write(colors.iter().copied())).map_err(status_code)
    }
}

fn status_code(err: LedAdapterError) -> DriverStatus {
    match err {
        LedAdapterError::BufferSizeExceeded => STATUS_OVERFLOW,
        _ => STATUS_IO,
    }
}
