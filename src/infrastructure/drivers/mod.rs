mod led_ws2812;

pub use led_ws2812::EspStripDevice;
