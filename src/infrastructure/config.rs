use ledstrip_effects::EngineTiming;

pub struct BoardConfig {
    pub name: &'static str,
    pub chip: &'static str,
}

pub struct StripConfig {
    pub led_count: usize,
}

#[cfg(feature = "strip30")]
pub const BOARD: BoardConfig = BoardConfig {
    name: "WS2812 strip (30)",
    chip: "ESP32-S3",
};
#[cfg(feature = "strip60")]
pub const BOARD: BoardConfig = BoardConfig {
    name: "WS2812 strip (60)",
    chip: "ESP32-S3",
};
#[cfg(not(any(feature = "strip30", feature = "strip60")))]
pub const BOARD: BoardConfig = BoardConfig {
    name: "ESP32-S3-DevKitC",
    chip: "ESP32-S3",
};

#[cfg(feature = "strip30")]
pub const STRIP: StripConfig = StripConfig { led_count: 30 };
#[cfg(feature = "strip60")]
pub const STRIP: StripConfig = StripConfig { led_count: 60 };
#[cfg(not(any(feature = "strip30", feature = "strip60")))]
pub const STRIP: StripConfig = StripConfig { led_count: 8 };

/// Strip length, fixed for the lifetime of the firmware
pub const LED_COUNT: usize = STRIP.led_count;

/// 50ms ticks, 100 ticks (5s) per effect
pub const TIMING: EngineTiming = EngineTiming {
    tick_ms: 50,
    ticks_per_effect: 100,
};

#[cfg(any(feature = "strip30", feature = "strip60"))]
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO38
    };
}

#[cfg(not(any(feature = "strip30", feature = "strip60")))]
#[macro_export]
macro_rules! led_gpio {
    ($p:expr) => {
        $p.GPIO48
    };
}
