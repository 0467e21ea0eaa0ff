use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Width of one hue wheel sector
pub const SECTOR_WIDTH: u8 = 43;

/// Peak channel value produced by [`wheel`]
pub const WHEEL_BRIGHTNESS: u8 = 128;

/// Map a hue to a color on the six-sector wheel (S=255, V=`brightness`).
///
/// Within each sector one channel is held at `brightness`, one ramps
/// between 0 and `brightness` proportionally to `offset / 43`, and one is 0.
/// `256 / 43` truncates, so sector 5 spans hues 215..=255.
#[allow(clippy::cast_possible_truncation)]
pub const fn wheel(hue: u8, brightness: u8) -> Rgb {
    let sector = hue / SECTOR_WIDTH;
    let offset = hue % SECTOR_WIDTH;
    let ramp = ((offset as u16 * brightness as u16) / SECTOR_WIDTH as u16) as u8;
    let fall = brightness - ramp;

    let (r, g, b) = match sector {
        0 => (brightness, ramp, 0),
        1 => (fall, brightness, 0),
        2 => (0, brightness, ramp),
        3 => (0, fall, brightness),
        4 => (ramp, 0, brightness),
        _ => (brightness, 0, fall),
    };
    Rgb { r, g, b }
}
