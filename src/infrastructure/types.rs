use ledstrip_effects::EffectEngine;

use crate::infrastructure::{config::LED_COUNT, drivers::EspStripDevice};

pub type StripDriver = EspStripDevice<'static>;

pub type StripEngine = EffectEngine<StripDriver, LED_COUNT>;
