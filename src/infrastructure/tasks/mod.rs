pub mod strip_cycle;

pub use strip_cycle::{init_strip_engine, strip_cycle_task};
