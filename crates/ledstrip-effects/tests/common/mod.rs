#![allow(dead_code)]

use ledstrip_effects::{DriverStatus, Rgb, StripDevice};

/// Strip that records every frame it is given
pub struct MockStrip<const N: usize> {
    pub ready: bool,
    pub fail_with: Option<DriverStatus>,
    pub frames: Vec<[Rgb; N]>,
}

impl<const N: usize> MockStrip<N> {
    pub fn ready() -> Self {
        Self {
            ready: true,
            fail_with: None,
            frames: Vec::new(),
        }
    }

    pub fn not_ready() -> Self {
        Self {
            ready: false,
            ..Self::ready()
        }
    }

    pub fn failing(code: DriverStatus) -> Self {
        Self {
            fail_with: Some(code),
            ..Self::ready()
        }
    }
}

impl<const N: usize> StripDevice<N> for MockStrip<N> {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn write(&mut self, colors: &[Rgb; N]) -> Result<(), DriverStatus> {
        self.frames.push(*colors);
        match self.fail_with {
            Some(code) => Err(code),
            None => Ok(()),
        }
    }
}

/// Delay that returns immediately and remembers what was asked for
#[derive(Default)]
pub struct RecordingDelay {
    pub calls_ms: Vec<u32>,
    pub total_ns: u64,
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.calls_ms.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

thread_local! {
    static LOG_LINES: std::cell::RefCell<Vec<(log::Level, String)>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// Logger keeping each test thread's lines apart
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        LOG_LINES.with(|lines| {
            lines
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Install the capturing logger and drop lines logged so far on this thread
pub fn capture_logs() {
    static INSTALL: std::sync::Once = std::sync::Once::new();
    INSTALL.call_once(|| {
        log::set_logger(&LOGGER).expect("no other logger is installed");
        log::set_max_level(log::LevelFilter::Trace);
    });
    LOG_LINES.with(|lines| lines.borrow_mut().clear());
}

/// Lines logged on this thread since [`capture_logs`]
pub fn take_logs() -> Vec<(log::Level, String)> {
    LOG_LINES.with(|lines| std::mem::take(&mut *lines.borrow_mut()))
}
