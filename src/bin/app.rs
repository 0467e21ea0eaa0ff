#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::Duration;

use esp_backtrace as _;
use esp_hal::{clock::CpuClock, timer::timg::TimerGroup};
use esp_println::println;

use ledstrip_demo::infrastructure::config::BOARD;
use ledstrip_demo::infrastructure::tasks::{init_strip_engine, strip_cycle_task};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();

    println!("WS2812 LED Strip Demo on {}", BOARD.chip);
    println!("Board: {}", BOARD.name);

    // Initialize hardware
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Start rtos
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Bind the strip, the only fatal startup error
    let engine = match init_strip_engine(
        peripherals.RMT,
        ledstrip_demo::led_gpio!(peripherals),
    ) {
        Ok(engine) => engine,
        Err(err) => panic!("LED strip init failed: {:?}", err),
    };

    spawner.spawn(strip_cycle_task(engine)).ok();

    loop {
        embassy_time::Timer::after(Duration::from_secs(5)).await;
    }
}
