// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_serial_led_steuerung::config::UART_BAUD_RATE;
use esp_serial_led_steuerung::tasks::serial_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware (LED-Pin + UART), startet die Embassy Runtime
/// und spawnt den seriellen Kommando-Task. Danach schläft main() -
/// die gesamte Arbeit läuft in diesem einen Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // LED-Pin initialisieren: HIGH = aus (active-low Verdrahtung)
    // Die LED ist damit ab dem ersten Takt aus, noch bevor der
    // Controller den Pin übernimmt
    let led_pin = Output::new(peripherals.GPIO2, Level::High, OutputConfig::default());

    // UART0 für das Kommando-Protokoll: 115200 Baud, 8N1
    // Feste Pin-Zuordnung zur Build-Zeit (siehe config.rs)
    // defmt-Logs laufen getrennt davon über USB-Serial-JTAG
    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(UART_BAUD_RATE),
    )
    .expect("Failed to initialize UART0")
    .with_rx(peripherals.GPIO17)
    .with_tx(peripherals.GPIO16)
    .into_async();
    let (rx, tx) = uart.split();

    // Spawn Serial Command Task (besitzt UART + LED-Pin exklusiv)
    spawner.spawn(serial_task(rx, tx, led_pin)).unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Serial Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
