// Serial Command Task - liest Kommando-Zeilen von UART0 und steuert die LED
use core::fmt::Write as _;

use defmt::{Debug2Format, info, warn};
use esp_hal::Async;
use esp_hal::gpio::Output;
use esp_hal::uart::{UartRx, UartTx};
use heapless::String;

use crate::config::{LINE_BUFFER_SIZE, READ_CHUNK_SIZE, REPLY_BUFFER_SIZE};
use crate::hal::GpioLedPin;
use crate::{LedController, LedPin, LineReader, dispatch};

/// Startup-Banner: wird einmalig nach dem Boot über die serielle
/// Schnittstelle ausgegeben (Ready-Zeile + Kommando-Übersicht)
const BANNER: &[&str] = &[
    "ESP32-C6 LED Control Ready!",
    "Commands:",
    "  'on' or '1' - Turn LED ON",
    "  'off' or '0' - Turn LED OFF",
    "  'status' or 's' - Get LED status",
];

/// Serial Command Logic - Testbarer Kern des Kommando-Loops
///
/// Endlos-Schleife des Protokolls:
/// - liest Byte-Chunks von UART RX (async, wartet bis Daten anliegen)
/// - assembliert und normalisiert Zeilen über den LineReader
/// - dispatched jede fertige Zeile an den LedController
/// - schreibt die Antwort-Zeile(n) zurück auf UART TX
///
/// UART-Fehler (z.B. RX-FIFO-Überlauf) werden geloggt und ignoriert -
/// der Loop pollt einfach weiter. Es gibt keinen fatalen Fehlerpfad.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `P: LedPin` ermöglicht:
/// - Real Hardware (GpioLedPin) im Production-Code
/// - Mock Implementation (MockLedPin) in Host-Tests der Core-Logik
pub async fn serial_command_loop<P: LedPin>(
    mut rx: UartRx<'static, Async>,
    mut tx: UartTx<'static, Async>,
    mut controller: LedController<P>,
) -> ! {
    // Banner ausgeben sobald die Schnittstelle bereit ist
    for &line in BANNER {
        write_line(&mut tx, line).await;
    }
    info!("Serial: command loop started, LED is {}", controller.state());

    let mut reader: LineReader<LINE_BUFFER_SIZE> = LineReader::new();
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    loop {
        let n = match rx.read_async(&mut chunk).await {
            Ok(n) => n,
            Err(e) => {
                warn!("Serial: RX error: {}", Debug2Format(&e));
                continue;
            }
        };

        for &byte in &chunk[..n] {
            if !reader.push(byte) {
                continue;
            }

            // Zeile komplett: dispatchen und Antwort formatieren.
            // Die Antwort borrowed die Zeile, daher erst in den
            // Antwort-Puffer formatieren, dann den Reader leeren.
            let mut reply_buf: String<REPLY_BUFFER_SIZE> = String::new();
            if let Some(reply) = dispatch(&mut controller, reader.line()) {
                info!("Serial: line '{}' -> LED {}", reader.line(), controller.state());
                let _ = write!(reply_buf, "{reply}\n");
            }
            reader.clear();

            if !reply_buf.is_empty() {
                write_all(&mut tx, reply_buf.as_bytes()).await;
            }
        }
    }
}

/// Serial Command Task - Embassy Task für die serielle LED-Steuerung
///
/// Übernimmt die Hardware-Handles (UART-Hälften + GPIO) und ruft dann
/// die testbare `serial_command_loop()` Funktion auf.
///
/// # Parameter
/// - `rx`: UART RX-Hälfte (Kommandos vom Host)
/// - `tx`: UART TX-Hälfte (Antworten zum Host)
/// - `led_pin`: GPIO Output der Status-LED (active-low)
#[embassy_executor::task]
pub async fn serial_task(
    rx: UartRx<'static, Async>,
    tx: UartTx<'static, Async>,
    led_pin: Output<'static>,
) {
    // Controller übernimmt den Pin und zieht ihn auf OFF (HIGH)
    let controller = LedController::new(GpioLedPin::new(led_pin));

    // Business Logic aufrufen (testbar!)
    serial_command_loop(rx, tx, controller).await
}

/// Schreibt einen kompletten Byte-Puffer auf UART TX
///
/// write_async kann partiell schreiben, daher Schleife bis alles raus ist.
/// TX-Fehler werden geloggt, die restlichen Bytes verworfen.
async fn write_all(tx: &mut UartTx<'static, Async>, mut bytes: &[u8]) {
    while !bytes.is_empty() {
        match tx.write_async(bytes).await {
            Ok(n) => bytes = &bytes[n..],
            Err(e) => {
                warn!("Serial: TX error: {}", Debug2Format(&e));
                return;
            }
        }
    }
}

/// Schreibt eine `\n`-terminierte Text-Zeile auf UART TX
async fn write_line(tx: &mut UartTx<'static, Async>, line: &str) {
    write_all(tx, line.as_bytes()).await;
    write_all(tx, b"\n").await;
}
