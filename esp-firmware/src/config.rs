// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (active-low verdrahtet)
///
/// Feste Zuordnung zur Build-Zeit - keine Laufzeit-Konfiguration.
/// Der Pin wird in main.rs typisiert als `peripherals.GPIO2` übergeben,
/// diese Konstante dokumentiert die Zuordnung.
pub const LED_GPIO_PIN: u8 = 2;

// ============================================================================
// Serial (UART) Konfiguration
// ============================================================================

/// Baudrate der seriellen Kommando-Schnittstelle
/// Fest auf 115200 - keine Laufzeit-Konfiguration
pub const UART_BAUD_RATE: u32 = 115200;

/// GPIO-Pin für UART0 RX (Kommandos vom Host)
pub const UART_RX_GPIO_PIN: u8 = 17;

/// GPIO-Pin für UART0 TX (Antworten zum Host)
pub const UART_TX_GPIO_PIN: u8 = 16;

/// Kapazität des Zeilen-Puffers in Bytes
///
/// Eine Kommando-Zeile ist maximal 6 Zeichen ("status") - 64 Bytes lassen
/// reichlich Platz. Längere Zeilen werden gekürzt (siehe LineReader).
pub const LINE_BUFFER_SIZE: usize = 64;

/// Kapazität des Antwort-Puffers in Bytes
///
/// Muss die längste Antwort fassen: "Unknown command: " + gekürzte Zeile
/// + Hinweis-Zeile + Terminator
pub const REPLY_BUFFER_SIZE: usize = 128;

/// Chunk-Größe für UART-Lesezugriffe in Bytes
pub const READ_CHUNK_SIZE: usize = 32;
