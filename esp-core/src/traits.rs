//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::PinLevel;

/// Trait für den LED-Ausgangs-Pin
///
/// Abstrahiert einen einzelnen digitalen Ausgangs-Pin (push-pull).
/// GPIO-Zugriffe sind auf diesem Target infallibel, daher liefern
/// die Methoden kein Result.
///
/// # Implementierungen
/// - **Production:** GpioLedPin (esp-hal GPIO Output)
/// - **Testing:** MockLedPin (in-memory Mock)
pub trait LedPin: Send {
    /// Treibt den Pin auf den angegebenen elektrischen Pegel
    fn set_level(&mut self, level: PinLevel);

    /// Liest den aktuell anliegenden Pegel zurück
    ///
    /// Liest den echten Pin-Zustand, keinen gecachten Wert. Status-Abfragen
    /// spiegeln damit den tatsächlichen elektrischen Zustand wider
    /// (Passthrough-Verhalten, gewollt).
    fn level(&self) -> PinLevel;
}
