//! LED State Controller und Command Dispatcher
//!
//! Besitzt den Pin-Handle exklusiv (kein Global!) und bildet logische
//! LED-Zustände auf die active-low Elektrik ab.

use core::convert::TryFrom;

use crate::traits::LedPin;
use crate::types::{Command, LedState, Reply};

/// LED State Controller
///
/// Besitzt genau einen Ausgangs-Pin und kapselt die active-low Abbildung.
/// Der Konstruktor treibt den Pin auf den OFF-Pegel (HIGH) — die LED ist
/// nach dem Start immer aus.
pub struct LedController<P: LedPin> {
    pin: P,
}

impl<P: LedPin> LedController<P> {
    /// Übernimmt den Pin und initialisiert ihn auf OFF
    pub fn new(mut pin: P) -> Self {
        pin.set_level(LedState::Off.level());
        Self { pin }
    }

    /// Schaltet die LED ein (Pin elektrisch LOW)
    pub fn set_on(&mut self) {
        self.pin.set_level(LedState::On.level());
    }

    /// Schaltet die LED aus (Pin elektrisch HIGH)
    pub fn set_off(&mut self) {
        self.pin.set_level(LedState::Off.level());
    }

    /// Liest den aktuellen LED-Zustand
    ///
    /// Liest den LIVE-Pegel vom Pin zurück statt einen gemerkten Zustand —
    /// wird der Pin extern getrieben, meldet status den echten Pegel.
    pub fn state(&self) -> LedState {
        LedState::from_level(self.pin.level())
    }

    /// Direkter Zugriff auf den Pin (für Tests)
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }
}

/// Command Dispatcher
///
/// Verarbeitet eine normalisierte Zeile:
/// - leere Zeile → keine Antwort, keine Zustandsänderung
/// - "on"/"1" → LED ein, "off"/"0" → LED aus, "status"/"s" → Abfrage
/// - alles andere → `Reply::Unknown` mit Echo der Eingabe, Zustand unverändert
pub fn dispatch<'a, P: LedPin>(
    controller: &mut LedController<P>,
    line: &'a str,
) -> Option<Reply<'a>> {
    if line.is_empty() {
        return None;
    }

    match Command::try_from(line) {
        Ok(Command::On) => {
            controller.set_on();
            Some(Reply::TurnedOn)
        }
        Ok(Command::Off) => {
            controller.set_off();
            Some(Reply::TurnedOff)
        }
        Ok(Command::Status) => Some(Reply::Status(controller.state())),
        Err(()) => Some(Reply::Unknown(line)),
    }
}
