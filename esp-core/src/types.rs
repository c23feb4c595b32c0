//! Core Types für die serielle LED-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

use core::fmt;

/// Elektrischer Pegel eines digitalen Ausgangs-Pins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinLevel {
    Low,
    High,
}

/// Logischer LED-Zustand
///
/// Die LED ist active-low verdrahtet: logisch ON entspricht elektrisch LOW.
/// Diese Abbildung ist die EINZIGE Stelle im Code, die die Polarität kennt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    /// Abbildung logischer Zustand → elektrischer Pegel (active-low)
    pub fn level(self) -> PinLevel {
        match self {
            LedState::On => PinLevel::Low,
            LedState::Off => PinLevel::High,
        }
    }

    /// Abbildung elektrischer Pegel → logischer Zustand (active-low)
    pub fn from_level(level: PinLevel) -> Self {
        match level {
            PinLevel::Low => LedState::On,
            PinLevel::High => LedState::Off,
        }
    }

    /// Textdarstellung für Status-Antworten ("ON" / "OFF")
    pub fn as_str(self) -> &'static str {
        match self {
            LedState::On => "ON",
            LedState::Off => "OFF",
        }
    }
}

/// Kommando der seriellen Schnittstelle
///
/// Wird aus einer normalisierten (getrimmten, kleingeschriebenen) Zeile
/// geparst. Erkannte Literale: "on"/"1", "off"/"0", "status"/"s".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Schalte LED ein
    On,
    /// Schalte LED aus
    Off,
    /// Frage den aktuellen LED-Zustand ab (nicht-mutierend)
    Status,
}

impl core::convert::TryFrom<&str> for Command {
    type Error = ();

    fn try_from(line: &str) -> Result<Self, Self::Error> {
        // Vergleich case-insensitive, damit der Parser auch ohne
        // vorherige Normalisierung korrekt bleibt
        if line.eq_ignore_ascii_case("on") || line == "1" {
            Ok(Self::On)
        } else if line.eq_ignore_ascii_case("off") || line == "0" {
            Ok(Self::Off)
        } else if line.eq_ignore_ascii_case("status") || line.eq_ignore_ascii_case("s") {
            Ok(Self::Status)
        } else {
            Err(())
        }
    }
}

/// Antwort des Dispatchers
///
/// Freitext-Zeilen für den Host. `Unknown` borrowed die normalisierte
/// Eingabe-Zeile und lebt daher nur bis zum nächsten Zeilen-Reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply<'a> {
    TurnedOn,
    TurnedOff,
    Status(LedState),
    Unknown(&'a str),
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::TurnedOn => write!(f, "LED turned ON"),
            Reply::TurnedOff => write!(f, "LED turned OFF"),
            Reply::Status(state) => write!(f, "LED is currently: {}", state.as_str()),
            Reply::Unknown(input) => {
                write!(f, "Unknown command: {input}\nValid commands: on, off, status")
            }
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PinLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PinLevel::Low => defmt::write!(fmt, "LOW"),
            PinLevel::High => defmt::write!(fmt, "HIGH"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Command {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Command::On => defmt::write!(fmt, "On"),
            Command::Off => defmt::write!(fmt, "Off"),
            Command::Status => defmt::write!(fmt, "Status"),
        }
    }
}
