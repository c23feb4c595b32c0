// GPIO LED Pin - Hardware-Implementierung des LedPin Traits
//
// Bindet einen esp-hal GPIO Output an die platform-agnostische
// Controller-Logik aus esp-core.

use esp_core::{LedPin, PinLevel};
use esp_hal::gpio::{Level, Output};

/// Real Hardware LED Pin
///
/// Besitzt den GPIO Output exklusiv (explizit übergebener Handle,
/// kein Global). Die active-low Abbildung passiert NICHT hier -
/// sie liegt vollständig in esp-core, dieser Typ übersetzt nur
/// zwischen PinLevel und esp_hal::gpio::Level.
pub struct GpioLedPin {
    pin: Output<'static>,
}

impl GpioLedPin {
    pub fn new(pin: Output<'static>) -> Self {
        Self { pin }
    }
}

impl LedPin for GpioLedPin {
    fn set_level(&mut self, level: PinLevel) {
        let level = match level {
            PinLevel::Low => Level::Low,
            PinLevel::High => Level::High,
        };
        self.pin.set_level(level);
    }

    fn level(&self) -> PinLevel {
        // Liest das Output-Latch zurück - spiegelt den echten Pin-Pegel
        if self.pin.is_set_high() {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}
