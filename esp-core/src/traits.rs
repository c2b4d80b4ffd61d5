//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für den LED-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

use crate::types::Player;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für die Gewinn-Anzeige (RGB SmartLED, WS2812/Neopixel)
///
/// # Implementierungen
/// - **Production:** RmtIndicatorLed (ESP32 RMT Peripheral)
/// - **Testing:** MockIndicatorLed (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Trait für die beiden Spieler-LEDs (wer ist am Zug)
///
/// GPIO-Ausgänge können auf dieser Plattform nicht fehlschlagen,
/// daher ist die Schnittstelle infallibel.
///
/// # Implementierungen
/// - **Production:** GpioTurnLeds (zwei esp-hal Output Pins)
/// - **Testing:** MockTurnLeds (in-memory Mock)
pub trait TurnLedWriter: Send {
    /// Zeigt an, welcher Spieler am Zug ist
    fn show_turn(&mut self, player: Player);
}
