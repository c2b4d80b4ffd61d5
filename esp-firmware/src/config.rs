// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
#![allow(dead_code)]

// ============================================================================
// Button Konfiguration
// ============================================================================
//
// Alle drei Taster sind aktiv high gegen 3V3 verdrahtet und nutzen den
// internen Pull-Down; ein Druck erzeugt eine steigende Flanke.

/// GPIO-Pin für den Positions-Button (Cursor eine Zelle weiter)
pub const BTN_POSITION_GPIO: u8 = 4;

/// GPIO-Pin für den Auswahl-Button (Zug an der Cursor-Position setzen)
pub const BTN_SELECT_GPIO: u8 = 5;

/// GPIO-Pin für den Reset-Button (Spiel neu starten)
pub const BTN_RESET_GPIO: u8 = 6;

/// Settle-Delay für die Entprellung in Millisekunden
/// Wartezeit zwischen erkannter Flanke und Re-Sample des Pegels
pub const DEBOUNCE_SETTLE_MS: u64 = 200;

/// Abtast-Intervall des Polling-Loops in Millisekunden
pub const POLL_INTERVAL_MS: u64 = 10;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Spieler-X-LED (leuchtet wenn X am Zug ist)
pub const LED_X_GPIO: u8 = 10;

/// GPIO-Pin für die Spieler-O-LED (leuchtet wenn O am Zug ist)
pub const LED_O_GPIO: u8 = 11;

/// GPIO-Pin für die RGB LED (WS2812, Gewinn-Anzeige)
/// GPIO8 ist die onboard LED des ESP32-C6 DevKits
pub const INDICATOR_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die RGB LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// Blink-Halbperiode der Gewinn-Anzeige in Millisekunden
pub const BLINK_INTERVAL_MS: u64 = 500;
