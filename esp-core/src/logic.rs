//! Pure Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::Player;

/// Wählt die Anzeige-Farbe für den aktuellen Gewinner-Zustand
///
/// Spieler X blinkt Rot, Spieler O blinkt Blau; solange niemand gewonnen
/// hat, blinkt ein Grün-Heartbeat.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use esp_core::{Player, indicator_color};
/// let red = indicator_color(Some(Player::X), 10);
/// assert_eq!(red, RGB8 { r: 10, g: 0, b: 0 });
/// ```
pub fn indicator_color(winner: Option<Player>, brightness: u8) -> RGB8 {
    match winner {
        Some(Player::X) => RGB8 {
            r: brightness,
            g: 0,
            b: 0,
        },
        Some(Player::O) => RGB8 {
            r: 0,
            g: 0,
            b: brightness,
        },
        None => RGB8 {
            r: 0,
            g: brightness,
            b: 0,
        },
    }
}
