// Spieler-LEDs: zwei GPIO-Ausgänge zeigen an, wer am Zug ist

use esp_core::{Player, TurnLedWriter};
use esp_hal::gpio::Output;

/// Turn-Anzeige über zwei diskrete LEDs
///
/// X am Zug → X-LED an, O-LED aus; O am Zug umgekehrt.
pub struct GpioTurnLeds {
    led_x: Output<'static>,
    led_o: Output<'static>,
}

impl GpioTurnLeds {
    /// Übernimmt die beiden fertig konfigurierten GPIO-Ausgänge
    pub fn new(led_x: Output<'static>, led_o: Output<'static>) -> Self {
        Self { led_x, led_o }
    }
}

impl TurnLedWriter for GpioTurnLeds {
    fn show_turn(&mut self, player: Player) {
        match player {
            Player::X => {
                self.led_x.set_high();
                self.led_o.set_low();
            }
            Player::O => {
                self.led_x.set_low();
                self.led_o.set_high();
            }
        }
    }
}
