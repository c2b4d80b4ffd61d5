// Winner-Blink Task - Gewinn-Anzeige auf der onboard RGB LED
use defmt::{error, info};
use embassy_time::{Duration, Timer};
use esp_core::{SmartLedWriter, indicator_color};
use esp_hal_smartled::smart_led_buffer;
use rgb::RGB8;

use crate::config::{BLINK_INTERVAL_MS, LED_BRIGHTNESS, RMT_CLOCK_MHZ};
use crate::hal::RmtIndicatorLed;
use crate::{WinnerReceiver, WinnerUpdate};

/// Winner-Blink Logic - Blink-Muster der Gewinn-Anzeige
///
/// Pollt den Winner-Channel non-blocking und blinkt die RGB LED im festen
/// Takt: Rot für Spieler X, Blau für Spieler O, gedimmtes Grün als
/// Heartbeat solange niemand gewonnen hat. Der zuletzt empfangene Wert
/// bleibt über leere Polls hinweg erhalten und treibt das Muster weiter.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: SmartLedWriter` ermöglicht:
/// - Real Hardware (RmtIndicatorLed) im Production-Code
/// - Mock Implementation (MockIndicatorLed) in Tests
///
/// # Parameter
/// - `led`: LED Writer (Hardware oder Mock)
/// - `winner_receiver`: Consumer-Seite des Winner-Channels
pub async fn winner_blink_logic<L: SmartLedWriter>(mut led: L, winner_receiver: WinnerReceiver) {
    let mut winner: WinnerUpdate = None;

    loop {
        // Prüfe auf neuen Wert vom Game-Loop (non-blocking)
        if let Ok(update) = winner_receiver.try_receive() {
            winner = update;
            match winner {
                Some(player) => info!("Winner indicator: Player {}", player),
                None => info!("Winner indicator cleared"),
            }
        }

        // An-Phase mit der Farbe des aktuellen Zustands
        if let Err(_e) = led.write(indicator_color(winner, LED_BRIGHTNESS)) {
            error!("Failed to write to indicator LED");
        }
        Timer::after(Duration::from_millis(BLINK_INTERVAL_MS)).await;

        // Aus-Phase
        if let Err(_e) = led.write(RGB8::default()) {
            error!("Failed to write to indicator LED");
        }
        Timer::after(Duration::from_millis(BLINK_INTERVAL_MS)).await;
    }
}

/// Winner-Blink Task - Embassy Task für den sekundären Ausführungskontext
///
/// Dieser Task übernimmt die Hardware-Initialisierung und ruft dann die
/// `winner_blink_logic()` Funktion auf.
///
/// # Parameter
/// - `gpio8`: GPIO8 Peripheral für die LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
/// - `winner_receiver`: Consumer-Seite des Winner-Channels
#[embassy_executor::task]
pub async fn winner_blink_task(
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
    winner_receiver: WinnerReceiver,
) {
    // Buffer für SmartLED Daten erstellen (1 LED)
    // Macro allokiert Speicher im richtigen Format für RMT
    let mut rmt_buffer = smart_led_buffer!(1);

    // Hardware initialisieren: RmtIndicatorLed kapselt RMT + SmartLED
    let led = RmtIndicatorLed::new(gpio8, rmt_peripheral, RMT_CLOCK_MHZ, &mut rmt_buffer);

    // Blink-Logic aufrufen
    winner_blink_logic(led, winner_receiver).await;
}
