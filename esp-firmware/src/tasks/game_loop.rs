// Game-Loop Task - Pollt die Buttons und treibt den Spiel-Zustandsautomaten
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use esp_core::{Board, ButtonState, GameSession, Player, SelectOutcome, TurnLedWriter};
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};

use crate::WinnerSender;
use crate::config::{DEBOUNCE_SETTLE_MS, POLL_INTERVAL_MS};
use crate::hal::GpioTurnLeds;

/// Entprellter Tastendruck
///
/// Übernimmt den frischen Pegel und bestätigt eine steigende Flanke erst
/// nach dem Settle-Delay mit einem Re-Sample. Der Delay läuft nur nach
/// einer erkannten Flanke - Idle-Ticks kosten keine Wartezeit.
async fn debounced_press(state: &mut ButtonState, pin: &Input<'static>) -> bool {
    state.update(pin.is_high());
    if !state.rising_edge() {
        return false;
    }
    Timer::after(Duration::from_millis(DEBOUNCE_SETTLE_MS)).await;
    state.is_settled(pin.is_high())
}

/// Zeichnet das Brett als drei Text-Zeilen
fn render_board(board: &Board) {
    for row in 0..esp_core::ROWS {
        if row != 0 {
            info!("---+---+---");
        }
        let [left, mid, right] = board.row_symbols(row);
        info!(" {} | {} | {}", left, mid, right);
    }
}

/// Meldet, wer am Zug ist
fn render_turn(player: Player) {
    info!("Player {} turn", player);
}

/// Gibt den frisch zurückgesetzten Spielstand aus und löscht die Anzeige
///
/// Gemeinsamer Pfad für Start, Reset-Button und Tie-Auto-Restart: der
/// Winner-Channel bekommt None, damit die Gewinn-Anzeige zurück in den
/// Heartbeat fällt.
async fn announce_reset(session: &GameSession, winner_sender: &WinnerSender) {
    info!("Reset board");
    render_board(session.board());
    render_turn(session.current_player());
    winner_sender.send(None).await;
}

/// Wertet einen bestätigten Select-Druck aus
///
/// Position und Spieler werden vor dem Zug festgehalten, damit die
/// Ausgabe den Zug dem richtigen Spieler zuordnet (der Automat wechselt
/// den Spieler bereits beim Setzen).
async fn handle_select(session: &mut GameSession, winner_sender: &WinnerSender) {
    let (row, col) = session.cursor_pos();
    let mover = session.current_player();

    let Some(outcome) = session.on_select() else {
        return;
    };

    match outcome {
        SelectOutcome::InvalidSelection { row, col } => {
            warn!("Invalid selection row {} col {}", row, col);
        }
        SelectOutcome::CellOccupied { row, col } => {
            warn!("row {} col {} is not empty. Please select another location.", row, col);
        }
        SelectOutcome::Placed { .. } => {
            info!("Entering player {} input into row {} col {}", mover, row, col);
            render_board(session.board());
            render_turn(session.current_player());
        }
        SelectOutcome::Win(winner) => {
            info!("Entering player {} input into row {} col {}", mover, row, col);
            render_board(session.board());
            info!("Player {} wins!", winner);
            info!("Please press reset button to start the game.");
            info!("Waiting for the reset ...");
            winner_sender.send(Some(winner)).await;
        }
        SelectOutcome::Tie => {
            info!("Entering player {} input into row {} col {}", mover, row, col);
            info!("Tie game!");
            // Auto-Restart: die Session hat sich bereits selbst zurückgesetzt
            announce_reset(session, winner_sender).await;
        }
    }
}

/// Game-Loop Logic - der eigentliche Polling-Loop
///
/// Generisch über die Turn-Anzeige, damit die Logik nicht an die konkrete
/// GPIO-Implementierung gebunden ist.
///
/// Solange das Spiel auf den Reset wartet, werden Positions- und
/// Select-Button gar nicht erst gesampelt; der Reset-Button läuft immer.
///
/// # Parameter
/// - `position_btn`/`select_btn`/`reset_btn`: Button-Eingänge
/// - `turn_leds`: Anzeige für den aktiven Spieler
/// - `winner_sender`: Producer-Seite des Winner-Channels
pub async fn game_loop_logic<T: TurnLedWriter>(
    position_btn: Input<'static>,
    select_btn: Input<'static>,
    reset_btn: Input<'static>,
    mut turn_leds: T,
    winner_sender: WinnerSender,
) -> ! {
    let mut session = GameSession::new();
    let mut position_state = ButtonState::new();
    let mut select_state = ButtonState::new();
    let mut reset_state = ButtonState::new();

    // Start wie nach einem Reset: Brett zeigen, X beginnt, Anzeige löschen
    announce_reset(&session, &winner_sender).await;

    loop {
        if !session.is_game_over() {
            turn_leds.show_turn(session.current_player());

            if debounced_press(&mut position_state, &position_btn).await {
                if let Some((row, col)) = session.on_cursor() {
                    info!("Row: {} Col: {}", row, col);
                }
            }

            if debounced_press(&mut select_state, &select_btn).await {
                handle_select(&mut session, &winner_sender).await;
            }
        }

        if debounced_press(&mut reset_state, &reset_btn).await {
            session.reset();
            announce_reset(&session, &winner_sender).await;
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}

/// Game-Loop Task - Embassy Task für den primären Ausführungskontext
///
/// Übernimmt die Hardware-Initialisierung (Buttons als Eingänge mit
/// Pull-Down, Spieler-LEDs als Ausgänge) und ruft dann die testbar
/// geschnittene `game_loop_logic()` auf.
///
/// # Parameter
/// - `btn_position`/`btn_select`/`btn_reset`: GPIO Peripherals der Taster
/// - `led_x`/`led_o`: GPIO Peripherals der Spieler-LEDs
/// - `winner_sender`: Producer-Seite des Winner-Channels
#[embassy_executor::task]
pub async fn game_loop_task(
    btn_position: esp_hal::peripherals::GPIO4<'static>,
    btn_select: esp_hal::peripherals::GPIO5<'static>,
    btn_reset: esp_hal::peripherals::GPIO6<'static>,
    led_x: esp_hal::peripherals::GPIO10<'static>,
    led_o: esp_hal::peripherals::GPIO11<'static>,
    winner_sender: WinnerSender,
) {
    // Buttons: aktiv high, interner Pull-Down
    let position_btn = Input::new(btn_position, InputConfig::default().with_pull(Pull::Down));
    let select_btn = Input::new(btn_select, InputConfig::default().with_pull(Pull::Down));
    let reset_btn = Input::new(btn_reset, InputConfig::default().with_pull(Pull::Down));

    // Spieler-LEDs: aus beim Start
    let turn_leds = GpioTurnLeds::new(
        Output::new(led_x, Level::Low, OutputConfig::default()),
        Output::new(led_o, Level::Low, OutputConfig::default()),
    );

    game_loop_logic(position_btn, select_btn, reset_btn, turn_leds, winner_sender).await
}
