//! Turn Controller: der Spiel-Zustandsautomat
//!
//! Besitzt Brett, Zug-Index, aktuellen Spieler und Game-Over-Flag exklusiv
//! als eine Session - kein anderer Teil des Systems mutiert diese Werte,
//! und es gibt keinen globalen Zustand.

use crate::board::Board;
use crate::cursor;
use crate::types::{Player, SelectOutcome};

/// Eine laufende Spiel-Session
pub struct GameSession {
    board: Board,
    moves: usize,
    current_player: Player,
    game_over: bool,
}

impl GameSession {
    /// Neue Session: leeres Brett, X beginnt, Cursor oben links
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            moves: 0,
            current_player: Player::X,
            game_over: false,
        }
    }

    /// Das aktuelle Brett (für die Ausgabe)
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Der Spieler, der am Zug ist
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Linearer Zug-Index der aktuellen Cursor-Position
    pub fn move_index(&self) -> usize {
        self.moves
    }

    /// Cursor-Position als (Zeile, Spalte)
    pub fn cursor_pos(&self) -> (usize, usize) {
        (
            cursor::current_row(self.moves),
            cursor::current_col(self.moves),
        )
    }

    /// true zwischen einem Gewinn und dem nächsten Reset
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Positions-Button: rückt die Auswahl um eine Zelle vor
    ///
    /// Liefert die neue Position für die Ausgabe. Solange das Spiel auf
    /// den Reset wartet, wird das Event ignoriert (None).
    pub fn on_cursor(&mut self) -> Option<(usize, usize)> {
        if self.game_over {
            return None;
        }
        cursor::advance(&mut self.moves);
        Some(self.cursor_pos())
    }

    /// Select-Button: versucht den Zug an der Cursor-Position zu setzen
    ///
    /// Auswertung nach dem Setzen in fester Reihenfolge: erst Gewinn, dann
    /// Unentschieden. Ein Unentschieden setzt die Session sofort selbst
    /// zurück (Auto-Restart); ein Gewinn bleibt bis zum externen Reset als
    /// Endzustand stehen. Ungültige Eingaben lassen den Zustand unberührt.
    pub fn on_select(&mut self) -> Option<SelectOutcome> {
        if self.game_over {
            return None;
        }

        let row = cursor::current_row(self.moves);
        let col = cursor::current_col(self.moves);

        if !cursor::is_valid_pos(row, col) {
            return Some(SelectOutcome::InvalidSelection { row, col });
        }
        if !self.board.is_empty_at(row, col) {
            return Some(SelectOutcome::CellOccupied { row, col });
        }

        let mover = self.current_player;
        self.board.place(mover, self.moves);

        if self.board.is_win(mover) {
            self.game_over = true;
            Some(SelectOutcome::Win(mover))
        } else if self.board.is_tie() {
            self.reset();
            Some(SelectOutcome::Tie)
        } else {
            self.moves = 0;
            self.current_player = mover.opponent();
            Some(SelectOutcome::Placed { row, col })
        }
    }

    /// Reset-Button: bedingungslos zurück auf den Anfangszustand
    ///
    /// In jedem Zustand gültig, auch mitten im Spiel.
    pub fn reset(&mut self) {
        self.board.reset();
        self.moves = 0;
        self.current_player = Player::X;
        self.game_over = false;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
