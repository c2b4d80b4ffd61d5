//! Spielbrett und Gewinn-/Unentschieden-Auswertung

use crate::cursor;
use crate::types::{Cell, Player};

/// Anzahl der Zeilen des Bretts
pub const ROWS: usize = 3;

/// Anzahl der Spalten des Bretts
pub const COLS: usize = 3;

/// Das 3×3 Spielbrett
///
/// Jede Zelle ist leer oder von genau einem Spieler belegt; die
/// Dimensionen ändern sich nie. Mutiert wird nur über `place` und `reset`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Erstellt ein leeres Brett
    pub const fn new() -> Self {
        Self {
            cells: [[None; COLS]; ROWS],
        }
    }

    /// Setzt alle Zellen auf leer zurück
    pub fn reset(&mut self) {
        self.cells = [[None; COLS]; ROWS];
    }

    /// Liest eine Zelle
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// true wenn die Zelle noch frei ist
    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Trägt den Spieler an der Position des Zug-Index ein
    ///
    /// Führt keine Validierung durch - der Aufrufer hat Position und
    /// Belegung bereits geprüft.
    pub fn place(&mut self, player: Player, moves: usize) {
        let row = cursor::current_row(moves);
        let col = cursor::current_col(moves);
        self.cells[row][col] = Some(player);
    }

    /// Prüft ob der Spieler eine volle Zeile, Spalte oder Diagonale hält
    ///
    /// Alle 8 Linien werden aufgezählt; eine einzige volle Linie genügt.
    pub fn is_win(&self, player: Player) -> bool {
        let want = Some(player);

        // Zeilen
        for row in self.cells.iter() {
            if row.iter().all(|&cell| cell == want) {
                return true;
            }
        }

        // Spalten
        for col in 0..COLS {
            if (0..ROWS).all(|row| self.cells[row][col] == want) {
                return true;
            }
        }

        // Diagonalen
        if (0..ROWS).all(|i| self.cells[i][i] == want) {
            return true;
        }
        (0..ROWS).all(|i| self.cells[i][ROWS - 1 - i] == want)
    }

    /// true wenn keine Zelle mehr frei ist
    ///
    /// Nur aussagekräftig nachdem `is_win` false ergeben hat - ein volles
    /// Brett mit Gewinnreihe ist ein Sieg, kein Unentschieden.
    pub fn is_tie(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }

    /// Symbole einer Zeile für die Board-Ausgabe
    pub fn row_symbols(&self, row: usize) -> [&'static str; COLS] {
        self.cells[row].map(|cell| match cell {
            Some(player) => player.symbol(),
            None => " ",
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(cells: [[Cell; COLS]; ROWS]) -> Board {
        let mut board = Board::new();
        for (row, row_cells) in cells.iter().enumerate() {
            for (col, &cell) in row_cells.iter().enumerate() {
                if let Some(player) = cell {
                    board.place(player, row * COLS + col);
                }
            }
        }
        board
    }

    #[test]
    fn test_place_writes_via_move_index() {
        let mut board = Board::new();
        board.place(Player::X, 4);
        assert_eq!(board.cell(1, 1), Some(Player::X));
        assert!(!board.is_empty_at(1, 1));
        assert!(board.is_empty_at(0, 0));
    }

    #[test]
    fn test_is_win_for_all_rows_and_cols() {
        for line in 0..3 {
            let mut by_row = Board::new();
            let mut by_col = Board::new();
            for i in 0..3 {
                by_row.place(Player::X, line * COLS + i);
                by_col.place(Player::O, i * COLS + line);
            }
            assert!(by_row.is_win(Player::X), "row {} should win", line);
            assert!(by_col.is_win(Player::O), "col {} should win", line);
            assert!(!by_row.is_win(Player::O));
        }
    }

    #[test]
    fn test_is_win_for_both_diagonals() {
        let main_diag = board_from([
            [Some(Player::X), None, None],
            [None, Some(Player::X), None],
            [None, None, Some(Player::X)],
        ]);
        assert!(main_diag.is_win(Player::X));

        let anti_diag = board_from([
            [None, None, Some(Player::O)],
            [None, Some(Player::O), None],
            [Some(Player::O), None, None],
        ]);
        assert!(anti_diag.is_win(Player::O));
    }

    #[test]
    fn test_is_win_false_without_full_line() {
        let board = board_from([
            [Some(Player::X), Some(Player::O), Some(Player::X)],
            [Some(Player::X), Some(Player::O), Some(Player::O)],
            [Some(Player::O), Some(Player::X), Some(Player::X)],
        ]);
        assert!(!board.is_win(Player::X));
        assert!(!board.is_win(Player::O));
    }

    #[test]
    fn test_is_tie_only_when_board_full() {
        let mut board = Board::new();
        assert!(!board.is_tie());

        for index in 0..ROWS * COLS - 1 {
            board.place(Player::X, index);
        }
        assert!(!board.is_tie());

        board.place(Player::O, ROWS * COLS - 1);
        assert!(board.is_tie());
    }

    #[test]
    fn test_reset_clears_every_cell() {
        let mut board = Board::new();
        board.place(Player::X, 0);
        board.place(Player::O, 8);
        board.reset();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert!(board.is_empty_at(row, col));
            }
        }
    }

    #[test]
    fn test_row_symbols_for_rendering() {
        let mut board = Board::new();
        board.place(Player::X, 0);
        board.place(Player::O, 2);
        assert_eq!(board.row_symbols(0), ["X", " ", "O"]);
        assert_eq!(board.row_symbols(1), [" ", " ", " "]);
    }
}
