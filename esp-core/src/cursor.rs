//! Position Cursor: linearer Zug-Index → Zeile/Spalte
//!
//! Pure Integer-Projektionen ohne Hardware-Dependencies (testbar!)

use crate::board::{COLS, ROWS};

/// Aktuelle Zeile aus dem Zug-Index
pub fn current_row(moves: usize) -> usize {
    moves / COLS
}

/// Aktuelle Spalte aus dem Zug-Index
pub fn current_col(moves: usize) -> usize {
    moves % COLS
}

/// Zeile der nächsten Cursor-Position
pub fn next_row(moves: usize) -> usize {
    (moves + 1) / COLS
}

/// Spalte der nächsten Cursor-Position
pub fn next_col(moves: usize) -> usize {
    (moves + 1) % COLS
}

/// Bounds-Check gegen die Brett-Dimensionen
pub fn is_valid_pos(row: usize, col: usize) -> bool {
    row < ROWS && col < COLS
}

/// Rückt den Cursor um eine Zelle vor
///
/// Hinter der letzten Zelle springt der Cursor zurück auf die Zelle oben
/// links - so läuft ein Spieler mit einem einzigen Button über alle Zellen.
pub fn advance(moves: &mut usize) {
    if is_valid_pos(next_row(*moves), next_col(*moves)) {
        *moves += 1;
    } else {
        *moves = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projections_match_division_and_modulo() {
        for index in 0..ROWS * COLS {
            assert_eq!(current_row(index), index / COLS);
            assert_eq!(current_col(index), index % COLS);
            assert!(is_valid_pos(current_row(index), current_col(index)));
        }
    }

    #[test]
    fn test_advance_increments_within_board() {
        let mut moves = 0;
        for expected in 1..ROWS * COLS {
            advance(&mut moves);
            assert_eq!(moves, expected);
        }
    }

    #[test]
    fn test_advance_wraps_at_end_of_board() {
        let mut moves = ROWS * COLS - 1;
        advance(&mut moves);
        assert_eq!(moves, 0);
    }

    #[test]
    fn test_is_valid_pos_rejects_out_of_bounds() {
        assert!(!is_valid_pos(ROWS, 0));
        assert!(!is_valid_pos(0, COLS));
        assert!(is_valid_pos(ROWS - 1, COLS - 1));
    }
}
