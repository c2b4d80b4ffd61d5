//! Core Types für die Tic-Tac-Toe-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Spieler-Symbol auf dem Brett
///
/// X beginnt nach jedem Reset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Gibt den Gegenspieler zurück (X ↔ O)
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Symbol für die Board-Ausgabe
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// Zustand einer Brett-Zelle: leer (None) oder von einem Spieler belegt
pub type Cell = Option<Player>;

/// Ergebnis eines bestätigten Select-Drucks
///
/// Wird vom Session-Zustandsautomaten zurückgegeben; die Firmware
/// entscheidet anhand der Variante über Ausgabe und Winner-Signal.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectOutcome {
    /// Zug wurde gesetzt, Spiel läuft weiter (Spielerwechsel ist erfolgt)
    Placed { row: usize, col: usize },
    /// Der gesetzte Zug hat das Spiel gewonnen
    Win(Player),
    /// Brett voll ohne Gewinner - die Session hat sich selbst zurückgesetzt
    Tie,
    /// Cursor-Position außerhalb des Bretts (defensiv geprüft)
    InvalidSelection { row: usize, col: usize },
    /// Ziel-Zelle ist bereits belegt
    CellOccupied { row: usize, col: usize },
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Player {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.symbol())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SelectOutcome {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SelectOutcome::Placed { row, col } => {
                defmt::write!(fmt, "Placed {{ row: {}, col: {} }}", row, col)
            }
            SelectOutcome::Win(player) => defmt::write!(fmt, "Win({})", player),
            SelectOutcome::Tie => defmt::write!(fmt, "Tie"),
            SelectOutcome::InvalidSelection { row, col } => {
                defmt::write!(fmt, "InvalidSelection {{ row: {}, col: {} }}", row, col)
            }
            SelectOutcome::CellOccupied { row, col } => {
                defmt::write!(fmt, "CellOccupied {{ row: {}, col: {} }}", row, col)
            }
        }
    }
}
