// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    Board, ButtonState, GameSession, LedError, Player, SelectOutcome, SmartLedWriter,
    TurnLedWriter, indicator_color,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};

// ============================================================================
// Type-Aliase für den Winner-Channel
// ============================================================================
//
// Der Channel hat Kapazität 1: der Producer (Game-Loop) blockiert im send
// bis der Consumer (Gewinn-Anzeige) den vorigen Wert abgeholt hat. So geht
// keine Gewinner-Meldung in einer unbegrenzten Queue verloren.
//
// CriticalSectionRawMutex statt NoopRawMutex: die beiden Tasks sind
// unabhängige Ausführungskontexte, die außer diesem Channel nichts teilen;
// der Handoff bleibt damit auch über Interrupt-Executor-Grenzen korrekt.

/// Wert im Winner-Channel: Some(Gewinner) oder None (kein Gewinner / Reset)
pub type WinnerUpdate = Option<Player>;

/// Single-Slot Channel für die Gewinner-Übergabe
pub type WinnerChannel = Channel<CriticalSectionRawMutex, WinnerUpdate, 1>;

/// Sender-Seite des Winner-Channels (Game-Loop-Task)
pub type WinnerSender = Sender<'static, CriticalSectionRawMutex, WinnerUpdate, 1>;

/// Receiver-Seite des Winner-Channels (Gewinn-Anzeige-Task)
pub type WinnerReceiver = Receiver<'static, CriticalSectionRawMutex, WinnerUpdate, 1>;
