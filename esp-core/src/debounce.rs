//! Button-Entprellung: Flanken-Erkennung plus Stabilitäts-Check
//!
//! Die Engine liest selbst keine Pins: der Polling-Loop sampelt jeden Tick
//! und reicht den Pegel herein. Der Settle-Delay zwischen erkannter Flanke
//! und Re-Sample liegt beim Aufrufer, damit nur Ticks mit Flanke warten
//! müssen und nicht jeder Idle-Tick blockiert.

/// Entprell-Zustand eines einzelnen Buttons
///
/// Gehört dem Polling-Loop; ein Exemplar pro physischem Button.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonState {
    prev: bool,
    curr: bool,
}

/// true nur für die steigende Flanke (low → high)
///
/// Fallende Flanken und stabile Pegel sind nie ein Tastendruck.
pub fn has_changed(prev: bool, curr: bool) -> bool {
    !prev && curr
}

/// true wenn der Pegel vor und nach dem Settle-Delay high war
///
/// Jede andere Kombination - auch ein Pegel-Wechsel während des Delays
/// (Prellen, frühes Loslassen) - ist kein stabiler Druck.
pub fn is_stable(prev_high: bool, resampled: bool) -> bool {
    prev_high && resampled
}

impl ButtonState {
    /// Zustand für einen unbetätigten Button
    pub const fn new() -> Self {
        Self {
            prev: false,
            curr: false,
        }
    }

    /// Übernimmt den frisch gesampelten Pegel
    ///
    /// Muss jeden Tick laufen, unabhängig davon ob ein Druck erkannt
    /// wird - Sampling-Takt und Event-Takt sind getrennt.
    pub fn update(&mut self, level: bool) {
        self.prev = self.curr;
        self.curr = level;
    }

    /// true wenn der letzte `update` eine steigende Flanke ergab
    pub fn rising_edge(&self) -> bool {
        has_changed(self.prev, self.curr)
    }

    /// Bestätigt den Druck nach dem Settle-Delay mit dem Re-Sample
    pub fn is_settled(&self, resampled: bool) -> bool {
        is_stable(self.curr, resampled)
    }
}
