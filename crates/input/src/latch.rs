//! Edge latch: key presses collected between two ticks.
//!
//! A terminal reports presses as events rather than levels, so the latch
//! remembers which buttons were pressed since the last [`ButtonLatch::take`].
//! Several presses of one button within a tick collapse into a single edge.
//! Auto-repeat events never produce an edge.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::button_for_key;
use crate::types::{Button, ButtonEdges};

#[derive(Debug, Clone, Default)]
pub struct ButtonLatch {
    pending: ButtonEdges,
}

impl ButtonLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event. Returns the button it maps to when it latched one.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Button> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let button = button_for_key(key)?;
        self.press(button);
        Some(button)
    }

    pub fn press(&mut self, button: Button) {
        self.pending.set(button);
    }

    /// Edges for this tick; the latch starts over empty.
    pub fn take(&mut self) -> ButtonEdges {
        std::mem::take(&mut self.pending)
    }

    pub fn is_idle(&self) -> bool {
        !self.pending.any()
    }
}
