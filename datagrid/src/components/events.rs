//! Component event handling types and traits.

use crate::event::{Key, Modifiers};
use crate::layout::Rect;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Trait for components that handle input.
///
/// Both methods default to `EventResult::Ignored`, so components only
/// implement the events they care about.
pub trait ComponentEvents {
    /// Handle a key press while the component has focus.
    fn on_key(&mut self, _key: Key, _modifiers: Modifiers) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a click at absolute `(x, y)`.
    ///
    /// `area` is the rect the component was last rendered into; clicks
    /// outside it are ignored.
    fn on_click(&mut self, _area: Rect, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }
}
