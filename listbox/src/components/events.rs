//! Component event handling types and traits.
//!
//! Components handle their own input events; the host stays a thin
//! dispatcher that routes clicks and key presses to the component under the
//! pointer or with focus.

use crate::events::ClickEvent;
use crate::keybinds::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation and suppress the default action.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Trait for components that can handle events.
///
/// All methods have default implementations that return
/// `EventResult::Ignored`, so components only need to implement the events
/// they care about.
pub trait ComponentEvents {
    /// Handle a click event within the component's bounds.
    fn on_click(&self, _event: &ClickEvent) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while this component has focus.
    ///
    /// Return `EventResult::Consumed` to prevent the host from applying the
    /// key's default action.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }
}
