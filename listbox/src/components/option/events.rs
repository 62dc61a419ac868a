//! Event handling for the ListOption component.

use crate::components::events::{ComponentEvents, EventResult};
use crate::events::ClickEvent;
use crate::keybinds::{Key, KeyCombo};

use super::ListOption;

impl<T: Clone + Send + Sync + 'static> ComponentEvents for ListOption<T> {
    fn on_click(&self, _event: &ClickEvent) -> EventResult {
        // Disabled is a styling affordance only; the toggle still runs.
        self.toggle();
        EventResult::Consumed
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        // Only handle keys without modifiers
        if key.modifiers.ctrl || key.modifiers.alt || key.modifiers.shift {
            return EventResult::Ignored;
        }

        match key.key {
            // Space is consumed so the host suppresses its default action.
            Key::Space | Key::Char(' ') | Key::Enter => {
                self.toggle();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
