//! Headless selection-list components.
//!
//! `listbox` provides a list-option primitive and a selection-list container
//! that together behave like a native single/multi-select control, without
//! committing to a renderer. Components are cheaply-clonable handles over
//! shared state: hosts poll dirty flags to know when to redraw, feed input
//! through [`components::events::ComponentEvents`], and bridge to a form
//! layer through [`forms::ValueAccessor`].

pub mod components;
pub mod events;
pub mod forms;
pub mod keybinds;
pub mod utils;

pub mod prelude {
    pub use crate::components::events::{ComponentEvents, EventResult};
    pub use crate::components::{
        DEFAULT_SELECT_TIMEOUT, ListKind, ListOption, ListValue, OptionId, OptionKind,
        SelectionChange, SelectionList, SelectionListId, SelectionMode, SelectionModel,
        SubscriberId,
    };
    pub use crate::events::{ClickEvent, ClickKind, Modifiers, Position};
    pub use crate::forms::ValueAccessor;
    pub use crate::keybinds::{Key, KeyCombo};
    pub use crate::utils::OnceLatch;
}
