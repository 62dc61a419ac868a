//! List option component - an individually selectable element.
//!
//! A `ListOption<T>` owns its own selected/disabled/value state, toggles on
//! click, Enter and Space, and publishes every confirmed selection change to
//! its subscribers. Options configured with a select timeout behave like
//! momentary triggers: they revert to unselected after the delay without
//! publishing the reversion.
//!
//! Options are discovered by a [`SelectionList`](crate::components::list::SelectionList)
//! through containment; they hold no reference back to their container.

mod events;
mod state;

pub use state::{
    DEFAULT_SELECT_TIMEOUT, ListOption, OptionId, OptionKind, SelectionChange, SubscriberId,
};
