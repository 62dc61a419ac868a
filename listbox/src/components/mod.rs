//! UI components with self-managed state.
//!
//! Each component lives in its own module with:
//! - `state.rs` - the component state type
//! - `events.rs` - input event handling
//! - `mod.rs` - public exports

pub mod events;
pub mod list;
pub mod option;
pub mod selection;

pub use list::{ListKind, ListValue, SelectionList, SelectionListId};
pub use option::{
    DEFAULT_SELECT_TIMEOUT, ListOption, OptionId, OptionKind, SelectionChange, SubscriberId,
};
pub use selection::{SelectionMode, SelectionModel};
