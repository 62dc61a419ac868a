//! Selection list component - a container aggregating list options.
//!
//! A `SelectionList<T>` observes an ordered, changing collection of
//! [`ListOption`](crate::components::option::ListOption) handles, keeps a
//! [`SelectionModel`](crate::components::selection::SelectionModel)
//! synchronized with the options' own flags, derives a single- or
//! multi-valued `value`, and bridges to a form layer through
//! [`ValueAccessor`](crate::forms::ValueAccessor).
//!
//! # Example
//!
//! ```
//! use listbox::prelude::*;
//!
//! let list = SelectionList::new();
//! list.set_options(vec![
//!     ListOption::with_value(1),
//!     ListOption::with_value(2),
//!     ListOption::with_value(3),
//! ]);
//! list.select(&[2]);
//! assert_eq!(list.value(), Some(ListValue::Single(2)));
//! ```

mod state;

pub use state::{ListKind, ListValue, SelectionList, SelectionListId};
