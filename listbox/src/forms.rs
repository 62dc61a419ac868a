//! Bridge contract between selection components and an external form layer.

use crate::components::list::ListValue;

/// The contract a form-control object uses to read and write a component's
/// value.
///
/// All operations are total: writing values with no matching option is a
/// silent no-op, and absent values are filtered rather than rejected.
pub trait ValueAccessor<T> {
    /// Write a value into the component from the form side.
    fn write_value(&self, value: Option<ListValue<T>>);

    /// Register the callback invoked with the recomputed value whenever the
    /// component's value changes.
    fn register_on_change(&self, callback: Box<dyn Fn(Option<ListValue<T>>) + Send + Sync>);

    /// Register the callback invoked when the component is touched.
    ///
    /// Implementations that do not track touched state accept the callback
    /// and never invoke it.
    fn register_on_touched(&self, callback: Box<dyn Fn() + Send + Sync>);

    /// Propagate the form control's disabled state into the component.
    fn set_disabled_state(&self, disabled: bool);
}
