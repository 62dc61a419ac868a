//! Tests for the value-accessor bridge.

use std::sync::{Arc, Mutex};

use listbox::prelude::*;

fn options(values: &[i32]) -> Vec<ListOption<i32>> {
    values.iter().map(|v| ListOption::with_value(*v)).collect()
}

#[test]
fn test_write_value_before_discovery_is_reconciled_later() {
    let list = SelectionList::multiple();
    list.write_value(Some(ListValue::Multiple(vec![2, 3])));
    assert_eq!(list.value(), Some(ListValue::Multiple(vec![2, 3])));

    let opts = options(&[1, 2, 3, 4]);
    list.set_options(opts.clone());

    assert!(!opts[0].is_selected());
    assert!(opts[1].is_selected());
    assert!(opts[2].is_selected());
    assert!(!opts[3].is_selected());
    assert_eq!(list.value(), Some(ListValue::Multiple(vec![2, 3])));
}

#[test]
fn test_write_empty_then_values() {
    let list = SelectionList::multiple();
    let opts = options(&[1, 2, 3, 4]);
    list.set_options(opts.clone());

    list.write_value(Some(ListValue::Multiple(vec![])));
    assert_eq!(list.value(), None);

    list.write_value(Some(ListValue::Multiple(vec![2, 3])));
    assert_eq!(list.value(), Some(ListValue::Multiple(vec![2, 3])));
    assert!(!opts[0].is_selected());
    assert!(!opts[3].is_selected());
}

#[test]
fn test_write_value_replaces_previous_selection() {
    let list = SelectionList::new();
    let opts = options(&[1, 2, 3]);
    list.set_options(opts.clone());

    list.write_value(Some(ListValue::Single(1)));
    assert_eq!(list.value(), Some(ListValue::Single(1)));

    list.write_value(Some(ListValue::Single(3)));
    assert_eq!(list.value(), Some(ListValue::Single(3)));
    assert!(!opts[0].is_selected());

    list.write_value(None);
    assert_eq!(list.value(), None);
}

#[test]
fn test_on_change_fires_with_recomputed_value() {
    let list = SelectionList::new();
    let opts = options(&[1, 2]);
    list.set_options(opts.clone());

    let seen: Arc<Mutex<Vec<Option<ListValue<i32>>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    list.register_on_change(Box::new(move |value| sink.lock().unwrap().push(value)));

    opts[1].select();
    opts[1].deselect();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], Some(ListValue::Single(2)));
    assert_eq!(seen[1], None);
}

#[test]
fn test_on_touched_is_never_invoked() {
    let list = SelectionList::new();
    let opts = options(&[1, 2]);
    list.set_options(opts.clone());

    let touched = Arc::new(Mutex::new(0u32));
    let sink = Arc::clone(&touched);
    list.register_on_touched(Box::new(move || *sink.lock().unwrap() += 1));

    opts[0].select();
    list.write_value(Some(ListValue::Single(2)));
    list.deselect_all();

    assert_eq!(*touched.lock().unwrap(), 0);
}

#[test]
fn test_set_disabled_state_propagates() {
    let list = SelectionList::new();
    let opts = options(&[1, 2]);
    list.set_options(opts.clone());

    list.set_disabled_state(true);
    assert!(opts.iter().all(|o| o.is_disabled()));
    list.set_disabled_state(false);
    assert!(opts.iter().all(|o| !o.is_disabled()));
}

#[test]
fn test_write_multiple_into_single_list_keeps_last() {
    let list = SelectionList::new();
    let opts = options(&[1, 2, 3]);
    list.set_options(opts.clone());

    // Each value round-trips through select(); exclusivity leaves the last.
    list.write_value(Some(ListValue::Multiple(vec![1, 3])));
    assert_eq!(list.value(), Some(ListValue::Single(3)));
    assert!(!opts[0].is_selected());
}
