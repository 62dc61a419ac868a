//! Tests for the ListOption component.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use listbox::prelude::*;

fn click() -> ClickEvent {
    ClickEvent {
        kind: ClickKind::Primary,
        position: Position::new(0, 0),
        modifiers: Modifiers::NONE,
    }
}

fn collect_changes<T: Clone + Send + Sync + 'static>(
    option: &ListOption<T>,
) -> Arc<Mutex<Vec<SelectionChange<T>>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    option.subscribe(move |change| {
        sink.lock().unwrap().push(change.clone());
    });
    changes
}

#[test]
fn test_select_deselect_toggle() {
    let option = ListOption::with_value(1);
    assert!(!option.is_selected());

    option.select();
    assert!(option.is_selected());

    option.deselect();
    assert!(!option.is_selected());

    option.toggle();
    assert!(option.is_selected());
    option.toggle();
    assert!(!option.is_selected());
}

#[test]
fn test_changes_carry_flag_and_value() {
    let option = ListOption::with_value(7);
    let changes = collect_changes(&option);

    option.select();
    option.deselect();

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 2);
    assert!(changes[0].selected);
    assert_eq!(changes[0].value, Some(7));
    assert!(!changes[1].selected);
    assert_eq!(changes[1].value, Some(7));
}

#[test]
fn test_select_is_a_write_not_a_compare_and_set() {
    let option = ListOption::with_value(1);
    let changes = collect_changes(&option);

    option.select();
    option.select();

    // Both writes are published even though the flag did not change.
    assert_eq!(changes.lock().unwrap().len(), 2);
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let option = ListOption::with_value(1);
    let count = Arc::new(Mutex::new(0u32));
    let sink = Arc::clone(&count);
    let id = option.subscribe(move |_| *sink.lock().unwrap() += 1);

    option.select();
    option.unsubscribe(id);
    option.deselect();

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_click_enter_and_space_toggle() {
    let option = ListOption::with_value(1);

    assert_eq!(option.on_click(&click()), EventResult::Consumed);
    assert!(option.is_selected());

    assert_eq!(option.on_key(&KeyCombo::key(Key::Enter)), EventResult::Consumed);
    assert!(!option.is_selected());

    // Space is consumed so the host suppresses its default action.
    assert_eq!(option.on_key(&KeyCombo::key(Key::Space)), EventResult::Consumed);
    assert!(option.is_selected());
}

#[test]
fn test_other_keys_and_modified_keys_are_ignored() {
    let option = ListOption::with_value(1);

    assert_eq!(
        option.on_key(&KeyCombo::key(Key::Char('x'))),
        EventResult::Ignored
    );
    assert_eq!(
        option.on_key(&KeyCombo::key(Key::Space).ctrl()),
        EventResult::Ignored
    );
    assert!(!option.is_selected());
}

#[test]
fn test_disabled_is_not_a_functional_guard() {
    let option = ListOption::with_value(1).disabled();

    // Programmatic selection still runs.
    option.select();
    assert!(option.is_selected());

    // Interaction still toggles; the affordance is styling-only.
    assert_eq!(option.on_key(&KeyCombo::key(Key::Space)), EventResult::Consumed);
    assert!(!option.is_selected());
}

#[test]
fn test_initially_selected_builder_publishes_nothing() {
    let option = ListOption::with_value(1).selected();
    let changes = collect_changes(&option);
    assert!(option.is_selected());
    assert!(changes.lock().unwrap().is_empty());
}

#[test]
fn test_a11y_attributes() {
    let option = ListOption::with_value(1).selected();
    let attrs = option.a11y();
    assert!(attrs.contains(&("role", "option".to_string())));
    assert!(attrs.contains(&("aria-selected", "true".to_string())));
    assert!(attrs.contains(&("aria-disabled", "false".to_string())));

    option.set_kind(OptionKind::GridOption);
    assert!(option.a11y().contains(&("role", "gridcell".to_string())));
}

#[test]
fn test_dirty_flag() {
    let option = ListOption::with_value(1);
    assert!(!option.is_dirty());
    option.select();
    assert!(option.is_dirty());
    option.clear_dirty();
    assert!(!option.is_dirty());
}

#[tokio::test]
async fn test_timed_option_reverts_silently() {
    let option = ListOption::with_value(9).timed_after(Duration::from_millis(50));
    let changes = collect_changes(&option);

    option.select();
    assert!(option.is_selected());

    // Poll past the expiry.
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!option.is_selected());

    // Only the select transition is observable; the reversion is silent.
    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert!(changes[0].selected);
}

#[tokio::test]
async fn test_timed_default_delay_is_200ms() {
    let option = ListOption::with_value(1).timed();
    assert_eq!(option.select_timeout(), Some(DEFAULT_SELECT_TIMEOUT));
    assert_eq!(DEFAULT_SELECT_TIMEOUT, Duration::from_millis(200));

    option.select();
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(option.is_selected());
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!option.is_selected());
}

#[test]
fn test_zero_timeout_behaves_as_plain_toggle() {
    // A zero timeout never schedules a timer, so deselects stay observable.
    let option = ListOption::with_value(3).timed_after(Duration::ZERO);
    let changes = collect_changes(&option);

    option.select();
    option.deselect();

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 2);
    assert!(changes[0].selected);
    assert!(!changes[1].selected);
}

#[test]
fn test_untimed_option_does_not_expire() {
    // No runtime in scope; selecting must not panic and must stick.
    let option = ListOption::with_value(1);
    option.select();
    std::thread::sleep(Duration::from_millis(20));
    assert!(option.is_selected());
}
