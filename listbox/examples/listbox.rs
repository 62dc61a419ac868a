//! Listbox Example
//!
//! Demonstrates the selection-list container and option primitive:
//! - Single-selection exclusivity
//! - Multi-selection with select/deselect by value
//! - A timed option that reverts on its own

use std::fs::File;
use std::time::Duration;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use listbox::events::convert_click_event;
use listbox::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

#[tokio::main]
async fn main() {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        Config::default(),
        File::create("listbox.log").expect("log file"),
    );

    // Single-selection: clicking a new option deselects the previous one.
    let single = SelectionList::new();
    let opts: Vec<_> = (1..=3).map(ListOption::with_value).collect();
    single.set_options(opts.clone());

    // A host would read this from the terminal event stream.
    let click = convert_click_event(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    })
    .expect("left button press converts");
    opts[0].on_click(&click);
    println!("after click 1: {:?}", single.value());
    opts[2].on_click(&click);
    println!("after click 3: {:?}", single.value());

    // Multi-selection driven by value.
    let multi = SelectionList::multiple();
    multi.set_options((1..=5).map(ListOption::with_value).collect());
    multi.select(&[2, 4]);
    println!("multi: {:?}", multi.value());

    // A timed option behaves like a momentary trigger.
    let trigger = ListOption::with_value("ping").timed_after(Duration::from_millis(100));
    trigger.select();
    println!("trigger selected: {}", trigger.is_selected());
    tokio::time::sleep(Duration::from_millis(200)).await;
    println!("trigger selected after expiry: {}", trigger.is_selected());
}
