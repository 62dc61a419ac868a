//! Input event types and conversion from crossterm events.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use log::trace;

use crate::keybinds::{Key, KeyCombo};

/// Modifier keys held during an input event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    /// Control key
    pub ctrl: bool,
    /// Shift key
    pub shift: bool,
    /// Alt key
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
}

/// A position in host cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    /// Create a new position
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Which mouse button produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickKind {
    /// Left button
    Primary,
    /// Right button
    Secondary,
}

/// A mouse click event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The button kind
    pub kind: ClickKind,
    /// Click position
    pub position: Position,
    /// Modifiers held during the click
    pub modifiers: Modifiers,
}

/// Convert crossterm KeyModifiers to listbox Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

/// Convert crossterm KeyCode to listbox Key
fn convert_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

/// Convert a crossterm KeyEvent to a listbox KeyCombo.
///
/// Release and repeat events are dropped; only presses reach components.
pub fn convert_key_event(event: KeyEvent) -> Option<KeyCombo> {
    if event.kind != KeyEventKind::Press {
        trace!("Ignoring non-press key event");
        return None;
    }
    let key = convert_key(event.code)?;
    let modifiers = convert_modifiers(event.modifiers);

    // Handle space specially (KeyCode::Char(' ') should become Key::Space)
    let key = if let Key::Char(' ') = key {
        Key::Space
    } else {
        key
    };

    Some(KeyCombo::new(key, modifiers))
}

/// Convert a crossterm MouseEvent to a click, if it is a button press.
pub fn convert_click_event(event: MouseEvent) -> Option<ClickEvent> {
    let position = Position::new(event.column, event.row);
    let modifiers = convert_modifiers(event.modifiers);

    match event.kind {
        MouseEventKind::Down(button) => {
            let kind = match button {
                MouseButton::Left => ClickKind::Primary,
                MouseButton::Right => ClickKind::Secondary,
                MouseButton::Middle => return None, // Not supported
            };
            Some(ClickEvent {
                kind,
                position,
                modifiers,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key_event(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    fn mouse_event(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind,
            column: 4,
            row: 2,
            modifiers,
        }
    }

    #[test]
    fn test_key_press_converts_with_modifiers() {
        let combo = convert_key_event(key_event(
            KeyCode::Char('a'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ))
        .unwrap();
        assert_eq!(combo, KeyCombo::key(Key::Char('a')).ctrl());
    }

    #[test]
    fn test_space_char_normalizes_to_space_key() {
        let combo = convert_key_event(key_event(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Press,
        ))
        .unwrap();
        assert_eq!(combo.key, Key::Space);
    }

    #[test]
    fn test_release_and_unmapped_keys_are_dropped() {
        assert!(
            convert_key_event(key_event(
                KeyCode::Enter,
                KeyModifiers::NONE,
                KeyEventKind::Release,
            ))
            .is_none()
        );
        assert!(
            convert_key_event(key_event(
                KeyCode::F(1),
                KeyModifiers::NONE,
                KeyEventKind::Press,
            ))
            .is_none()
        );
    }

    #[test]
    fn test_mouse_down_converts_to_click() {
        let click = convert_click_event(mouse_event(
            MouseEventKind::Down(MouseButton::Left),
            KeyModifiers::SHIFT,
        ))
        .unwrap();
        assert_eq!(click.kind, ClickKind::Primary);
        assert_eq!(click.position, Position::new(4, 2));
        assert!(click.modifiers.shift);

        let click = convert_click_event(mouse_event(
            MouseEventKind::Down(MouseButton::Right),
            KeyModifiers::NONE,
        ))
        .unwrap();
        assert_eq!(click.kind, ClickKind::Secondary);
    }

    #[test]
    fn test_non_press_mouse_events_are_dropped() {
        assert!(
            convert_click_event(mouse_event(
                MouseEventKind::Up(MouseButton::Left),
                KeyModifiers::NONE,
            ))
            .is_none()
        );
        assert!(
            convert_click_event(mouse_event(
                MouseEventKind::Down(MouseButton::Middle),
                KeyModifiers::NONE,
            ))
            .is_none()
        );
    }
}
