//! Narrows crossterm events to [`crate::core::event`] types.

use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::event as ct;

/// Returns `None` for events the deck has no use for (bracketed paste).
pub fn into_input_event(event: ct::Event) -> Option<InputEvent> {
    Some(match event {
        ct::Event::Key(key) => InputEvent::Key(into_key_event(key)),
        ct::Event::Mouse(mouse) => InputEvent::Mouse(into_mouse_event(mouse)),
        ct::Event::Resize(w, h) => InputEvent::Resize(w, h),
        ct::Event::FocusGained => InputEvent::FocusGained,
        ct::Event::FocusLost => InputEvent::FocusLost,
        ct::Event::Paste(_) => return None,
    })
}

fn into_key_event(event: ct::KeyEvent) -> KeyEvent {
    let mods = event.modifiers;
    let mut modifiers = KeyModifiers {
        shift: mods.contains(ct::KeyModifiers::SHIFT),
        ctrl: mods.contains(ct::KeyModifiers::CONTROL),
        alt: mods.contains(ct::KeyModifiers::ALT),
    };
    let code = match event.code {
        ct::KeyCode::Char(ch) => KeyCode::Char(ch),
        ct::KeyCode::Esc => KeyCode::Esc,
        // Some terminals report Ctrl+Space as NUL.
        ct::KeyCode::Null => {
            modifiers.ctrl = true;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Other,
    };
    KeyEvent {
        code,
        modifiers,
        released: event.kind == ct::KeyEventKind::Release,
    }
}

fn into_mouse_event(event: ct::MouseEvent) -> MouseEvent {
    let kind = match event.kind {
        ct::MouseEventKind::Down(button) => MouseEventKind::Down(into_mouse_button(button)),
        ct::MouseEventKind::Up(button) => MouseEventKind::Up(into_mouse_button(button)),
        ct::MouseEventKind::Drag(button) => MouseEventKind::Drag(into_mouse_button(button)),
        ct::MouseEventKind::Moved => MouseEventKind::Moved,
        ct::MouseEventKind::ScrollUp
        | ct::MouseEventKind::ScrollDown
        | ct::MouseEventKind::ScrollLeft
        | ct::MouseEventKind::ScrollRight => MouseEventKind::Scroll,
    };
    MouseEvent {
        kind,
        column: event.column,
        row: event.row,
    }
}

fn into_mouse_button(button: ct::MouseButton) -> MouseButton {
    match button {
        ct::MouseButton::Left => MouseButton::Left,
        ct::MouseButton::Right => MouseButton::Right,
        ct::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
