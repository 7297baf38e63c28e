//! Translates winit input events into waygrid [`Msg`] values.

use std::time::Instant;

use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{Key as WKey, NamedKey};

use waygrid_core::messages::{Key, MouseAction, Msg};

/// Key-down events only; other keys are ignored.
pub(crate) fn translate_keyboard(event: &KeyEvent) -> Option<Msg> {
    if event.state != ElementState::Pressed {
        return None;
    }

    let key = match &event.logical_key {
        WKey::Named(named) => match named {
            NamedKey::Escape => Key::Escape,
            NamedKey::Enter => Key::Enter,
            NamedKey::Space => Key::Space,
            _ => return None,
        },
        WKey::Character(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Char(c),
                _ => return None,
            }
        }
        _ => return None,
    };

    Some(Msg::KeyDown {
        key,
        time: Instant::now(),
    })
}

/// Map a button transition to a [`MouseAction`]. Only the primary button
/// paints; its release ends a drag.
pub(crate) fn translate_mouse_button(
    btn_state: ElementState,
    button: MouseButton,
) -> Option<MouseAction> {
    match (btn_state, button) {
        (ElementState::Pressed, MouseButton::Left) => Some(MouseAction::Main),
        (ElementState::Released, MouseButton::Left) => Some(MouseAction::Release),
        _ => None,
    }
}
