//! Key string parsing (`"ctrl+p"`, `"shift+tab"`, `"enter"`)

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

/// Parse a human-readable key description into a `KeyEvent`.
///
/// Modifiers are joined with `+`. Returns `None` for anything unrecognised.
///
/// ```
/// use crossterm::event::{KeyCode, KeyModifiers};
/// use opsdeck_core::keys::parse_key_string;
///
/// let k = parse_key_string("ctrl+r").unwrap();
/// assert_eq!(k.code, KeyCode::Char('r'));
/// assert!(k.modifiers.contains(KeyModifiers::CONTROL));
/// ```
pub fn parse_key_string(key_str: &str) -> Option<KeyEvent> {
    let key_str = key_str.trim().to_lowercase();
    if key_str.is_empty() {
        return None;
    }

    if key_str == "shift+tab" || key_str == "backtab" {
        return Some(press(KeyCode::BackTab, KeyModifiers::SHIFT));
    }

    let parts: Vec<&str> = key_str.split('+').collect();
    let (key_part, modifier_parts) = parts.split_last()?;

    let mut modifiers = KeyModifiers::empty();
    for part in modifier_parts {
        match part.trim() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => {}
        }
    }

    let code = match key_part.trim() {
        "esc" | "escape" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => KeyCode::Char(c.chars().next()?),
        _ => return None,
    };

    Some(press(code, modifiers))
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_string("esc").map(|k| k.code), Some(KeyCode::Esc));
        assert_eq!(
            parse_key_string("Delete").map(|k| k.code),
            Some(KeyCode::Delete)
        );
        assert_eq!(
            parse_key_string("shift+tab").map(|k| k.code),
            Some(KeyCode::BackTab)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(parse_key_string("").is_none());
        assert!(parse_key_string("hyper").is_none());
    }
}
