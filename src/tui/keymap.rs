//! Declarative key bindings for the terminal user interface.
//!
//! Each logical action owns its physical keys and the label shown in the
//! help line. Lookup and help rendering both read the same table, so the
//! bindings and the help text cannot drift apart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::tui::enums::Action;

/// One logical action with its physical keys and help labels.
pub struct KeyBinding {
    pub action: Action,
    pub keys: &'static [KeyCode],
    pub help_keys: &'static str,
    pub help_label: &'static str,
}

/// The fixed binding table, in help-line display order.
pub const BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        action: Action::Up,
        keys: &[KeyCode::Char('k'), KeyCode::Up],
        help_keys: "k/↑",
        help_label: "Up",
    },
    KeyBinding {
        action: Action::Down,
        keys: &[KeyCode::Char('j'), KeyCode::Down],
        help_keys: "j/↓",
        help_label: "Down",
    },
    KeyBinding {
        action: Action::Left,
        keys: &[KeyCode::Char('h'), KeyCode::Left],
        help_keys: "h/←",
        help_label: "Left",
    },
    KeyBinding {
        action: Action::Right,
        keys: &[KeyCode::Char('l'), KeyCode::Right],
        help_keys: "l/→",
        help_label: "Right",
    },
    KeyBinding {
        action: Action::Quit,
        keys: &[KeyCode::Char('q')],
        help_keys: "q",
        help_label: "Quit",
    },
    KeyBinding {
        action: Action::Select,
        keys: &[KeyCode::Enter, KeyCode::Char(' ')],
        help_keys: "enter",
        help_label: "Select",
    },
    KeyBinding {
        action: Action::New,
        keys: &[KeyCode::Char('a')],
        help_keys: "a",
        help_label: "New",
    },
];

/// Map a key event to its logical action, if it is bound.
///
/// Ctrl-C quits like `q`; any other modified key is unbound.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    BINDINGS
        .iter()
        .find(|binding| binding.keys.contains(&key.code))
        .map(|binding| binding.action)
}

/// Build the bottom help line from the binding table.
pub fn help_line() -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();
    for (i, binding) in BINDINGS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" • ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            binding.help_keys,
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            binding.help_label,
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_letter_and_arrow_keys_map_to_same_action() {
        assert_eq!(action_for(press(KeyCode::Char('k'))), Some(Action::Up));
        assert_eq!(action_for(press(KeyCode::Up)), Some(Action::Up));
        assert_eq!(action_for(press(KeyCode::Char('j'))), Some(Action::Down));
        assert_eq!(action_for(press(KeyCode::Down)), Some(Action::Down));
        assert_eq!(action_for(press(KeyCode::Char('h'))), Some(Action::Left));
        assert_eq!(action_for(press(KeyCode::Left)), Some(Action::Left));
        assert_eq!(action_for(press(KeyCode::Char('l'))), Some(Action::Right));
        assert_eq!(action_for(press(KeyCode::Right)), Some(Action::Right));
    }

    #[test]
    fn test_enter_and_space_select() {
        assert_eq!(action_for(press(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(action_for(press(KeyCode::Char(' '))), Some(Action::Select));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for(press(KeyCode::Char('q'))), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c), Some(Action::Quit));
    }

    #[test]
    fn test_new_key_is_bound() {
        assert_eq!(action_for(press(KeyCode::Char('a'))), Some(Action::New));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        assert_eq!(action_for(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for(press(KeyCode::Esc)), None);
        assert_eq!(action_for(press(KeyCode::Tab)), None);
        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_k), None);
    }

    #[test]
    fn test_help_line_lists_every_binding() {
        let line = help_line();
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        for binding in BINDINGS {
            assert!(text.contains(binding.help_keys), "missing {}", binding.help_keys);
            assert!(text.contains(binding.help_label), "missing {}", binding.help_label);
        }
    }
}
