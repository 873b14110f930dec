//! Key bindings for tab navigation, with a [`KeyMap`] trait for help lines.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Short label for the keys, e.g. `"←/h"`.
    pub help_key: String,
    /// A human-readable description of the action this binding performs.
    pub description: String,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys (Ctrl, Alt, Shift).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code.
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for several key combinations.
    pub fn new(
        keys: Vec<KeyCombination>,
        help_key: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            help_key: help_key.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Return whether the given key event matches any of this binding's key
    /// combinations.  Always `false` when the binding is disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl KeyCombination {
    /// Create a key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Create a key combination with an explicit set of modifier keys.
    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }
}

/// Trait for types that define key bindings, so a host can render them in a
/// help line or overlay.
pub trait KeyMap {
    /// The most important bindings, for a one-line hint.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped by category.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

/// Bindings used by [`Tabs`](crate::tabs::Tabs).
#[derive(Debug, Clone)]
pub struct TabsKeyMap {
    /// Previous tab in the wide layout.
    pub prev: Binding,
    /// Next tab in the wide layout.
    pub next: Binding,
    /// Previous entry in the open dropdown.
    pub menu_prev: Binding,
    /// Next entry in the open dropdown.
    pub menu_next: Binding,
    /// Activate the focused tab, or open the collapsed dropdown.
    pub confirm: Binding,
    /// Open the collapsed dropdown.
    pub open: Binding,
    /// Close the open dropdown.
    pub close: Binding,
}

impl Default for TabsKeyMap {
    fn default() -> Self {
        let k = KeyCombination::new;
        Self {
            prev: Binding::new(vec![k(KeyCode::Left), k(KeyCode::Char('h'))], "←/h", "prev tab"),
            next: Binding::new(vec![k(KeyCode::Right), k(KeyCode::Char('l'))], "→/l", "next tab"),
            menu_prev: Binding::new(vec![k(KeyCode::Up), k(KeyCode::Char('k'))], "↑/k", "up"),
            menu_next: Binding::new(
                vec![k(KeyCode::Down), k(KeyCode::Char('j')), k(KeyCode::Tab)],
                "↓/j",
                "down",
            ),
            confirm: Binding::new(
                vec![k(KeyCode::Enter), k(KeyCode::Char(' '))],
                "enter",
                "select",
            ),
            open: Binding::new(vec![k(KeyCode::Down)], "↓", "open menu"),
            close: Binding::new(vec![k(KeyCode::Esc)], "esc", "close menu"),
        }
    }
}

impl KeyMap for TabsKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next, &self.confirm]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.prev, &self.next, &self.confirm],
            vec![&self.open, &self.menu_prev, &self.menu_next, &self.close],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn binding_matches_any_key() {
        let map = TabsKeyMap::default();
        assert!(map.prev.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(map.prev.matches(&key(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(!map.prev.matches(&key(KeyCode::Right, KeyModifiers::NONE)));
    }

    #[test]
    fn binding_tolerates_extra_modifiers() {
        let map = TabsKeyMap::default();
        assert!(map.next.matches(&key(KeyCode::Right, KeyModifiers::SHIFT)));
    }

    #[test]
    fn required_modifier_must_be_held() {
        let b = Binding::new(
            vec![KeyCombination::with_modifiers(KeyCode::Char('n'), KeyModifiers::CONTROL)],
            "ctrl+n",
            "next",
        );
        assert!(b.matches(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = TabsKeyMap::default().confirm.enabled(false);
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn help_groups() {
        let map = TabsKeyMap::default();
        let short: Vec<_> = map.short_help().iter().map(|b| b.help_key.as_str()).collect();
        assert_eq!(short, vec!["←/h", "→/l", "enter"]);
        assert_eq!(map.full_help().len(), 2);
    }
}
