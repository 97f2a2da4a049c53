use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

use crate::position::TextDirection;

/// Canonical name for a pressed key: a fixed table for the navigation keys,
/// the upper-cased character otherwise, with `SHIFT_`/`CTRL_`/`ALT_`
/// prefixes composed in that order. Keys with no canonical name (function
/// keys, media keys) yield `None`.
pub fn parse_key(event: &KeyEvent) -> Option<String> {
    let mut modifiers = event.modifiers;
    let base = match event.code {
        KeyCode::Tab => "TAB".to_string(),
        KeyCode::BackTab => {
            // shift+tab arrives pre-folded; undo that so the prefix applies
            modifiers |= KeyModifiers::SHIFT;
            "TAB".to_string()
        }
        KeyCode::Enter => "ENTER".to_string(),
        KeyCode::Esc => "ESCAPE".to_string(),
        KeyCode::Char(' ') => "SPACE".to_string(),
        KeyCode::Left => "ARROW_LEFT".to_string(),
        KeyCode::Up => "ARROW_UP".to_string(),
        KeyCode::Right => "ARROW_RIGHT".to_string(),
        KeyCode::Down => "ARROW_DOWN".to_string(),
        KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
            "SHIFT".to_string()
        }
        KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
        _ => return None,
    };
    let mut key = String::new();
    if modifiers.contains(KeyModifiers::SHIFT) && base != "SHIFT" {
        key.push_str("SHIFT_");
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        key.push_str("CTRL_");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        key.push_str("ALT_");
    }
    key.push_str(&base);
    Some(key)
}

/// Key-name to command bindings for one widget kind.
///
/// `Directional` tables carry separate left-to-right and right-to-left
/// bindings; the active side overlays the other, so only the keys that
/// actually differ need both entries.
#[derive(Debug, Clone)]
pub enum CommandTable {
    Flat(HashMap<String, String>),
    Directional {
        ltr: HashMap<String, String>,
        rtl: HashMap<String, String>,
    },
}

impl CommandTable {
    pub fn flat<K, V>(bindings: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        CommandTable::Flat(
            bindings
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn directional<K, V>(
        ltr: impl IntoIterator<Item = (K, V)>,
        rtl: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        CommandTable::Directional {
            ltr: ltr.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            rtl: rtl.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Merged command maps, one per text direction, built once at registration.
#[derive(Debug, Clone)]
struct RegisteredTable {
    ltr: HashMap<String, String>,
    rtl: HashMap<String, String>,
}

impl RegisteredTable {
    fn build(table: CommandTable) -> Self {
        match table {
            CommandTable::Flat(map) => Self {
                ltr: map.clone(),
                rtl: map,
            },
            CommandTable::Directional { ltr, rtl } => {
                // the direction-appropriate side wins over the other
                let mut merged_ltr = rtl.clone();
                merged_ltr.extend(ltr.clone());
                let mut merged_rtl = ltr;
                merged_rtl.extend(rtl);
                Self {
                    ltr: merged_ltr,
                    rtl: merged_rtl,
                }
            }
        }
    }

    fn for_direction(&self, direction: TextDirection) -> &HashMap<String, String> {
        match direction {
            TextDirection::Ltr => &self.ltr,
            TextDirection::Rtl => &self.rtl,
        }
    }
}

/// Outcome of routing one key event through a component's command table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The component binds this key; run the named command.
    Handled(String),
    /// The key carries no binding for this component; the caller may apply
    /// its default behavior.
    Unhandled,
    /// The component never registered a table. Logged, never fatal.
    NoMatch,
}

/// Registry of per-widget-kind command tables.
///
/// Widget kinds register once when they are set up; registering the same
/// name again replaces the previous table. There is no unregister.
#[derive(Debug, Default)]
pub struct KeyDispatcher {
    tables: HashMap<String, RegisteredTable>,
}

impl KeyDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, component: impl Into<String>, table: CommandTable) {
        self.tables
            .insert(component.into(), RegisteredTable::build(table));
    }

    pub fn is_registered(&self, component: &str) -> bool {
        self.tables.contains_key(component)
    }

    /// Resolve `event` to a command for `component` under `direction`.
    pub fn dispatch(
        &self,
        event: &KeyEvent,
        component: &str,
        direction: TextDirection,
    ) -> Dispatch {
        let Some(table) = self.tables.get(component) else {
            tracing::warn!(component, "no command table registered");
            return Dispatch::NoMatch;
        };
        let Some(key) = parse_key(event) else {
            return Dispatch::Unhandled;
        };
        match table.for_direction(direction).get(&key) {
            Some(command) => Dispatch::Handled(command.clone()),
            None => Dispatch::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn enter_parses_to_its_table_name() {
        assert_eq!(parse_key(&key(KeyCode::Enter)).as_deref(), Some("ENTER"));
    }

    #[test]
    fn shift_prefix_composes() {
        let ev = key_with(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(parse_key(&ev).as_deref(), Some("SHIFT_ENTER"));
    }

    #[test]
    fn multiple_prefixes_compose_in_fixed_order() {
        let ev = key_with(
            KeyCode::Char('a'),
            KeyModifiers::SHIFT | KeyModifiers::CONTROL,
        );
        assert_eq!(parse_key(&ev).as_deref(), Some("SHIFT_CTRL_A"));
    }

    #[test]
    fn printable_characters_upper_case() {
        assert_eq!(parse_key(&key(KeyCode::Char('x'))).as_deref(), Some("X"));
        assert_eq!(parse_key(&key(KeyCode::Char(' '))).as_deref(), Some("SPACE"));
    }

    #[test]
    fn back_tab_normalizes_to_shift_tab() {
        assert_eq!(
            parse_key(&key(KeyCode::BackTab)).as_deref(),
            Some("SHIFT_TAB")
        );
    }

    #[test]
    fn unnameable_keys_parse_to_none() {
        assert_eq!(parse_key(&key(KeyCode::F(5))), None);
    }

    #[test]
    fn flat_table_resolves_commands() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(
            "menu",
            CommandTable::flat([("ENTER", "open"), ("ESCAPE", "close")]),
        );
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Enter), "menu", TextDirection::Ltr),
            Dispatch::Handled("open".to_string())
        );
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Char('z')), "menu", TextDirection::Ltr),
            Dispatch::Unhandled
        );
    }

    #[test]
    fn directional_table_swaps_under_rtl() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(
            "carousel",
            CommandTable::directional(
                [("ARROW_RIGHT", "next")],
                [("ARROW_RIGHT", "previous")],
            ),
        );
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Right), "carousel", TextDirection::Ltr),
            Dispatch::Handled("next".to_string())
        );
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Right), "carousel", TextDirection::Rtl),
            Dispatch::Handled("previous".to_string())
        );
    }

    #[test]
    fn direction_specific_entries_overlay_the_other_side() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register(
            "tabs",
            CommandTable::directional(
                [("ARROW_RIGHT", "next"), ("ENTER", "activate")],
                [("ARROW_RIGHT", "previous")],
            ),
        );
        // rtl inherits the ltr-only ENTER binding
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Enter), "tabs", TextDirection::Rtl),
            Dispatch::Handled("activate".to_string())
        );
    }

    #[test]
    fn unregistered_component_is_a_warned_no_match() {
        let dispatcher = KeyDispatcher::new();
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Enter), "nope", TextDirection::Ltr),
            Dispatch::NoMatch
        );
    }

    #[test]
    fn re_registration_replaces_the_table() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register("menu", CommandTable::flat([("ENTER", "open")]));
        dispatcher.register("menu", CommandTable::flat([("ENTER", "toggle")]));
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::Enter), "menu", TextDirection::Ltr),
            Dispatch::Handled("toggle".to_string())
        );
    }

    #[test]
    fn unnameable_key_dispatches_as_unhandled() {
        let mut dispatcher = KeyDispatcher::new();
        dispatcher.register("menu", CommandTable::flat([("ENTER", "open")]));
        assert_eq!(
            dispatcher.dispatch(&key(KeyCode::F(2)), "menu", TextDirection::Ltr),
            Dispatch::Unhandled
        );
    }
}
