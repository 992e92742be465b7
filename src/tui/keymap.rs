use crate::kernel::Button;
use crate::services::KeybindingRule;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Shift is dropped for printable characters: terminals already report
    /// `+`, `*`, `%` and `_` as shifted glyphs.
    pub fn from_event(event: &KeyEvent) -> Self {
        let mut modifiers = event.modifiers;
        if matches!(event.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(event.code, modifiers)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Press(Button),
    Quit,
}

pub struct Keymap {
    bindings: HashMap<Key, KeyAction>,
}

impl Keymap {
    pub fn new() -> Self {
        let mut bindings = HashMap::new();
        for d in 0..=9u8 {
            if let (Some(ch), Some(button)) = (char::from_digit(u32::from(d), 10), Button::digit(d))
            {
                bindings.insert(Key::simple(KeyCode::Char(ch)), KeyAction::Press(button));
            }
        }

        let defaults = [
            (Key::simple(KeyCode::Char('.')), Button::Decimal),
            (Key::simple(KeyCode::Char(',')), Button::Decimal),
            (Key::simple(KeyCode::Char('+')), Button::ADD),
            (Key::simple(KeyCode::Char('-')), Button::SUBTRACT),
            (Key::simple(KeyCode::Char('*')), Button::MULTIPLY),
            (Key::simple(KeyCode::Char('x')), Button::MULTIPLY),
            (Key::simple(KeyCode::Char('/')), Button::DIVIDE),
            (Key::simple(KeyCode::Char('%')), Button::Percent),
            (Key::simple(KeyCode::Char('=')), Button::Equal),
            (Key::simple(KeyCode::Enter), Button::Equal),
            (Key::simple(KeyCode::Esc), Button::Clear),
            (Key::simple(KeyCode::Char('c')), Button::Clear),
            (Key::simple(KeyCode::Backspace), Button::Clear),
            (Key::simple(KeyCode::Char('n')), Button::ToggleSign),
            (Key::simple(KeyCode::Char('_')), Button::ToggleSign),
        ];
        for (key, button) in defaults {
            bindings.insert(key, KeyAction::Press(button));
        }

        bindings.insert(Key::simple(KeyCode::Char('q')), KeyAction::Quit);
        bindings.insert(Key::ctrl(KeyCode::Char('c')), KeyAction::Quit);

        Self { bindings }
    }

    /// Defaults overlaid with user rules. Rules that fail to parse are skipped.
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut keymap = Self::new();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "invalid keybinding key");
                continue;
            };
            let action = if rule.button.trim().eq_ignore_ascii_case("quit") {
                KeyAction::Quit
            } else {
                match Button::from_name(&rule.button) {
                    Some(button) => KeyAction::Press(button),
                    None => {
                        tracing::warn!(button = %rule.button, "unknown button in keybinding");
                        continue;
                    }
                }
            };
            keymap.bind(key, action);
        }
        keymap
    }

    pub fn bind(&mut self, key: Key, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    pub fn get(&self, key: &Key) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }

    /// Releases are ignored so a keypress is handled once.
    pub fn resolve(&self, event: &KeyEvent) -> Option<KeyAction> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        self.get(&Key::from_event(event))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_keybinding(value: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part: Option<&str> = None;
    for part in value.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => {}
            _ => key_part = Some(part),
        }
    }
    // A lone "+" splits into nothing.
    let key_part = match key_part {
        Some(part) => part,
        None if value.trim().ends_with('+') => "+",
        None => return None,
    };
    let code = parse_key_code(key_part)?;
    Some(Key::new(code, modifiers))
}

fn parse_key_code(value: &str) -> Option<KeyCode> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let code = match v_lc.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        _ if v_lc.len() > 1 && v_lc.starts_with('f') => {
            let n = v_lc.strip_prefix('f')?.parse::<u8>().ok()?;
            KeyCode::F(n)
        }
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(code)
}

#[cfg(test)]
#[path = "../../tests/unit/tui/keymap.rs"]
mod tests;
