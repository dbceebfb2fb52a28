//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application: the actions a
//! key can trigger, the key bindings, and the default key map. Calculator
//! actions translate into engine inputs through `HotkeyAction::input`.

use crate::engine::{Input, Operator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    // Calculator keys
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Decimal,
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Equals,
    Clear,
    Backspace,
    SignToggle,
    Percent,
    Reciprocal,
    SquareRoot,

    // Application actions
    CopyResult,
    ToggleLog,
    CycleTheme,
    Quit,
}

const DIGITS: [HotkeyAction; 10] = [
    HotkeyAction::Digit0,
    HotkeyAction::Digit1,
    HotkeyAction::Digit2,
    HotkeyAction::Digit3,
    HotkeyAction::Digit4,
    HotkeyAction::Digit5,
    HotkeyAction::Digit6,
    HotkeyAction::Digit7,
    HotkeyAction::Digit8,
    HotkeyAction::Digit9,
];

impl HotkeyAction {
    /// Return the engine input for calculator actions, or `None` for
    /// application actions.
    ///
    pub fn input(&self) -> Option<Input> {
        if let Some(digit) = DIGITS.iter().position(|action| action == self) {
            return Some(Input::Digit(digit as u8));
        }
        let input = match self {
            HotkeyAction::Decimal => Input::Decimal,
            HotkeyAction::Add => Input::Operator(Operator::Add),
            HotkeyAction::Subtract => Input::Operator(Operator::Subtract),
            HotkeyAction::Multiply => Input::Operator(Operator::Multiply),
            HotkeyAction::Divide => Input::Operator(Operator::Divide),
            HotkeyAction::Power => Input::Operator(Operator::Power),
            HotkeyAction::Equals => Input::Equals,
            HotkeyAction::Clear => Input::Clear,
            HotkeyAction::Backspace => Input::Backspace,
            HotkeyAction::SignToggle => Input::SignToggle,
            HotkeyAction::Percent => Input::Percent,
            HotkeyAction::Reciprocal => Input::Reciprocal,
            HotkeyAction::SquareRoot => Input::SquareRoot,
            _ => return None,
        };
        Some(input)
    }

    /// Return the label shown on the keypad button for this action.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            HotkeyAction::Digit0 => "0",
            HotkeyAction::Digit1 => "1",
            HotkeyAction::Digit2 => "2",
            HotkeyAction::Digit3 => "3",
            HotkeyAction::Digit4 => "4",
            HotkeyAction::Digit5 => "5",
            HotkeyAction::Digit6 => "6",
            HotkeyAction::Digit7 => "7",
            HotkeyAction::Digit8 => "8",
            HotkeyAction::Digit9 => "9",
            HotkeyAction::Decimal => ".",
            HotkeyAction::Add => "+",
            HotkeyAction::Subtract => "-",
            HotkeyAction::Multiply => "*",
            HotkeyAction::Divide => "/",
            HotkeyAction::Power => "^",
            HotkeyAction::Equals => "=",
            HotkeyAction::Clear => "CL",
            HotkeyAction::Backspace => "<<",
            HotkeyAction::SignToggle => "+/-",
            HotkeyAction::Percent => "%",
            HotkeyAction::Reciprocal => "1/x",
            HotkeyAction::SquareRoot => "√",
            HotkeyAction::CopyResult => "copy",
            HotkeyAction::ToggleLog => "log",
            HotkeyAction::CycleTheme => "theme",
            HotkeyAction::Quit => "quit",
        }
    }
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Return an unmodified character key.
    ///
    pub fn char(c: char) -> Self {
        Hotkey {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::empty(),
        }
    }

    /// Return an unmodified non-character key.
    ///
    pub fn key(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let field_count = if matches!(self.code, KeyCode::Char(_)) { 3 } else { 2 };
        let mut state = serializer.serialize_struct("Hotkey", field_count)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => {
                if let Some(c) = helper.char {
                    KeyCode::Char(c)
                } else {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ));
                }
            }
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Backspace => KeyCode::Backspace,
            KeyCodeSerde::Delete => KeyCode::Delete,
            KeyCodeSerde::Tab => KeyCode::Tab,
            KeyCodeSerde::Up => KeyCode::Up,
            KeyCodeSerde::Down => KeyCode::Down,
            KeyCodeSerde::Left => KeyCode::Left,
            KeyCodeSerde::Right => KeyCode::Right,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Char(_) => KeyCodeSerde::Char,
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Backspace => KeyCodeSerde::Backspace,
            KeyCode::Delete => KeyCodeSerde::Delete,
            KeyCode::Tab => KeyCodeSerde::Tab,
            KeyCode::Up => KeyCodeSerde::Up,
            KeyCode::Down => KeyCodeSerde::Down,
            KeyCode::Left => KeyCodeSerde::Left,
            KeyCode::Right => KeyCodeSerde::Right,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings. An action may have several
/// bindings; the first one is shown in hints.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculatorHotkeys {
    bindings: HashMap<HotkeyAction, Vec<Hotkey>>,
}

impl Default for CalculatorHotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl CalculatorHotkeys {
    /// Return the bindings for `action`.
    ///
    pub fn get(&self, action: HotkeyAction) -> &[Hotkey] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Return the first binding for `action`, if any.
    ///
    pub fn primary(&self, action: HotkeyAction) -> Option<&Hotkey> {
        self.get(action).first()
    }

    /// Replace the bindings of every action present in `overrides`, keeping
    /// the current bindings for the rest. A key taken by an override is
    /// removed from whichever other action held it, so every key maps to one
    /// action.
    ///
    pub fn merge(mut self, overrides: HashMap<HotkeyAction, Vec<Hotkey>>) -> Self {
        for (action, keys) in self.bindings.iter_mut() {
            if overrides.contains_key(action) {
                continue;
            }
            keys.retain(|key| {
                !overrides
                    .values()
                    .flatten()
                    .any(|taken| same_key(key, taken))
            });
        }
        self.bindings.extend(overrides);
        self
    }

    /// Return the bindings that differ from the defaults.
    ///
    pub fn overrides(&self) -> HashMap<HotkeyAction, Vec<Hotkey>> {
        let defaults = default_hotkeys();
        self.bindings
            .iter()
            .filter(|(action, keys)| defaults.bindings.get(*action) != Some(*keys))
            .map(|(action, keys)| (*action, keys.clone()))
            .collect()
    }
}

/// Returns the default hotkey mappings.
///
pub fn default_hotkeys() -> CalculatorHotkeys {
    let mut bindings = HashMap::new();
    for (digit, action) in DIGITS.iter().enumerate() {
        let c = char::from(b'0' + digit as u8);
        bindings.insert(*action, vec![Hotkey::char(c)]);
    }
    bindings.insert(
        HotkeyAction::Decimal,
        vec![Hotkey::char('.'), Hotkey::char(',')],
    );
    bindings.insert(HotkeyAction::Add, vec![Hotkey::char('+')]);
    bindings.insert(HotkeyAction::Subtract, vec![Hotkey::char('-')]);
    bindings.insert(HotkeyAction::Multiply, vec![Hotkey::char('*')]);
    bindings.insert(HotkeyAction::Divide, vec![Hotkey::char('/')]);
    bindings.insert(HotkeyAction::Power, vec![Hotkey::char('^')]);
    bindings.insert(
        HotkeyAction::Equals,
        vec![Hotkey::key(KeyCode::Enter), Hotkey::char('=')],
    );
    bindings.insert(
        HotkeyAction::Clear,
        vec![Hotkey::key(KeyCode::Esc), Hotkey::char('c')],
    );
    bindings.insert(
        HotkeyAction::Backspace,
        vec![Hotkey::key(KeyCode::Backspace)],
    );
    bindings.insert(HotkeyAction::SignToggle, vec![Hotkey::char('n')]);
    bindings.insert(HotkeyAction::Percent, vec![Hotkey::char('%')]);
    bindings.insert(HotkeyAction::Reciprocal, vec![Hotkey::char('r')]);
    bindings.insert(HotkeyAction::SquareRoot, vec![Hotkey::char('s')]);
    bindings.insert(HotkeyAction::CopyResult, vec![Hotkey::char('y')]);
    bindings.insert(HotkeyAction::ToggleLog, vec![Hotkey::char('L')]);
    bindings.insert(HotkeyAction::CycleTheme, vec![Hotkey::char('t')]);
    bindings.insert(HotkeyAction::Quit, vec![Hotkey::char('q')]);

    CalculatorHotkeys { bindings }
}

/// Checks if a KeyEvent matches a Hotkey. Character keys ignore Shift, since
/// terminals report shifted symbols such as `+` or `%` inconsistently.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    if event.code != hotkey.code {
        return false;
    }
    match event.code {
        KeyCode::Char(_) => {
            event.modifiers.difference(KeyModifiers::SHIFT)
                == hotkey.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => event.modifiers == hotkey.modifiers,
    }
}

/// Checks if two hotkeys are triggered by the same key press.
///
fn same_key(a: &Hotkey, b: &Hotkey) -> bool {
    if a.code != b.code {
        return false;
    }
    match a.code {
        KeyCode::Char(_) => {
            a.modifiers.difference(KeyModifiers::SHIFT) == b.modifiers.difference(KeyModifiers::SHIFT)
        }
        _ => a.modifiers == b.modifiers,
    }
}

/// Finds a key bound to more than one action in `overrides`, returning both
/// actions and the key.
///
pub fn find_conflict(
    overrides: &HashMap<HotkeyAction, Vec<Hotkey>>,
) -> Option<(HotkeyAction, HotkeyAction, Hotkey)> {
    let entries: Vec<_> = overrides.iter().collect();
    for (index, (action, keys)) in entries.iter().enumerate() {
        for (other, other_keys) in entries.iter().skip(index + 1) {
            for key in keys.iter() {
                if other_keys.iter().any(|taken| same_key(key, taken)) {
                    return Some((**action, **other, key.clone()));
                }
            }
        }
    }
    None
}

/// Gets the action bound to a KeyEvent.
///
pub fn get_action_for_event(event: &KeyEvent, hotkeys: &CalculatorHotkeys) -> Option<HotkeyAction> {
    hotkeys
        .bindings
        .iter()
        .find(|(_, keys)| keys.iter().any(|hotkey| matches_hotkey(event, hotkey)))
        .map(|(action, _)| *action)
}

/// Builds a footer text string from hotkey configurations.
///
pub fn build_footer_text(hotkeys: &CalculatorHotkeys, actions: &[(HotkeyAction, &str)]) -> String {
    actions
        .iter()
        .filter_map(|(action, description)| {
            hotkeys
                .primary(*action)
                .map(|hotkey| format!(" {}: {}", format_hotkey_display(hotkey), description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer and on the keypad.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(c) => {
            if *c == ' ' {
                "Space".to_string()
            } else {
                c.to_string()
            }
        }
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Bksp".to_string(),
        KeyCode::Delete => "Del".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}
