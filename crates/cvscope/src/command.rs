//! Keyboard commands and the key map translating raw key codes into them.

use std::collections::HashMap;

/// Key code of the escape key.
pub const KEY_ESC: i32 = 27;

/// Key code of the space bar.
pub const KEY_SPACE: i32 = 32;

/// An operator command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Select the previous discrete option.
    CyclePrev,
    /// Select the next discrete option.
    CycleNext,
    /// Print the current call in the primary language.
    EmitPrimaryCode,
    /// Print the current call in the secondary language.
    EmitSecondaryCode,
    /// Freeze or unfreeze the filtered view.
    TogglePause,
    /// End the session.
    Terminate,
}

impl Command {
    /// Returns a short help text for the command.
    pub fn description(self) -> &'static str {
        match self {
            Command::CyclePrev => "previous option",
            Command::CycleNext => "next option",
            Command::EmitPrimaryCode => "print code for the current filter",
            Command::EmitSecondaryCode => "print code in the secondary language",
            Command::TogglePause => "pause/resume filtering",
            Command::Terminate => "exit",
        }
    }
}

/// Maps key codes to commands.
///
/// Codes are compared on their low byte, which strips the modifier bits some
/// window backends report.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: HashMap<i32, Command>,
}

impl KeyMap {
    /// Creates a key map without bindings.
    pub fn empty() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Binds `key` to `command`, replacing any previous binding of `key`.
    pub fn bind(mut self, key: i32, command: Command) -> Self {
        self.bindings.insert(key & 0xff, command);
        self
    }

    /// Binds an ASCII character to `command`.
    pub fn bind_char(self, key: char, command: Command) -> Self {
        self.bind(key as i32, command)
    }

    /// Returns the command bound to `key`, if any.
    pub fn translate(&self, key: i32) -> Option<Command> {
        self.bindings.get(&(key & 0xff)).copied()
    }

    /// Returns a sorted `key: description` line per binding.
    pub fn describe(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.bindings.iter().collect();
        keys.sort_by_key(|(key, _)| **key);
        keys.into_iter()
            .map(|(key, command)| format!("{}: {}", key_name(*key), command.description()))
            .collect()
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        KeyMap::empty()
            .bind_char('z', Command::CyclePrev)
            .bind_char('x', Command::CycleNext)
            .bind_char('g', Command::EmitPrimaryCode)
            .bind_char('p', Command::EmitSecondaryCode)
            .bind(KEY_SPACE, Command::TogglePause)
            .bind(KEY_ESC, Command::Terminate)
    }
}

fn key_name(key: i32) -> String {
    match key {
        KEY_ESC => "esc".to_string(),
        KEY_SPACE => "space".to_string(),
        k => match u8::try_from(k) {
            Ok(b) if b.is_ascii_graphic() => (b as char).to_string(),
            _ => format!("0x{k:02x}"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.translate('z' as i32), Some(Command::CyclePrev));
        assert_eq!(keymap.translate('x' as i32), Some(Command::CycleNext));
        assert_eq!(keymap.translate('g' as i32), Some(Command::EmitPrimaryCode));
        assert_eq!(keymap.translate('p' as i32), Some(Command::EmitSecondaryCode));
        assert_eq!(keymap.translate(KEY_SPACE), Some(Command::TogglePause));
        assert_eq!(keymap.translate(KEY_ESC), Some(Command::Terminate));
        assert_eq!(keymap.translate('q' as i32), None);
    }

    #[test]
    fn test_modifier_bits_are_ignored() {
        let keymap = KeyMap::default();
        assert_eq!(keymap.translate(0x10_0000 | KEY_ESC), Some(Command::Terminate));
    }

    #[test]
    fn test_rebind() {
        let keymap = KeyMap::default().bind_char('q', Command::Terminate);
        assert_eq!(keymap.translate('q' as i32), Some(Command::Terminate));
        assert_eq!(keymap.translate(KEY_ESC), Some(Command::Terminate));

        let keymap = keymap.bind_char('q', Command::TogglePause);
        assert_eq!(keymap.translate('q' as i32), Some(Command::TogglePause));
    }

    #[test]
    fn test_describe() {
        let lines = KeyMap::default().describe();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "esc: exit");
        assert_eq!(lines[1], "space: pause/resume filtering");
        assert!(lines.contains(&"z: previous option".to_string()));
    }
}
