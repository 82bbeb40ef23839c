use raylib::consts::KeyboardKey;
use raylib::prelude::*;

/// Navigation requests understood by the album.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NextPage,
    PreviousPage,
    ToggleAutoAdvance,
    FirstPage,
    LastPage,
}

pub const BOUND_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_N,
    KeyboardKey::KEY_RIGHT,
    KeyboardKey::KEY_PAGE_DOWN,
    KeyboardKey::KEY_P,
    KeyboardKey::KEY_LEFT,
    KeyboardKey::KEY_PAGE_UP,
    KeyboardKey::KEY_A,
    KeyboardKey::KEY_HOME,
    KeyboardKey::KEY_END,
];

impl Command {
    pub fn from_key(key: KeyboardKey) -> Option<Command> {
        match key {
            KeyboardKey::KEY_N | KeyboardKey::KEY_RIGHT | KeyboardKey::KEY_PAGE_DOWN => Some(Command::NextPage),
            KeyboardKey::KEY_P | KeyboardKey::KEY_LEFT | KeyboardKey::KEY_PAGE_UP => Some(Command::PreviousPage),
            KeyboardKey::KEY_A => Some(Command::ToggleAutoAdvance),
            KeyboardKey::KEY_HOME => Some(Command::FirstPage),
            KeyboardKey::KEY_END => Some(Command::LastPage),
            _ => None,
        }
    }
}

/// Commands for every bound key pressed since the previous frame.
pub fn poll_commands(rl: &RaylibHandle) -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|key| rl.is_key_pressed(**key))
        .filter_map(|key| Command::from_key(*key))
        .collect()
}

pub fn usage() -> &'static str {
    "n / Right / PageDown  next page\n\
     p / Left / PageUp     previous page\n\
     a                     toggle automatic advance\n\
     Home / End            first / last page\n\
     Esc                   quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bound_key_maps_to_a_command() {
        for key in BOUND_KEYS {
            assert!(Command::from_key(key).is_some(), "{:?} is unbound", key);
        }
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(Command::from_key(KeyboardKey::KEY_N), Some(Command::NextPage));
        assert_eq!(Command::from_key(KeyboardKey::KEY_P), Some(Command::PreviousPage));
        assert_eq!(Command::from_key(KeyboardKey::KEY_A), Some(Command::ToggleAutoAdvance));
        assert_eq!(Command::from_key(KeyboardKey::KEY_END), Some(Command::LastPage));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(Command::from_key(KeyboardKey::KEY_SPACE), None);
        assert_eq!(Command::from_key(KeyboardKey::KEY_Q), None);
    }
}
