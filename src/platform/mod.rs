//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Logger setup
//! - Host key names
//! - The WebAssembly binding (`web`, wasm32 only)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::sim::DirectionInput;

/// What a host key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Turn(DirectionInput),
    Restart,
}

impl KeyCommand {
    /// Map a key name (DOM `KeyboardEvent.key` style, case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        let command = match key.to_lowercase().as_str() {
            "w" | "arrowup" | "up" => KeyCommand::Turn(DirectionInput::Up),
            "s" | "arrowdown" | "down" => KeyCommand::Turn(DirectionInput::Down),
            "a" | "arrowleft" | "left" => KeyCommand::Turn(DirectionInput::Left),
            "d" | "arrowright" | "right" => KeyCommand::Turn(DirectionInput::Right),
            "r" => KeyCommand::Restart,
            _ => return None,
        };
        Some(command)
    }
}

/// Install the platform logger (env_logger natively, console on the web)
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[cfg(target_arch = "wasm32")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(
            KeyCommand::from_key("W"),
            Some(KeyCommand::Turn(DirectionInput::Up))
        );
        assert_eq!(
            KeyCommand::from_key("ArrowLeft"),
            Some(KeyCommand::Turn(DirectionInput::Left))
        );
        assert_eq!(
            KeyCommand::from_key("d"),
            Some(KeyCommand::Turn(DirectionInput::Right))
        );
        assert_eq!(KeyCommand::from_key("r"), Some(KeyCommand::Restart));
        assert_eq!(KeyCommand::from_key("Escape"), None);
        assert_eq!(KeyCommand::from_key(""), None);
    }
}
