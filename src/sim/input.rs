//! Engine control lines
//!
//! The only state shared between the input source and the tick: three
//! independent on/off flags. A tick reads whatever is current at its start.

use serde::{Deserialize, Serialize};

/// One of the ship's thrusters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineLine {
    /// Downward-facing engine, pushes the ship up
    Main,
    /// Engine on the left flank, pushes the ship right
    Left,
    /// Engine on the right flank, pushes the ship left
    Right,
}

impl EngineLine {
    pub const ALL: [EngineLine; 3] = [EngineLine::Main, EngineLine::Left, EngineLine::Right];

    /// Map a DOM keyCode to an engine (arrow keys), None for anything else
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(EngineLine::Left),  // ArrowLeft
            39 => Some(EngineLine::Right), // ArrowRight
            40 => Some(EngineLine::Main),  // ArrowDown
            _ => None,
        }
    }
}

/// A discrete control event from the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    EngineDown(EngineLine),
    EngineUp(EngineLine),
}

impl InputEvent {
    /// Translate a key press/release; unrecognized keys yield None
    pub fn from_key(code: u32, pressed: bool) -> Option<Self> {
        let line = EngineLine::from_key_code(code)?;
        Some(if pressed {
            InputEvent::EngineDown(line)
        } else {
            InputEvent::EngineUp(line)
        })
    }
}

/// Current commanded state of every engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineFlags {
    pub main: bool,
    pub left: bool,
    pub right: bool,
}

impl EngineFlags {
    pub fn set_engine(&mut self, line: EngineLine, on: bool) {
        match line {
            EngineLine::Main => self.main = on,
            EngineLine::Left => self.left = on,
            EngineLine::Right => self.right = on,
        }
    }

    pub fn is_on(&self, line: EngineLine) -> bool {
        match line {
            EngineLine::Main => self.main,
            EngineLine::Left => self.left,
            EngineLine::Right => self.right,
        }
    }

    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::EngineDown(line) => self.set_engine(line, true),
            InputEvent::EngineUp(line) => self.set_engine(line, false),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.main || self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(EngineLine::from_key_code(37), Some(EngineLine::Left));
        assert_eq!(EngineLine::from_key_code(39), Some(EngineLine::Right));
        assert_eq!(EngineLine::from_key_code(40), Some(EngineLine::Main));
        // ArrowUp and letters are not bound
        assert_eq!(EngineLine::from_key_code(38), None);
        assert_eq!(EngineLine::from_key_code(65), None);
    }

    #[test]
    fn test_input_event_from_key() {
        assert_eq!(
            InputEvent::from_key(40, true),
            Some(InputEvent::EngineDown(EngineLine::Main))
        );
        assert_eq!(
            InputEvent::from_key(37, false),
            Some(InputEvent::EngineUp(EngineLine::Left))
        );
        assert_eq!(InputEvent::from_key(13, true), None);
    }

    #[test]
    fn test_lines_are_independent() {
        let mut flags = EngineFlags::default();
        for line in EngineLine::ALL {
            flags.set_engine(line, true);
        }
        assert!(flags.main && flags.left && flags.right);

        flags.apply(InputEvent::EngineUp(EngineLine::Left));
        assert!(flags.is_on(EngineLine::Main));
        assert!(!flags.is_on(EngineLine::Left));
        assert!(flags.is_on(EngineLine::Right));
    }

    #[test]
    fn test_repeat_events_are_idempotent() {
        let mut flags = EngineFlags::default();
        flags.apply(InputEvent::EngineDown(EngineLine::Main));
        flags.apply(InputEvent::EngineDown(EngineLine::Main));
        assert!(flags.main);
        flags.apply(InputEvent::EngineUp(EngineLine::Main));
        assert!(!flags.main);
        assert!(!flags.any());
    }

    #[test]
    fn test_clear() {
        let mut flags = EngineFlags {
            main: true,
            left: true,
            right: false,
        };
        flags.clear();
        assert_eq!(flags, EngineFlags::default());
    }
}
