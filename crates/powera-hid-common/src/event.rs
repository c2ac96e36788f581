//! Input events pushed to the host input subsystem.

use serde::{Deserialize, Serialize};

use crate::codes::{EV_ABS, EV_KEY, EV_SYN, SYN_REPORT};

/// One state-change event, or the sync marker that closes a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Button state for a key code
    Key { code: u16, pressed: bool },
    /// Absolute axis value for an axis code
    Abs { code: u16, value: i32 },
    /// Marks the preceding events as one consistent snapshot
    Sync,
}

impl InputEvent {
    pub fn key(code: u16, pressed: bool) -> Self {
        InputEvent::Key { code, pressed }
    }

    pub fn abs(code: u16, value: i32) -> Self {
        InputEvent::Abs { code, value }
    }

    /// Linux event type (`EV_KEY`, `EV_ABS`, `EV_SYN`).
    pub fn event_type(&self) -> u16 {
        match self {
            InputEvent::Key { .. } => EV_KEY,
            InputEvent::Abs { .. } => EV_ABS,
            InputEvent::Sync => EV_SYN,
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            InputEvent::Key { code, .. } | InputEvent::Abs { code, .. } => *code,
            InputEvent::Sync => SYN_REPORT,
        }
    }

    /// Value as it would appear in a `struct input_event`.
    pub fn value(&self) -> i32 {
        match self {
            InputEvent::Key { pressed, .. } => i32::from(*pressed),
            InputEvent::Abs { value, .. } => *value,
            InputEvent::Sync => 0,
        }
    }

    pub fn is_sync(&self) -> bool {
        matches!(self, InputEvent::Sync)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{ABS_HAT0X, BTN_SOUTH};

    #[test]
    fn test_event_triplets() {
        let key = InputEvent::key(BTN_SOUTH, true);
        assert_eq!(
            (key.event_type(), key.code(), key.value()),
            (EV_KEY, BTN_SOUTH, 1)
        );

        let abs = InputEvent::abs(ABS_HAT0X, -1);
        assert_eq!(
            (abs.event_type(), abs.code(), abs.value()),
            (EV_ABS, ABS_HAT0X, -1)
        );

        let sync = InputEvent::Sync;
        assert_eq!((sync.event_type(), sync.code(), sync.value()), (EV_SYN, 0, 0));
        assert!(sync.is_sync());
        assert!(!key.is_sync());
    }

    #[test]
    fn test_released_key_value_is_zero() {
        assert_eq!(InputEvent::key(BTN_SOUTH, false).value(), 0);
    }
}
