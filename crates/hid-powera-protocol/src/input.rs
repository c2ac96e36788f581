//! PowerA input report decoding.
//!
//! All functions are pure and allocation-free. Decoding the same buffer
//! twice yields the same [`ControllerState`].

use powera_hid_common::{ReportReader, codes};
use serde::{Deserialize, Serialize};

use crate::{REPORT_LEN, REPORT_TAG, ReportError};

/// Bit `pos` of `byte` is set.
const fn bit(byte: u8, pos: u8) -> bool {
    byte & (1 << pos) != 0
}

/// Face buttons, byte 1 bits 0–3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceButtons {
    /// B, bottom (south).
    pub b: bool,
    /// A, right (east).
    pub a: bool,
    /// Y, left (west).
    pub y: bool,
    /// X, top (north).
    pub x: bool,
}

impl FaceButtons {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            b: bit(byte, 0),
            a: bit(byte, 1),
            y: bit(byte, 2),
            x: bit(byte, 3),
        }
    }
}

/// Shoulder buttons and triggers, byte 1 bits 4–7.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShoulderButtons {
    pub l: bool,
    pub r: bool,
    pub zl: bool,
    pub zr: bool,
}

impl ShoulderButtons {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            l: bit(byte, 4),
            r: bit(byte, 5),
            zl: bit(byte, 6),
            zr: bit(byte, 7),
        }
    }
}

/// System buttons and stick clicks, byte 2 bits 0–5. Bits 6–7 are unused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SystemButtons {
    pub minus: bool,
    pub plus: bool,
    pub left_stick: bool,
    pub right_stick: bool,
    pub home: bool,
    pub capture: bool,
}

impl SystemButtons {
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            minus: bit(byte, 0),
            plus: bit(byte, 1),
            left_stick: bit(byte, 2),
            right_stick: bit(byte, 3),
            home: bit(byte, 4),
            capture: bit(byte, 5),
        }
    }
}

/// Directional pad position, byte 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub enum DpadPosition {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
    #[default]
    Neutral,
}

impl DpadPosition {
    /// Values outside 0–7 (including the documented neutral value 8) are neutral.
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => DpadPosition::Up,
            1 => DpadPosition::UpRight,
            2 => DpadPosition::Right,
            3 => DpadPosition::DownRight,
            4 => DpadPosition::Down,
            5 => DpadPosition::DownLeft,
            6 => DpadPosition::Left,
            7 => DpadPosition::UpLeft,
            _ => DpadPosition::Neutral,
        }
    }

    /// Horizontal component: −1 left, +1 right.
    pub const fn x(self) -> i8 {
        match self {
            DpadPosition::Left | DpadPosition::UpLeft | DpadPosition::DownLeft => -1,
            DpadPosition::Right | DpadPosition::UpRight | DpadPosition::DownRight => 1,
            _ => 0,
        }
    }

    /// Vertical component: −1 up, +1 down.
    pub const fn y(self) -> i8 {
        match self {
            DpadPosition::Up | DpadPosition::UpLeft | DpadPosition::UpRight => -1,
            DpadPosition::Down | DpadPosition::DownLeft | DpadPosition::DownRight => 1,
            _ => 0,
        }
    }

    pub const fn to_hat(self) -> Hat {
        Hat {
            x: self.x(),
            y: self.y(),
        }
    }
}

/// D-pad as two tri-state axes, each in {−1, 0, +1}.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hat {
    pub x: i8,
    pub y: i8,
}

/// One of the 14 buttons, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    B,
    A,
    Y,
    X,
    L,
    R,
    Zl,
    Zr,
    Minus,
    Plus,
    LeftStick,
    RightStick,
    Home,
    Capture,
}

impl Button {
    pub const ALL: [Button; 14] = [
        Button::B,
        Button::A,
        Button::Y,
        Button::X,
        Button::L,
        Button::R,
        Button::Zl,
        Button::Zr,
        Button::Minus,
        Button::Plus,
        Button::LeftStick,
        Button::RightStick,
        Button::Home,
        Button::Capture,
    ];

    /// Linux key code the button is reported as.
    pub const fn code(self) -> u16 {
        match self {
            Button::B => codes::BTN_SOUTH,
            Button::A => codes::BTN_EAST,
            Button::Y => codes::BTN_WEST,
            Button::X => codes::BTN_NORTH,
            Button::L => codes::BTN_TL,
            Button::R => codes::BTN_TR,
            Button::Zl => codes::BTN_TL2,
            Button::Zr => codes::BTN_TR2,
            Button::Minus => codes::BTN_SELECT,
            Button::Plus => codes::BTN_START,
            Button::LeftStick => codes::BTN_THUMBL,
            Button::RightStick => codes::BTN_THUMBR,
            Button::Home => codes::BTN_MODE,
            Button::Capture => codes::BTN_Z,
        }
    }
}

/// One of the six absolute axes, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    HatX,
    HatY,
    LeftX,
    LeftY,
    RightX,
    RightY,
}

impl Axis {
    pub const ALL: [Axis; 6] = [
        Axis::HatX,
        Axis::HatY,
        Axis::LeftX,
        Axis::LeftY,
        Axis::RightX,
        Axis::RightY,
    ];

    pub const fn code(self) -> u16 {
        match self {
            Axis::HatX => codes::ABS_HAT0X,
            Axis::HatY => codes::ABS_HAT0Y,
            Axis::LeftX => codes::ABS_X,
            Axis::LeftY => codes::ABS_Y,
            Axis::RightX => codes::ABS_RX,
            Axis::RightY => codes::ABS_RY,
        }
    }

    pub const fn is_hat(self) -> bool {
        matches!(self, Axis::HatX | Axis::HatY)
    }
}

/// One decoded report.
///
/// Stick values are already scaled to 0–255 with the Y axes inverted so that
/// up is 0, matching Linux joystick conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControllerState {
    pub face: FaceButtons,
    pub shoulder: ShoulderButtons,
    pub system: SystemButtons,
    pub hat: Hat,
    pub left_x: u8,
    pub left_y: u8,
    pub right_x: u8,
    pub right_y: u8,
}

impl ControllerState {
    pub const fn pressed(&self, button: Button) -> bool {
        match button {
            Button::B => self.face.b,
            Button::A => self.face.a,
            Button::Y => self.face.y,
            Button::X => self.face.x,
            Button::L => self.shoulder.l,
            Button::R => self.shoulder.r,
            Button::Zl => self.shoulder.zl,
            Button::Zr => self.shoulder.zr,
            Button::Minus => self.system.minus,
            Button::Plus => self.system.plus,
            Button::LeftStick => self.system.left_stick,
            Button::RightStick => self.system.right_stick,
            Button::Home => self.system.home,
            Button::Capture => self.system.capture,
        }
    }

    pub fn axis(&self, axis: Axis) -> i32 {
        match axis {
            Axis::HatX => i32::from(self.hat.x),
            Axis::HatY => i32::from(self.hat.y),
            Axis::LeftX => i32::from(self.left_x),
            Axis::LeftY => i32::from(self.left_y),
            Axis::RightX => i32::from(self.right_x),
            Axis::RightY => i32::from(self.right_y),
        }
    }

    pub fn pressed_count(&self) -> usize {
        Button::ALL.iter().filter(|b| self.pressed(**b)).count()
    }
}

/// Keep the high byte of a 16-bit stick sample.
///
/// This drops the low 8 bits of device resolution; the output axes are
/// declared as 0–255.
pub const fn truncate_sample(raw: u16) -> u8 {
    let [_, hi] = raw.to_le_bytes();
    hi
}

/// Vertical sticks report up as high values; flip them so up is 0.
pub const fn invert_axis(value: u8) -> u8 {
    u8::MAX - value
}

/// Check framing only: exact length, then the leading tag byte.
///
/// Cheap enough to run before taking any lock.
///
/// # Errors
///
/// [`ReportError::InvalidLength`] unless `data` is exactly [`REPORT_LEN`]
/// bytes, then [`ReportError::InvalidTag`] unless it starts with [`REPORT_TAG`].
pub fn validate_report(data: &[u8]) -> Result<(), ReportError> {
    if data.len() != REPORT_LEN {
        return Err(ReportError::InvalidLength(data.len()));
    }
    match data.first() {
        Some(&REPORT_TAG) => Ok(()),
        Some(&tag) => Err(ReportError::InvalidTag(tag)),
        None => Err(ReportError::InvalidLength(0)),
    }
}

/// Parse a PowerA input report.
///
/// The length is checked before any byte is read; only then is the tag
/// compared. Either mismatch returns a [`ReportError`] and the caller should
/// drop the report.
///
/// # Errors
///
/// The framing errors of [`validate_report`].
pub fn parse_input_report(data: &[u8]) -> Result<ControllerState, ReportError> {
    validate_report(data)?;

    let mut reader = ReportReader::new(data);
    let [_tag, buttons1, buttons2, dpad] = reader.read_array::<4>()?;

    let left_x = truncate_sample(reader.read_u16_le()?);
    let left_y = truncate_sample(reader.read_u16_le()?);
    let right_x = truncate_sample(reader.read_u16_le()?);
    let right_y = truncate_sample(reader.read_u16_le()?);

    Ok(ControllerState {
        face: FaceButtons::from_byte(buttons1),
        shoulder: ShoulderButtons::from_byte(buttons1),
        system: SystemButtons::from_byte(buttons2),
        hat: DpadPosition::from_raw(dpad).to_hat(),
        left_x,
        left_y: invert_axis(left_y),
        right_x,
        right_y: invert_axis(right_y),
    })
}
