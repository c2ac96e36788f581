//! Capability declaration for the PowerA output device.

use powera_hid_common::{AxisSpec, CapabilitySet, HidDeviceInfo, InputDeviceSpec};

use crate::ids::OUTPUT_DEVICE_NAME;
use crate::input::{Axis, Button};

/// Stick noise filter, in output units.
pub const STICK_FUZZ: i32 = 2;

/// Stick center dead zone, in output units.
pub const STICK_FLAT: i32 = 4;

/// Declared range of `axis`.
pub const fn axis_spec(axis: Axis) -> AxisSpec {
    if axis.is_hat() {
        AxisSpec::new(axis.code(), -1, 1)
    } else {
        AxisSpec::new(axis.code(), 0, u8::MAX as i32).with_tolerance(STICK_FUZZ, STICK_FLAT)
    }
}

/// Everything the output device can emit: 14 keys, 2 hat axes, 4 stick axes.
pub fn capabilities() -> CapabilitySet {
    let caps = Button::ALL
        .iter()
        .fold(CapabilitySet::new(), |caps, b| caps.with_key(b.code()));
    Axis::ALL
        .iter()
        .fold(caps, |caps, a| caps.with_axis(axis_spec(*a)))
}

/// Output device identity, inheriting bus and ids from the HID parent.
pub fn output_device_spec(parent: &HidDeviceInfo) -> InputDeviceSpec {
    InputDeviceSpec::from_parent(OUTPUT_DEVICE_NAME, parent)
}
