//! Capability declarations made once, at attach, to the host input subsystem.

use serde::{Deserialize, Serialize};

use crate::device_info::{BusType, HidDeviceInfo};

/// Range and tolerance of one absolute axis (`input_set_abs_params`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisSpec {
    pub code: u16,
    pub min: i32,
    pub max: i32,
    /// Noise filter: changes smaller than this are dropped by the host.
    pub fuzz: i32,
    /// Dead zone around the center reported to consumers.
    pub flat: i32,
}

impl AxisSpec {
    pub const fn new(code: u16, min: i32, max: i32) -> Self {
        Self {
            code,
            min,
            max,
            fuzz: 0,
            flat: 0,
        }
    }

    pub const fn with_tolerance(mut self, fuzz: i32, flat: i32) -> Self {
        self.fuzz = fuzz;
        self.flat = flat;
        self
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Full set of keys and axes an output device will ever emit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub keys: Vec<u16>,
    pub axes: Vec<AxisSpec>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, code: u16) -> Self {
        if !self.keys.contains(&code) {
            self.keys.push(code);
        }
        self
    }

    pub fn with_axis(mut self, axis: AxisSpec) -> Self {
        self.axes.retain(|a| a.code != axis.code);
        self.axes.push(axis);
        self
    }

    pub fn has_key(&self, code: u16) -> bool {
        self.keys.contains(&code)
    }

    pub fn axis(&self, code: u16) -> Option<&AxisSpec> {
        self.axes.iter().find(|a| a.code == code)
    }
}

/// Identity of the output device to allocate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDeviceSpec {
    pub name: String,
    pub phys: String,
    pub bus: BusType,
    pub vendor_id: u16,
    pub product_id: u16,
    pub version: u16,
}

impl InputDeviceSpec {
    /// Output device named `name` that inherits identity from the HID parent.
    pub fn from_parent(name: impl Into<String>, parent: &HidDeviceInfo) -> Self {
        Self {
            name: name.into(),
            phys: parent.phys.clone(),
            bus: parent.bus,
            vendor_id: parent.vendor_id,
            product_id: parent.product_id,
            version: parent.version,
        }
    }
}
