//! Device information supplied by host enumeration

use serde::{Deserialize, Serialize};

/// Transport the device was enumerated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BusType {
    #[default]
    Usb,
    Bluetooth,
    Other(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub version: u16,
    pub bus: BusType,
    /// Human-readable name; Bluetooth units may report a name but generic ids.
    pub name: String,
    pub phys: String,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16, name: impl Into<String>) -> Self {
        Self {
            vendor_id,
            product_id,
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_bus(mut self, bus: BusType) -> Self {
        self.bus = bus;
        self
    }

    pub fn with_version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn with_phys(mut self, phys: impl Into<String>) -> Self {
        self.phys = phys.into();
        self
    }

    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!("{:04x}:{:04x}", self.vendor_id, self.product_id)
        } else {
            self.name.clone()
        }
    }
}
