//! PowerA USB identifiers and device matching.
//!
//! USB-attached units are identified by VID/PID. Bluetooth units may report
//! generic identifiers, so the device name is checked first.

use powera_hid_common::BusType;

/// PowerA (ACCO Brands) USB Vendor ID.
pub const VENDOR_ID: u16 = 0x20D6;

/// PowerA Switch controller product ID.
pub const PRODUCT_ID: u16 = 0xC006;

/// Name substrings that identify a PowerA controller regardless of ids.
pub const NAME_FRAGMENTS: [&str; 2] = ["Lic3 Pro Controller", "PowerA"];

/// Name given to the output input device.
pub const OUTPUT_DEVICE_NAME: &str = "PowerA Advantage Wireless Controller";

/// Wildcard for [`DeviceIdEntry`] vendor/product fields.
pub const ANY_ID: Option<u16> = None;

/// One entry of the id table advertised to host enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceIdEntry {
    pub bus: BusType,
    /// `None` matches any vendor.
    pub vendor_id: Option<u16>,
    /// `None` matches any product.
    pub product_id: Option<u16>,
}

impl DeviceIdEntry {
    pub fn matches(&self, bus: BusType, vendor_id: u16, product_id: u16) -> bool {
        self.bus == bus
            && self.vendor_id.is_none_or(|v| v == vendor_id)
            && self.product_id.is_none_or(|p| p == product_id)
    }
}

/// Ids this driver binds to. The Bluetooth wildcard entry lets misreporting
/// units reach [`is_powera_controller`], which makes the final decision.
pub const DEVICE_TABLE: [DeviceIdEntry; 3] = [
    DeviceIdEntry {
        bus: BusType::Usb,
        vendor_id: Some(VENDOR_ID),
        product_id: Some(PRODUCT_ID),
    },
    DeviceIdEntry {
        bus: BusType::Bluetooth,
        vendor_id: Some(VENDOR_ID),
        product_id: Some(PRODUCT_ID),
    },
    DeviceIdEntry {
        bus: BusType::Bluetooth,
        vendor_id: ANY_ID,
        product_id: ANY_ID,
    },
];

/// Returns `true` if the device is a PowerA controller.
///
/// Matches when `name` contains any of [`NAME_FRAGMENTS`], or when the id
/// pair is exactly ([`VENDOR_ID`], [`PRODUCT_ID`]).
pub fn is_powera_controller(name: &str, vendor_id: u16, product_id: u16) -> bool {
    NAME_FRAGMENTS.iter().any(|fragment| name.contains(fragment))
        || (vendor_id == VENDOR_ID && product_id == PRODUCT_ID)
}

/// Returns `true` if any [`DEVICE_TABLE`] entry covers the device.
pub fn in_device_table(bus: BusType, vendor_id: u16, product_id: u16) -> bool {
    DEVICE_TABLE
        .iter()
        .any(|entry| entry.matches(bus, vendor_id, product_id))
}
