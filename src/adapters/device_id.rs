//! Device identity derived from the ESP32 factory MAC address.
//!
//! Produces the advertised BLE name `SocialSeat-XXYYZZ` (last 3 bytes of
//! the 6-byte MAC in uppercase hex).  The name is deterministic across
//! reboots and starts with the prefix other seats filter on, so every
//! seat sees every other seat as a peer.

use core::fmt::Write;

/// Advertised name: prefix + `-` + 6 hex digits.
pub type AdvertisedName = heapless::String<32>;

/// Full 6-byte MAC address.
pub type MacAddress = [u8; 6];

/// Read the factory MAC address from eFuse.
#[cfg(target_os = "espidf")]
pub fn read_mac() -> MacAddress {
    let mut mac: MacAddress = [0u8; 6];
    unsafe {
        esp_idf_svc::sys::esp_efuse_mac_get_default(mac.as_mut_ptr());
    }
    mac
}

/// Simulation: returns a deterministic fake MAC.
#[cfg(not(target_os = "espidf"))]
pub fn read_mac() -> MacAddress {
    [0xDE, 0xAD, 0xBE, 0xEF, 0xCA, 0xFE]
}

/// Advertised name for `mac` under `prefix`.
/// Format: `<prefix>-XXYYZZ` (e.g., `SocialSeat-EFCAFE`).
pub fn advertised_name(prefix: &str, mac: &MacAddress) -> AdvertisedName {
    let mut name = AdvertisedName::new();
    // Only overflows for prefixes longer than the filter's own capacity.
    let _ = write!(name, "{}-{:02X}{:02X}{:02X}", prefix, mac[3], mac[4], mac[5]);
    name
}
