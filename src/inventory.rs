//! Device inventory: the read-only record of the switch fleet.
//!
//! The inventory is built once at startup by an external loader (typically
//! from a JSON document keyed by device name) and consumed read-only by the
//! orchestration core. Credentials are never part of the inventory; they are
//! supplied per run via [`Credentials`](crate::task::Credentials).

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{InventoryError, Result};

/// Vendor/OS classification of a device, derived from its platform tag.
///
/// The command dialects this crate generates only branch in one place (the
/// voice/data access-port workflow), so two families suffice: the Cisco IOS
/// family and everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    /// Cisco IOS / IOS-XE dialect.
    Ios,
    /// Any other vendor family (Arista EOS and friends).
    Other,
}

impl PlatformFamily {
    /// Classify a platform tag string.
    pub fn of(platform: &str) -> Self {
        match platform {
            "cisco_ios" | "cisco_iosxe" => Self::Ios,
            _ => Self::Other,
        }
    }
}

/// A single switch record. Immutable once loaded.
///
/// The external inventory format uses netmiko-style field names
/// (`device_type`, `ip`); both those and the native names are accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct Device {
    /// Platform tag (e.g. "cisco_ios", "arista_eos").
    #[serde(alias = "device_type")]
    pub platform: String,

    /// Network location (hostname or IP address).
    #[serde(alias = "ip")]
    pub address: String,

    /// Site label.
    pub site: String,

    /// Geographic/administrative region label.
    pub state: String,
}

impl Device {
    /// The platform family this device's command dialect belongs to.
    pub fn family(&self) -> PlatformFamily {
        PlatformFamily::of(&self.platform)
    }
}

/// Ordered, read-only mapping of device name to device record.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    devices: IndexMap<String, Device>,
}

impl Inventory {
    /// Build an inventory from an already-loaded device map, validating
    /// the per-device invariants (non-empty platform, address, site, state).
    pub fn new(devices: IndexMap<String, Device>) -> Result<Self> {
        for (name, device) in &devices {
            for (field, value) in [
                ("platform", &device.platform),
                ("address", &device.address),
                ("site", &device.site),
                ("state", &device.state),
            ] {
                if value.is_empty() {
                    return Err(InventoryError::InvalidDevice {
                        name: name.clone(),
                        message: format!("empty {field}"),
                    }
                    .into());
                }
            }
        }
        Ok(Self { devices })
    }

    /// Parse an inventory from its JSON document form: an object keyed by
    /// device name. Name uniqueness is inherent to the object form.
    pub fn from_json(json: &str) -> Result<Self> {
        let devices: IndexMap<String, Device> =
            serde_json::from_str(json).map_err(InventoryError::Parse)?;
        Self::new(devices)
    }

    /// Look up a device by name.
    pub fn get(&self, name: &str) -> Option<&Device> {
        self.devices.get(name)
    }

    /// Check whether a device name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.devices.contains_key(name)
    }

    /// Device names in stored order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.devices.keys().map(String::as_str)
    }

    /// Iterate over (name, device) pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Device)> {
        self.devices.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Number of devices.
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Check if the inventory is empty.
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Distinct `state` values, lexicographically sorted. Used to populate
    /// selection choices in the presentation layer.
    pub fn states(&self) -> Vec<String> {
        self.distinct(|d| &d.state)
    }

    /// Distinct `site` values, lexicographically sorted.
    pub fn sites(&self) -> Vec<String> {
        self.distinct(|d| &d.site)
    }

    fn distinct<'a>(&'a self, field: impl Fn(&'a Device) -> &'a String) -> Vec<String> {
        self.devices
            .values()
            .map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "sw1": {"device_type": "cisco_ios", "ip": "10.0.0.1", "site": "hq", "state": "TX"},
        "sw2": {"device_type": "arista_eos", "ip": "10.0.0.2", "site": "branch", "state": "OK"},
        "sw3": {"platform": "cisco_iosxe", "address": "10.0.0.3", "site": "hq", "state": "TX"}
    }"#;

    #[test]
    fn test_parse_netmiko_field_names() {
        let inv = Inventory::from_json(SAMPLE).unwrap();
        assert_eq!(inv.len(), 3);

        let sw1 = inv.get("sw1").unwrap();
        assert_eq!(sw1.platform, "cisco_ios");
        assert_eq!(sw1.address, "10.0.0.1");

        // Native field names are accepted too
        let sw3 = inv.get("sw3").unwrap();
        assert_eq!(sw3.platform, "cisco_iosxe");
        assert_eq!(sw3.address, "10.0.0.3");
    }

    #[test]
    fn test_order_preserved() {
        let inv = Inventory::from_json(SAMPLE).unwrap();
        let names: Vec<_> = inv.names().collect();
        assert_eq!(names, vec!["sw1", "sw2", "sw3"]);
    }

    #[test]
    fn test_empty_field_rejected() {
        let json = r#"{"bad": {"device_type": "cisco_ios", "ip": "", "site": "hq", "state": "TX"}}"#;
        let err = Inventory::from_json(json).unwrap_err();
        assert!(err.to_string().contains("bad"));
        assert!(err.to_string().contains("address"));
    }

    #[test]
    fn test_derived_views_sorted_distinct() {
        let inv = Inventory::from_json(SAMPLE).unwrap();
        assert_eq!(inv.states(), vec!["OK", "TX"]);
        assert_eq!(inv.sites(), vec!["branch", "hq"]);
    }

    #[test]
    fn test_platform_family() {
        assert_eq!(PlatformFamily::of("cisco_ios"), PlatformFamily::Ios);
        assert_eq!(PlatformFamily::of("cisco_iosxe"), PlatformFamily::Ios);
        assert_eq!(PlatformFamily::of("arista_eos"), PlatformFamily::Other);
        assert_eq!(PlatformFamily::of("juniper_junos"), PlatformFamily::Other);
    }
}
