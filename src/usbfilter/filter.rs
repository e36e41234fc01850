use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use tracing::debug;

/// Bus/device topology address of one attached dongle instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsbAddress {
    pub bus: u32,
    pub device: u32,
}

impl fmt::Display for UsbAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bus {} Device {}", self.bus, self.device)
    }
}

fn bus_device_regex() -> &'static Regex {
    static BUS_DEVICE: OnceLock<Regex> = OnceLock::new();
    BUS_DEVICE.get_or_init(|| {
        // Infallible: the pattern is a compile-time constant
        Regex::new(r"Bus\s+(\d+)\s+Device\s+(\d+)").expect("hardcoded pattern compiles")
    })
}

/// Extract the bus/device address of every listing line naming the device.
///
/// Numeric parsing strips the zero padding lsusb prints ("003" reads as 3).
pub fn extract_addresses(listing: &str, name: &str) -> Vec<UsbAddress> {
    let re = bus_device_regex();

    let addresses: Vec<UsbAddress> = listing
        .lines()
        .filter(|line| line.contains(name))
        .filter_map(|line| {
            let caps = re.captures(line)?;
            let bus = caps[1].parse().ok()?;
            let device = caps[2].parse().ok()?;
            Some(UsbAddress { bus, device })
        })
        .collect();

    debug!(matches = addresses.len(), device = name, "Listing scanned");
    addresses
}

/// Render the Wireshark usbmon display filter for one device address.
///
/// Matches traffic where either endpoint address starts with
/// `<bus>.<device>.` followed by an endpoint digit.
pub fn capture_filter(addr: &UsbAddress) -> String {
    format!(
        "usb.src matches \"({bus}.{dev}.[0-9])\" || usb.dst matches \"({bus}.{dev}.[0-9])\"",
        bus = addr.bus,
        dev = addr.device,
    )
}
