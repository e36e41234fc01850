//! USB capture-filter generator for the attached dongle

pub mod error;
pub mod filter;
pub mod scan;

pub use error::{FilterError, Result};
pub use filter::{capture_filter, extract_addresses, UsbAddress};
pub use scan::list_usb_devices;

/// Product string the dongle enumerates with
pub const DEVICE_NAME: &str = "ioig Multi Protocol Dongle";
