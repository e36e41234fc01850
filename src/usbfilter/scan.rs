use crate::usbfilter::error::{FilterError, Result};
use std::process::Command;
use tracing::debug;

/// The device-enumeration command invoked on the host
const LIST_COMMAND: &str = "lsusb";

/// Run the host's device-enumeration command and return its text output.
///
/// A non-zero exit is fatal; there is no useful degraded mode without the
/// device listing.
pub fn list_usb_devices() -> Result<String> {
    debug!(command = LIST_COMMAND, "Enumerating USB devices");

    let output = Command::new(LIST_COMMAND)
        .output()
        .map_err(|e| FilterError::Spawn {
            command: LIST_COMMAND.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(FilterError::CommandFailed {
            command: LIST_COMMAND.to_string(),
            status: output.status,
        });
    }

    let listing = String::from_utf8_lossy(&output.stdout).into_owned();
    debug!(lines = listing.lines().count(), "Device listing captured");
    Ok(listing)
}
