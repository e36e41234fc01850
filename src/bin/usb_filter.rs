use anyhow::Result;
use ioig_diag::probe::init_logging;
use ioig_diag::usbfilter::{capture_filter, extract_addresses, list_usb_devices, DEVICE_NAME};
use tracing::{error, info};

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!(error = %e, "Filter generation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let listing = list_usb_devices()?;
    let addresses = extract_addresses(&listing, DEVICE_NAME);

    info!(matches = addresses.len(), "Generating capture filters");

    // Zero matches: print nothing, exit clean
    for addr in addresses {
        println!("{}", addr);
        println!("{}", capture_filter(&addr));
    }

    Ok(())
}
