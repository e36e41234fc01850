//! ioig-diag - Diagnostic tools for the ioig multi-protocol dongle
//!
//! This library backs two small command-line tools: a single-shot client that
//! measures round-trip time to the dongle's network adapter over UDP or TCP,
//! and a generator that turns `lsusb` output into a Wireshark usbmon capture
//! filter for the attached dongle.

pub mod probe;
pub mod usbfilter;
