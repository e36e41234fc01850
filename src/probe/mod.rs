//! RTT prober: one send-and-wait cycle against the dongle's network adapter

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod measurement;
pub mod message;
pub mod reporter;
pub mod socket;

pub use config::{Config, Transport};
pub use constants::*;
pub use error::{ProbeError, Result};
pub use logging::init_logging;
pub use measurement::{probe_once, ProbeOutcome};
pub use message::{default_payload, fit_to_size};
pub use reporter::Reporter;
pub use socket::{ProbeSocket, TcpProbeSocket, UdpProbeSocket};
