use crate::probe::constants::{MESSAGE_SIZE, RESPONSE_TIMEOUT_MS};
use crate::probe::message::default_payload;
use clap::Parser;
use std::time::Duration;
use tracing::debug;

/// Transport selected for the probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Udp,
    Tcp,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "rtt-probe")]
#[command(about = "Measure round-trip time to the ioig dongle over UDP or TCP")]
pub struct Config {
    /// Probe over UDP
    #[arg(short = 'u', long = "udp")]
    pub udp: bool,

    /// Probe over TCP
    #[arg(short = 't', long = "tcp", conflicts_with = "udp")]
    pub tcp: bool,

    /// Payload to send instead of the built-in 64-byte filler
    #[arg(short = 'm', long = "message")]
    pub message: Option<String>,
}

impl Config {
    /// Returns the selected transport, or `None` when neither flag was given
    pub fn transport(&self) -> Option<Transport> {
        match (self.udp, self.tcp) {
            (true, _) => Some(Transport::Udp),
            (_, true) => Some(Transport::Tcp),
            _ => None,
        }
    }

    /// Returns the payload bytes to send
    pub fn payload(&self) -> Vec<u8> {
        debug!(
            override_present = self.message.is_some(),
            default_size = MESSAGE_SIZE,
            "Building probe payload"
        );
        match &self.message {
            Some(text) => text.as_bytes().to_vec(),
            None => default_payload(),
        }
    }

    /// Returns the connect/receive bound as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(RESPONSE_TIMEOUT_MS)
    }
}
