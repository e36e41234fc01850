//! Constants for the RTT prober

/// Filler text the default payload is built from
pub const DEFAULT_MESSAGE_TEXT: &str = concat!(
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. ",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. ",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. ",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum. ",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ1234567890!@#$%^&*()_+-=[]{}|;:'\",.<>?/\\",
);

/// Exact size of the default payload in bytes (device accepts at most 512)
pub const MESSAGE_SIZE: usize = 64;

/// IPv4 address of the dongle's network adapter
pub const DEVICE_IP: &str = "192.0.2.1";

/// UDP echo port on the device
pub const UDP_PROBE_PORT: u16 = 5001;

/// TCP echo port on the device
pub const TCP_PROBE_PORT: u16 = 5002;

/// Bound on connect and receive, in milliseconds
pub const RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Maximum number of response bytes read back
pub const RECV_BUFFER_SIZE: usize = 1024;

/// Spinner tick interval in milliseconds while waiting for the reply
pub const SPINNER_TICK_INTERVAL_MS: u64 = 80;

/// Round trips faster than this print green, in microseconds
pub const EXCELLENT_RTT_US: f64 = 500.0;

/// Round trips faster than this print yellow, slower print red, in microseconds
pub const ACCEPTABLE_RTT_US: f64 = 1000.0;
