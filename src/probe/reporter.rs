use crate::probe::constants::{ACCEPTABLE_RTT_US, EXCELLENT_RTT_US, SPINNER_TICK_INTERVAL_MS};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

/// Renders probe results for the terminal
pub struct Reporter;

impl Reporter {
    /// Print the echoed response and the color-coded round-trip time
    pub fn report_reply(bytes: &[u8], elapsed: Duration) {
        let text = String::from_utf8_lossy(bytes);
        let rtt_us = elapsed.as_nanos() as f64 / 1000.0;

        info!(rtt_us = rtt_us, bytes = bytes.len(), "Probe reply");

        let rtt_str = format!("{:.2}", rtt_us);
        let rtt_colored = if rtt_us < EXCELLENT_RTT_US {
            rtt_str.green()
        } else if rtt_us < ACCEPTABLE_RTT_US {
            rtt_str.yellow()
        } else {
            rtt_str.red()
        };

        println!("Response: {}", text);
        println!("Round Trip Time: {} µs", rtt_colored);
    }

    /// Print the timeout notice
    pub fn report_timeout() {
        info!("Probe timed out");
        println!("{}", "No response received (timeout)".yellow());
    }

    /// Print the connection-refused notice
    pub fn report_refused(addr: &str) {
        info!(addr = addr, "Connection refused");
        println!(
            "{}",
            format!("Connection refused by {}. Ensure the device is reachable.", addr).red()
        );
    }

    /// Spinner shown while blocked on the receive.
    ///
    /// Steady tick keeps it animating through the (up to 1 s) blocking wait;
    /// callers clear it before printing results.
    pub fn wait_spinner(message: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_INTERVAL_MS));
        pb.set_message(message.to_string());
        pb
    }
}
