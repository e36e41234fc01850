use anyhow::Result;
use clap::{CommandFactory, Parser};
use ioig_diag::probe::{
    init_logging, probe_once, Config, ProbeError, ProbeOutcome, ProbeSocket, Reporter,
    TcpProbeSocket, Transport, UdpProbeSocket, DEVICE_IP, TCP_PROBE_PORT, UDP_PROBE_PORT,
};
use tracing::{error, info};

fn main() {
    // Parse CLI arguments (clap rejects -u together with -t)
    let config = Config::parse();

    // Initialize structured logging
    init_logging();

    // Exactly one transport must be selected; with neither, print guidance
    // and exit without touching the network
    let Some(transport) = config.transport() else {
        eprintln!("Please specify either -u (UDP) or -t (TCP).");
        eprintln!();
        let _ = Config::command().print_help();
        return;
    };

    if let Err(e) = run(&config, transport) {
        error!(error = %e, "Probe failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: &Config, transport: Transport) -> Result<()> {
    let payload = config.payload();

    match transport {
        Transport::Udp => {
            let target = format!("{}:{}", DEVICE_IP, UDP_PROBE_PORT);
            info!(target = %target, "Measuring RTT using UDP");
            println!("Measuring RTT using UDP...");

            let mut socket = UdpProbeSocket::bind("0.0.0.0:0")?;
            socket.connect(&target)?;
            socket.set_timeout(config.timeout())?;
            probe_and_report(&mut socket, &payload)?;
        }
        Transport::Tcp => {
            let target = format!("{}:{}", DEVICE_IP, TCP_PROBE_PORT);
            info!(target = %target, "Measuring RTT using TCP");
            println!("Measuring RTT using TCP...");

            // Refusal is an expected outcome, not a failure exit
            let mut socket = match TcpProbeSocket::connect(&target, config.timeout()) {
                Ok(socket) => socket,
                Err(ProbeError::Refused(addr)) => {
                    Reporter::report_refused(&addr);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };
            socket.set_timeout(config.timeout())?;
            probe_and_report(&mut socket, &payload)?;
        }
    }

    Ok(())
}

/// Run the single probe cycle with a spinner over the blocking wait
fn probe_and_report<S: ProbeSocket>(socket: &mut S, payload: &[u8]) -> Result<()> {
    let spinner = Reporter::wait_spinner("Waiting for reply...");
    let outcome = probe_once(socket, payload);
    spinner.finish_and_clear();

    match outcome? {
        ProbeOutcome::Reply { bytes, elapsed } => Reporter::report_reply(&bytes, elapsed),
        ProbeOutcome::Timeout => Reporter::report_timeout(),
    }
    Ok(())
}
