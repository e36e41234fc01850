use crate::probe::error::{is_timeout, ProbeError, Result};
use crate::probe::socket::ProbeSocket;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Outcome of a single probe cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The target echoed a reply within the bound
    Reply { bytes: Vec<u8>, elapsed: Duration },
    /// No reply arrived before the receive timeout expired
    Timeout,
}

/// Perform exactly one send-and-wait-for-response cycle.
///
/// The elapsed time brackets the send and the receive only; socket setup and
/// (for TCP) the connection handshake happen before this is called. Timeout
/// is an expected outcome, any other receive error propagates.
pub fn probe_once<S: ProbeSocket>(socket: &mut S, payload: &[u8]) -> Result<ProbeOutcome> {
    let t1 = Instant::now();

    debug!(payload_len = payload.len(), "Sending probe");
    socket.send_payload(payload)?;

    match socket.recv_reply() {
        Ok(bytes) => {
            let elapsed = t1.elapsed();
            debug!(
                elapsed_us = elapsed.as_micros() as u64,
                bytes_received = bytes.len(),
                "Probe completed"
            );
            Ok(ProbeOutcome::Reply { bytes, elapsed })
        }
        Err(ProbeError::Io(e)) if is_timeout(&e) => {
            debug!("Probe receive timeout");
            Ok(ProbeOutcome::Timeout)
        }
        Err(e) => {
            warn!(error = %e, "Error receiving reply");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::socket::MockProbeSocket;
    use std::io::ErrorKind;

    #[test]
    fn test_probe_once_reply() -> Result<()> {
        let mut mock_socket = MockProbeSocket::new();

        mock_socket
            .expect_send_payload()
            .times(1)
            .returning(|p| Ok(p.len()));

        mock_socket
            .expect_recv_reply()
            .times(1)
            .returning(|| Ok(b"echo".to_vec()));

        let outcome = probe_once(&mut mock_socket, b"echo")?;
        match outcome {
            ProbeOutcome::Reply { bytes, elapsed } => {
                assert_eq!(bytes, b"echo");
                assert!(elapsed > Duration::ZERO);
            }
            ProbeOutcome::Timeout => panic!("expected a reply"),
        }
        Ok(())
    }

    #[test]
    fn test_probe_once_timeout() -> Result<()> {
        let mut mock_socket = MockProbeSocket::new();

        mock_socket
            .expect_send_payload()
            .times(1)
            .returning(|p| Ok(p.len()));

        mock_socket
            .expect_recv_reply()
            .times(1)
            .returning(|| Err(ProbeError::Io(std::io::Error::from(ErrorKind::WouldBlock))));

        let outcome = probe_once(&mut mock_socket, b"echo")?;
        assert_eq!(outcome, ProbeOutcome::Timeout);
        Ok(())
    }

    #[test]
    fn test_probe_once_send_error_propagates() {
        let mut mock_socket = MockProbeSocket::new();

        mock_socket.expect_send_payload().times(1).returning(|_| {
            Err(ProbeError::Io(std::io::Error::from(
                ErrorKind::ConnectionReset,
            )))
        });

        let result = probe_once(&mut mock_socket, b"echo");
        assert!(result.is_err());
    }

    #[test]
    fn test_probe_once_recv_error_propagates() {
        let mut mock_socket = MockProbeSocket::new();

        mock_socket
            .expect_send_payload()
            .times(1)
            .returning(|p| Ok(p.len()));

        mock_socket.expect_recv_reply().times(1).returning(|| {
            Err(ProbeError::Io(std::io::Error::from(
                ErrorKind::ConnectionReset,
            )))
        });

        let result = probe_once(&mut mock_socket, b"echo");
        assert!(result.is_err());
    }
}
