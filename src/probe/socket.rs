use crate::probe::constants::RECV_BUFFER_SIZE;
use crate::probe::error::{ProbeError, Result};
use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs, UdpSocket};
use std::time::Duration;
use tracing::{debug, warn};

/// Trait for the one socket a probe run owns.
///
/// Both implementations release the underlying socket on drop, so every exit
/// path of a probe (reply, timeout, error) closes it.
pub trait ProbeSocket: Send + Sync {
    /// Send the probe payload
    fn send_payload(&mut self, payload: &[u8]) -> Result<usize>;

    /// Receive one reply of up to [`RECV_BUFFER_SIZE`] bytes
    fn recv_reply(&mut self) -> Result<Vec<u8>>;

    /// Set the receive timeout for the socket
    fn set_timeout(&self, timeout: Duration) -> Result<()>;
}

/// UDP datagram implementation of ProbeSocket
#[derive(Debug)]
pub struct UdpProbeSocket {
    socket: UdpSocket,
}

impl UdpProbeSocket {
    /// Bind to a local address
    pub fn bind(addr: &str) -> Result<Self> {
        debug!(addr = addr, "Binding UDP socket");
        let socket = UdpSocket::bind(addr).map_err(|e| {
            warn!(error = %e, "Failed to bind socket");
            ProbeError::Socket(format!("Failed to bind to {}: {}", addr, e))
        })?;
        Ok(Self { socket })
    }

    /// Connect to the probe target
    pub fn connect(&self, addr: &str) -> Result<()> {
        debug!(addr = addr, "Connecting UDP socket");
        self.socket.connect(addr).map_err(|e| {
            warn!(error = %e, "Failed to connect socket");
            ProbeError::Socket(format!("Failed to connect to {}: {}", addr, e))
        })?;
        Ok(())
    }
}

impl ProbeSocket for UdpProbeSocket {
    fn send_payload(&mut self, payload: &[u8]) -> Result<usize> {
        let bytes_sent = self.socket.send(payload).map_err(|e| {
            warn!(error = %e, "Failed to send payload");
            ProbeError::Io(e)
        })?;
        debug!(bytes_sent = bytes_sent, "Payload sent");
        Ok(bytes_sent)
    }

    fn recv_reply(&mut self) -> Result<Vec<u8>> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let len = self.socket.recv(&mut buf).map_err(|e| {
            debug!(error = %e, "Failed to receive reply");
            ProbeError::Io(e)
        })?;
        debug!(bytes_received = len, "Reply received");
        Ok(buf[..len].to_vec())
    }

    fn set_timeout(&self, timeout: Duration) -> Result<()> {
        debug!(timeout_ms = timeout.as_millis(), "Setting socket timeout");
        self.socket.set_read_timeout(Some(timeout)).map_err(|e| {
            warn!(error = %e, "Failed to set timeout");
            ProbeError::Socket(format!("Failed to set timeout: {}", e))
        })
    }
}

/// TCP stream implementation of ProbeSocket
#[derive(Debug)]
pub struct TcpProbeSocket {
    stream: TcpStream,
}

impl TcpProbeSocket {
    /// Connect to the probe target within `timeout`.
    ///
    /// A refused connection maps to [`ProbeError::Refused`] so callers can
    /// report it as an expected condition rather than a fault.
    pub fn connect(addr: &str, timeout: Duration) -> Result<Self> {
        debug!(addr = addr, timeout_ms = timeout.as_millis(), "Connecting TCP socket");
        let target = addr
            .to_socket_addrs()
            .map_err(|e| ProbeError::Socket(format!("Failed to resolve {}: {}", addr, e)))?
            .next()
            .ok_or_else(|| ProbeError::Socket(format!("No address for {}", addr)))?;

        let stream = TcpStream::connect_timeout(&target, timeout).map_err(|e| {
            if e.kind() == std::io::ErrorKind::ConnectionRefused {
                debug!(addr = addr, "Connection refused");
                ProbeError::Refused(addr.to_string())
            } else {
                warn!(error = %e, "Failed to connect");
                ProbeError::Io(e)
            }
        })?;
        debug!("TCP connection established");
        Ok(Self { stream })
    }
}

impl ProbeSocket for TcpProbeSocket {
    fn send_payload(&mut self, payload: &[u8]) -> Result<usize> {
        self.stream.write_all(payload).map_err(|e| {
            warn!(error = %e, "Failed to send payload");
            ProbeError::Io(e)
        })?;
        debug!(bytes_sent = payload.len(), "Payload sent");
        Ok(payload.len())
    }

    fn recv_reply(&mut self) -> Result<Vec<u8>> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let len = self.stream.read(&mut buf).map_err(|e| {
            debug!(error = %e, "Failed to receive reply");
            ProbeError::Io(e)
        })?;
        debug!(bytes_received = len, "Reply received");
        Ok(buf[..len].to_vec())
    }

    fn set_timeout(&self, timeout: Duration) -> Result<()> {
        debug!(timeout_ms = timeout.as_millis(), "Setting socket timeout");
        self.stream.set_read_timeout(Some(timeout)).map_err(|e| {
            warn!(error = %e, "Failed to set timeout");
            ProbeError::Socket(format!("Failed to set timeout: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub ProbeSocket {}

        impl ProbeSocket for ProbeSocket {
            fn send_payload(&mut self, payload: &[u8]) -> Result<usize>;
            fn recv_reply(&mut self) -> Result<Vec<u8>>;
            fn set_timeout(&self, timeout: Duration) -> Result<()>;
        }
    }

    #[test]
    fn test_udp_socket_bind() {
        let socket = UdpProbeSocket::bind("127.0.0.1:0");
        assert!(socket.is_ok());
    }

    #[test]
    fn test_tcp_connect_refused_maps_to_refused() {
        // Bind then drop a listener to get a port with nothing on it
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let result = TcpProbeSocket::connect(
            &format!("127.0.0.1:{}", port),
            Duration::from_millis(1000),
        );
        assert!(matches!(result, Err(ProbeError::Refused(_))));
    }
}

#[cfg(test)]
pub use tests::MockProbeSocket;
