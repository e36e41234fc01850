use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Network I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Connection refused by {0}")]
    Refused(String),

    #[error("Socket error: {0}")]
    Socket(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

/// Whether an I/O error is the read-timeout expiring.
///
/// Unix reports an expired `SO_RCVTIMEO` as `WouldBlock`, Windows as
/// `TimedOut`.
pub fn is_timeout(err: &std::io::Error) -> bool {
    matches!(
        err.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_timeout_kinds_classified() {
        assert!(is_timeout(&std::io::Error::from(ErrorKind::WouldBlock)));
        assert!(is_timeout(&std::io::Error::from(ErrorKind::TimedOut)));
        assert!(!is_timeout(&std::io::Error::from(
            ErrorKind::ConnectionRefused
        )));
    }
}
