//! Error types for the NAD client.

use nad_protocol::ProtocolError;
use thiserror::Error;

/// Errors raised while moving bytes to and from a receiver.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connecting, reading, or writing failed at the socket level.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The serial port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// The transport is a reserved placeholder and cannot exchange commands.
    #[error("unsupported transport: {0}")]
    Unsupported(&'static str),
}

/// Any failure a receiver call can produce.
#[derive(Debug, Error)]
pub enum NadError {
    /// Command resolution or reply classification failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The link to the receiver failed.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Result type alias for receiver operations.
pub type NadResult<T> = Result<T, NadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: NadError = TransportError::from(io).into();
        assert!(matches!(err, NadError::Transport(TransportError::Io(_))));

        let err: NadError = ProtocolError::UnknownDomain("zone2".to_string()).into();
        assert!(matches!(err, NadError::Protocol(_)));
    }

    #[test]
    fn test_error_display() {
        let err = NadError::Protocol(ProtocolError::NoReply {
            command: "Main.Power?".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "protocol error: no reply from receiver for Main.Power?"
        );
    }
}
