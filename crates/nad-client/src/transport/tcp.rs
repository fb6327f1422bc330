//! Reserved transport slot for the raw TCP control protocol.

use crate::error::TransportError;
use crate::transport::NadTransport;

/// Port of the raw TCP control interface on the D 7050 family.
pub const TCP_PORT: u16 = 50001;

/// Placeholder transport for models that only speak the raw TCP protocol.
///
/// The D 7050 family listens on a raw TCP port and uses a binary framing
/// that shares nothing with the textual command set. Until that protocol is
/// implemented, every exchange fails with
/// [`TransportError::Unsupported`].
#[derive(Debug, Clone)]
pub struct TcpTransport {
    host: String,
    port: u16,
}

impl TcpTransport {
    /// Create a placeholder for `host` on the default raw TCP port.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_port(host, TCP_PORT)
    }

    /// Create a placeholder for `host` on an explicit port.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// The configured host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The configured port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl NadTransport for TcpTransport {
    fn communicate(&self, _command: &str) -> Result<String, TransportError> {
        Err(TransportError::Unsupported(
            "the raw TCP control protocol is not implemented",
        ))
    }
}
