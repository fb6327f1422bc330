//! Telnet transport for network-capable receivers.

use crate::error::TransportError;
use crate::transport::{read_reply, NadTransport, DEFAULT_TIMEOUT};
use log::debug;
use nad_protocol::encode_command;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Default port of the telnet control interface.
pub const TELNET_PORT: u16 = 23;

/// Timeout for establishing the TCP session.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Transport for the telnet control interface of network-capable models.
///
/// The session opens lazily on the first exchange and stays up for the
/// lifetime of the transport, with the whole exchange held under one mutex
/// like the serial transport. Opening discards the greeting line some
/// firmware prints when a session starts.
#[derive(Debug)]
pub struct TelnetTransport {
    host: String,
    port: u16,
    stream: Mutex<Option<TcpStream>>,
}

impl TelnetTransport {
    /// Create a transport for `host` on the default telnet port.
    pub fn new(host: impl Into<String>) -> Self {
        Self::with_port(host, TELNET_PORT)
    }

    /// Create a transport for `host` on an explicit port.
    pub fn with_port(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            stream: Mutex::new(None),
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

    fn open(&self) -> Result<TcpStream, TransportError> {
        let addr = (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::AddrNotAvailable,
                    format!("no address found for {}:{}", self.host, self.port),
                )
            })?;
        let mut stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)?;
        stream.set_read_timeout(Some(DEFAULT_TIMEOUT))?;
        stream.set_write_timeout(Some(DEFAULT_TIMEOUT))?;
        debug!("connected to {}:{}", self.host, self.port);
        // Some firmware announces itself when a session opens. Drop that
        // line if it shows up; a silent or garbled start is fine too.
        match read_reply(&mut stream) {
            Ok(greeting) if !greeting.is_empty() => debug!("discarded greeting: {greeting}"),
            _ => {}
        }
        Ok(stream)
    }
}

impl NadTransport for TelnetTransport {
    fn communicate(&self, command: &str) -> Result<String, TransportError> {
        let mut guard = self.stream.lock();
        let stream = match guard.as_mut() {
            Some(stream) => stream,
            None => guard.insert(self.open()?),
        };
        stream.write_all(&encode_command(command))?;
        Ok(read_reply(stream)?)
    }
}
