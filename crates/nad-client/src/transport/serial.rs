//! Serial transport for receivers wired to a local RS-232 port.

use crate::error::TransportError;
use crate::transport::{read_reply, NadTransport, DEFAULT_TIMEOUT};
use log::debug;
use nad_protocol::encode_command;
use parking_lot::Mutex;
use serialport::{ClearBuffer, SerialPort};
use std::io::Write;

/// Baud rate of the NAD service port.
pub const BAUD_RATE: u32 = 115_200;

/// Transport for the receiver's RS-232 service port.
///
/// The port opens lazily on the first exchange and stays open for the
/// lifetime of the transport. A mutex holds the whole open+write+read cycle,
/// so concurrent callers cannot interleave commands on the wire.
pub struct SerialTransport {
    path: String,
    port: Mutex<Option<Box<dyn SerialPort>>>,
}

impl SerialTransport {
    /// Create a transport for a port path (`/dev/ttyUSB0`, `COM3`).
    ///
    /// Does not touch the port; opening happens on the first
    /// [`communicate`](NadTransport::communicate), and open failures surface
    /// from there.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            port: Mutex::new(None),
        }
    }

    /// The configured port path.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn open(&self) -> Result<Box<dyn SerialPort>, TransportError> {
        let port = serialport::new(self.path.as_str(), BAUD_RATE)
            .timeout(DEFAULT_TIMEOUT)
            .open()?;
        debug!("opened serial port {} at {} baud", self.path, BAUD_RATE);
        Ok(port)
    }
}

impl NadTransport for SerialTransport {
    fn communicate(&self, command: &str) -> Result<String, TransportError> {
        let mut guard = self.port.lock();
        let port = match guard.as_mut() {
            Some(port) => port,
            None => guard.insert(self.open()?),
        };
        // Stale bytes from an earlier exchange must not masquerade as the
        // reply to this one.
        port.clear(ClearBuffer::Input)?;
        port.write_all(&encode_command(command))?;
        Ok(read_reply(port)?)
    }
}
