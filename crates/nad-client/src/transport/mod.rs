//! Blocking transports that carry framed commands to a receiver.
//!
//! A transport owns one link to one device and performs a single
//! request/response exchange per call. All implementations take `&self` and
//! serialize concurrent callers internally, so a transport can be shared.

mod serial;
mod tcp;
mod telnet;

pub use serial::{SerialTransport, BAUD_RATE};
pub use tcp::{TcpTransport, TCP_PORT};
pub use telnet::{TelnetTransport, TELNET_PORT};

use crate::error::TransportError;
use nad_protocol::LineCodec;
use std::io::{self, Read};
use std::time::Duration;

/// How long to wait for the reply to a single command.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Chunk size for transport reads. Replies are short command echoes.
const READ_CHUNK: usize = 64;

/// A blocking link to a NAD receiver.
pub trait NadTransport {
    /// Send one command and wait for the receiver's reply.
    ///
    /// Returns the unframed, whitespace-stripped reply text. An empty string
    /// means the receiver sent nothing before the read timeout; the caller
    /// decides whether silence is an error.
    fn communicate(&self, command: &str) -> Result<String, TransportError>;
}

impl<T: NadTransport + ?Sized> NadTransport for Box<T> {
    fn communicate(&self, command: &str) -> Result<String, TransportError> {
        (**self).communicate(command)
    }
}

/// Drive `reader` until one complete message arrives or the read times out.
///
/// The reader must already carry a read timeout. A timed-out read surfaces
/// as `TimedOut` or `WouldBlock` depending on the platform; both mean
/// "nothing more is coming" and resolve the exchange to an empty reply, as
/// does a link closed mid-message.
pub(crate) fn read_reply<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut codec = LineCodec::new();
    let mut chunk = [0u8; READ_CHUNK];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(String::new()),
            Ok(n) => {
                codec.push(&chunk[..n]);
                if let Some(line) = codec.take_line() {
                    return Ok(line);
                }
            }
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock) => {
                return Ok(String::new());
            }
            Err(e) => return Err(e),
        }
    }
}
