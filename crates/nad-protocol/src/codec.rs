//! Carriage-return framing for the NAD control connection.
//!
//! Both directions of the link carry `\r`-bounded text. The host frames a
//! command as `\r<command>\r`; the receiver answers with a `\r`-terminated
//! message of its own. [`LineCodec`] accumulates raw bytes from the transport
//! and yields complete messages, treating delimiter-only segments (such as
//! the opening `\r` of a framed reply) as padding rather than messages.

use bytes::BytesMut;

/// Framing delimiter used in both directions.
pub const DELIMITER: u8 = b'\r';

/// Capacity hint for the receive buffer. Replies are short command echoes.
const INITIAL_CAPACITY: usize = 64;

/// Accumulates transport bytes and yields `\r`-delimited messages.
#[derive(Debug)]
pub struct LineCodec {
    /// Buffer for accumulating incoming data.
    buffer: BytesMut,
}

impl LineCodec {
    /// Create a new codec with an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Append raw bytes from the transport.
    pub fn push(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Take the next complete message out of the buffer.
    ///
    /// Returns `None` when no full `\r`-terminated message is buffered yet.
    /// Segments that are empty after whitespace is stripped are consumed
    /// silently, so a framed reply `\rMain.Power=On\r` yields exactly one
    /// message. Bytes that are not valid UTF-8 are replaced rather than
    /// rejected.
    pub fn take_line(&mut self) -> Option<String> {
        loop {
            let end = self.buffer.iter().position(|&b| b == DELIMITER)?;
            let segment = self.buffer.split_to(end + 1);
            let text = String::from_utf8_lossy(&segment[..end]);
            let text = text.trim();
            if !text.is_empty() {
                return Some(text.to_string());
            }
        }
    }

    /// Number of bytes waiting in the buffer.
    pub fn buffered_len(&self) -> usize {
        self.buffer.len()
    }

    /// Discard everything in the buffer.
    ///
    /// Used when a fresh exchange must not see stale bytes from an earlier
    /// command.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame a command for transmission.
///
/// The receiver expects `\r<command>\r`: the leading delimiter flushes any
/// partial line on the device side, the trailing one ends the command.
pub fn encode_command(command: &str) -> Vec<u8> {
    let mut framed = Vec::with_capacity(command.len() + 2);
    framed.push(DELIMITER);
    framed.extend_from_slice(command.as_bytes());
    framed.push(DELIMITER);
    framed
}
