//! Client for controlling NAD receivers
//!
//! Drives NAD amplifiers and receivers over the textual control protocol
//! they expose on the RS-232 service port and, on network-capable models,
//! over telnet. Command resolution, wire framing, and reply classification
//! live in the `nad-protocol` crate; this crate adds the blocking transports
//! and the typed dispatch surface on top.
//!
//! # Example
//!
//! ```rust,ignore
//! use nad_client::{NadReceiver, SerialTransport};
//!
//! let receiver = NadReceiver::new(SerialTransport::new("/dev/ttyUSB0"));
//! receiver.main().command("power")?.set("On")?;
//! if let Some(model) = receiver.main().command("model")?.get()? {
//!     println!("connected to a {model}");
//! }
//! ```
//!
//! Diagnostics go through the `log` facade: install a logger in the
//! application to see each command/reply exchange at debug level.

mod error;
mod receiver;
mod transport;

pub use error::{NadError, NadResult, TransportError};
pub use receiver::{CommandRef, DomainRef, Invocation, NadReceiver};
pub use transport::{
    NadTransport, SerialTransport, TcpTransport, TelnetTransport, BAUD_RATE, DEFAULT_TIMEOUT,
    TCP_PORT, TELNET_PORT,
};

pub use nad_protocol::{CommandEntry, Domain, Operator, ProtocolError};
