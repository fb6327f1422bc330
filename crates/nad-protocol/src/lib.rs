//! Text control protocol for NAD receivers
//!
//! This crate implements the command vocabulary and wire framing that NAD
//! amplifiers and receivers expose on their RS-232 service port (and, on
//! newer models, over the network). It is transport-agnostic: it builds and
//! classifies messages, while the `nad-client` crate moves them over serial
//! or telnet links.
//!
//! # Protocol Overview
//!
//! A command is `Domain.Command` followed by an operator and, for
//! assignments, a value:
//!
//! ```text
//! Main.Power?        query the current value
//! Main.Power=On      assign a value
//! Main.Volume+       step upward
//! Main.Volume-       step downward
//! ```
//!
//! Commands travel framed as `\r<command>\r`. The receiver answers with a
//! `\r`-terminated message: `Domain.Command=value` when it can report state,
//! a bare echo of the command when it can only acknowledge, or nothing at
//! all when it is not listening.
//!
//! # Example
//!
//! ```rust,ignore
//! use nad_protocol::{lookup, Operator, Reply};
//!
//! let power = lookup("main", "power")?;
//! let command = power.build(Operator::Set, Some("On"))?;
//! assert_eq!(command, "Main.Power=On");
//!
//! // ... write encode_command(&command) to the device, read the reply ...
//!
//! match Reply::parse(&command, "Main.Power=On")? {
//!     Reply::Value(state) => println!("power is {state}"),
//!     Reply::Accepted => println!("accepted"),
//! }
//! ```

mod codec;
mod commands;
mod error;
mod reply;

pub use codec::*;
pub use commands::*;
pub use error::*;
pub use reply::*;
