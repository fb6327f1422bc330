//! Reply classification for the NAD control protocol.
//!
//! A receiver answers a command in one of three shapes:
//!
//! - `Domain.Command=value` reports a value (the answer to a query, or the
//!   state that resulted from a set or step),
//! - a bare echo of the sent command acknowledges it without reporting state
//!   (some models answer volume steps this way),
//! - nothing at all, which the transport surfaces as an empty string after
//!   its read timeout.

use crate::error::{ProtocolError, ProtocolResult};
use log::warn;

/// A classified reply to a single command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The receiver reported a value.
    Value(String),
    /// The receiver echoed the command back: accepted, no value to report.
    Accepted,
}

impl Reply {
    /// Classify the raw reply text for the command that was just sent.
    ///
    /// `raw` must already be unframed and whitespace-stripped, the way
    /// [`LineCodec`](crate::LineCodec) yields it; an empty `raw` means the
    /// transport timed out without a reply. The value is everything after
    /// the first `=`, so values containing `=` pass through intact; the
    /// command name in front of the `=` is not checked against `sent`.
    pub fn parse(sent: &str, raw: &str) -> ProtocolResult<Reply> {
        if raw.is_empty() {
            return Err(ProtocolError::NoReply {
                command: sent.to_string(),
            });
        }
        match raw.split_once('=') {
            Some((_, value)) => Ok(Reply::Value(value.to_string())),
            None if raw == sent => Ok(Reply::Accepted),
            None => {
                warn!("unreadable reply for {sent}: {raw}");
                Err(ProtocolError::UnexpectedReply {
                    command: sent.to_string(),
                    reply: raw.to_string(),
                })
            }
        }
    }

    /// The reported value, if the receiver sent one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Reply::Value(value) => Some(value),
            Reply::Accepted => None,
        }
    }

    /// Consume the reply, keeping only the reported value.
    pub fn into_value(self) -> Option<String> {
        match self {
            Reply::Value(value) => Some(value),
            Reply::Accepted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value() {
        let reply = Reply::parse("Main.Power?", "Main.Power=On").expect("should parse");
        assert_eq!(reply, Reply::Value("On".to_string()));
        assert_eq!(reply.value(), Some("On"));
    }

    #[test]
    fn test_parse_value_splits_at_first_equals() {
        let reply = Reply::parse("Main.Source?", "Main.Source=A=B").expect("should parse");
        assert_eq!(reply, Reply::Value("A=B".to_string()));
    }

    #[test]
    fn test_parse_value_ignores_echoed_name() {
        // The name in front of the `=` is taken on faith, whatever command
        // the receiver claims to be answering.
        let reply = Reply::parse("Main.Power?", "Main.Mute=On").expect("should parse");
        assert_eq!(reply, Reply::Value("On".to_string()));
    }

    #[test]
    fn test_parse_set_echo_reports_value() {
        // A set command contains `=` itself, so its echo parses as a value.
        let reply = Reply::parse("Main.Power=Off", "Main.Power=Off").expect("should parse");
        assert_eq!(reply, Reply::Value("Off".to_string()));
    }

    #[test]
    fn test_parse_bare_echo_is_accepted() {
        let reply = Reply::parse("Main.Volume+", "Main.Volume+").expect("should parse");
        assert_eq!(reply, Reply::Accepted);
        assert_eq!(reply.value(), None);
        assert_eq!(reply.into_value(), None);
    }

    #[test]
    fn test_parse_empty_is_no_reply() {
        let err = Reply::parse("Main.Power?", "").expect_err("should fail");
        assert_eq!(
            err,
            ProtocolError::NoReply {
                command: "Main.Power?".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_garbage_is_unexpected() {
        let err = Reply::parse("Main.Power?", "Main.Mute").expect_err("should fail");
        assert_eq!(
            err,
            ProtocolError::UnexpectedReply {
                command: "Main.Power?".to_string(),
                reply: "Main.Mute".to_string(),
            }
        );
    }

    #[test]
    fn test_into_value() {
        let reply = Reply::parse("Main.Model?", "Main.Model=C356BEE").expect("should parse");
        assert_eq!(reply.into_value().as_deref(), Some("C356BEE"));
    }
}
