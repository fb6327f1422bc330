//! Error types for the NAD control protocol.

use crate::commands::Operator;
use thiserror::Error;

/// Errors that can occur when resolving or exchanging NAD commands.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The domain name is not in the command table.
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    /// The command name is not in the command table for this domain.
    #[error("domain '{domain}' has no command '{command}'")]
    UnknownCommand {
        /// Domain that was searched.
        domain: String,
        /// Command name that was not found.
        command: String,
    },

    /// The command does not accept this operator.
    #[error("{command} does not support '{operator}'")]
    UnsupportedOperator {
        /// Wire command (e.g. `Main.IR`).
        command: String,
        /// The rejected operator.
        operator: Operator,
    },

    /// The receiver did not answer before the transport timeout.
    #[error("no reply from receiver for {command}")]
    NoReply {
        /// The command that was sent.
        command: String,
    },

    /// The receiver answered, but the reply has no readable shape.
    #[error("unexpected reply from receiver for {command}: {reply}")]
    UnexpectedReply {
        /// The command that was sent.
        command: String,
        /// The raw reply text.
        reply: String,
    },
}

impl ProtocolError {
    /// True for errors detected locally, before any transport I/O.
    pub fn is_resolution(&self) -> bool {
        matches!(
            self,
            ProtocolError::UnknownDomain(_)
                | ProtocolError::UnknownCommand { .. }
                | ProtocolError::UnsupportedOperator { .. }
        )
    }
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::UnknownDomain("mane".to_string());
        assert!(err.to_string().contains("mane"));

        let err = ProtocolError::UnsupportedOperator {
            command: "Main.IR".to_string(),
            operator: Operator::Query,
        };
        assert_eq!(err.to_string(), "Main.IR does not support 'get'");
    }

    #[test]
    fn test_is_resolution() {
        assert!(ProtocolError::UnknownDomain("x".to_string()).is_resolution());
        assert!(!ProtocolError::NoReply {
            command: "Main.Power?".to_string()
        }
        .is_resolution());
    }
}
