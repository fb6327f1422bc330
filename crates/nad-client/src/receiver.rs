//! The receiver front end: typed command dispatch over a transport.

use crate::error::NadResult;
use crate::transport::NadTransport;
use log::debug;
use nad_protocol::{lookup_in, CommandEntry, Domain, Operator, ProtocolError, Reply};

/// A NAD receiver reached through some transport.
///
/// Commands are addressed as domain/command/operator paths resolved against
/// the command table, so a misspelled name or an operator the command does
/// not accept fails before anything touches the wire:
///
/// ```rust,ignore
/// let receiver = NadReceiver::new(SerialTransport::new("/dev/ttyUSB0"));
/// receiver.main().command("power")?.set("On")?;
/// let source = receiver.main().command("source")?.get()?;
/// ```
///
/// Each invocation is one request/response exchange; nothing is cached
/// between calls.
pub struct NadReceiver<T: NadTransport> {
    transport: T,
}

impl<T: NadTransport> NadReceiver<T> {
    /// Wrap a transport. The link itself opens lazily, on the first command.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Resolve a domain by its lookup name (`"main"`, `"tuner"`, `"video"`).
    pub fn domain(&self, name: &str) -> NadResult<DomainRef<'_, T>> {
        let domain = Domain::from_name(name)
            .ok_or_else(|| ProtocolError::UnknownDomain(name.to_string()))?;
        Ok(DomainRef {
            receiver: self,
            domain,
        })
    }

    /// The amplifier domain.
    pub fn main(&self) -> DomainRef<'_, T> {
        DomainRef {
            receiver: self,
            domain: Domain::Main,
        }
    }

    /// The tuner domain.
    pub fn tuner(&self) -> DomainRef<'_, T> {
        DomainRef {
            receiver: self,
            domain: Domain::Tuner,
        }
    }

    /// The video switching domain.
    pub fn video(&self) -> DomainRef<'_, T> {
        DomainRef {
            receiver: self,
            domain: Domain::Video,
        }
    }

    /// Consume the receiver, handing back the wrapped transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

/// A resolved domain on a receiver.
pub struct DomainRef<'a, T: NadTransport> {
    receiver: &'a NadReceiver<T>,
    domain: Domain,
}

impl<'a, T: NadTransport> DomainRef<'a, T> {
    /// The domain this reference resolved to.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Resolve a command within this domain by its lookup name.
    pub fn command(&self, name: &str) -> NadResult<CommandRef<'a, T>> {
        let entry = lookup_in(self.domain, name)?;
        Ok(CommandRef {
            receiver: self.receiver,
            entry,
        })
    }
}

/// A resolved command on a receiver.
pub struct CommandRef<'a, T: NadTransport> {
    receiver: &'a NadReceiver<T>,
    entry: &'static CommandEntry,
}

impl<'a, T: NadTransport> CommandRef<'a, T> {
    /// The command table entry this reference resolved to.
    pub fn entry(&self) -> &'static CommandEntry {
        self.entry
    }

    /// Select an operator, checking it against the table.
    pub fn operator(&self, op: Operator) -> NadResult<Invocation<'a, T>> {
        if !self.entry.supports(op) {
            return Err(ProtocolError::UnsupportedOperator {
                command: self.entry.wire.to_string(),
                operator: op,
            }
            .into());
        }
        Ok(Invocation {
            receiver: self.receiver,
            entry: self.entry,
            op,
        })
    }

    /// Query the current value.
    pub fn get(&self) -> NadResult<Option<String>> {
        self.operator(Operator::Query)?.invoke(None)
    }

    /// Assign a value.
    pub fn set(&self, value: &str) -> NadResult<Option<String>> {
        self.operator(Operator::Set)?.invoke(Some(value))
    }

    /// Step or toggle upward.
    pub fn increase(&self) -> NadResult<Option<String>> {
        self.operator(Operator::Increase)?.invoke(None)
    }

    /// Step or toggle downward.
    pub fn decrease(&self) -> NadResult<Option<String>> {
        self.operator(Operator::Decrease)?.invoke(None)
    }
}

/// A fully resolved command and operator, ready to send.
pub struct Invocation<'a, T: NadTransport> {
    receiver: &'a NadReceiver<T>,
    entry: &'static CommandEntry,
    op: Operator,
}

impl<T: NadTransport> Invocation<'_, T> {
    /// Send the command and classify the reply.
    ///
    /// Exactly one transport round trip. `Ok(Some(value))` when the receiver
    /// reported a value, `Ok(None)` when it only echoed the command back.
    /// A receiver that stays silent past the transport timeout surfaces as
    /// [`ProtocolError::NoReply`]. `value` is only meaningful with
    /// [`Operator::Set`].
    pub fn invoke(&self, value: Option<&str>) -> NadResult<Option<String>> {
        let command = self.entry.build(self.op, value)?;
        let raw = self.receiver.transport.communicate(&command)?;
        debug!("command: {command} reply: {raw}");
        let reply = Reply::parse(&command, &raw)?;
        Ok(reply.into_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NadError, TransportError};
    use nad_protocol::COMMANDS;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Hands out canned replies in order and records every sent command.
    /// An exhausted script answers with silence.
    struct ScriptedTransport {
        sent: RefCell<Vec<String>>,
        replies: RefCell<VecDeque<String>>,
    }

    impl ScriptedTransport {
        fn new(replies: &[&str]) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                replies: RefCell::new(replies.iter().map(|r| r.to_string()).collect()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }

        fn sent(&self) -> Vec<String> {
            self.sent.borrow().clone()
        }
    }

    impl NadTransport for ScriptedTransport {
        fn communicate(&self, command: &str) -> Result<String, TransportError> {
            self.sent.borrow_mut().push(command.to_string());
            Ok(self.replies.borrow_mut().pop_front().unwrap_or_default())
        }
    }

    #[test]
    fn test_set_returns_reported_value() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&["Main.Power=On"]));
        let value = receiver
            .main()
            .command("power")
            .expect("should resolve power")
            .set("On")
            .expect("should invoke");
        assert_eq!(value.as_deref(), Some("On"));
        assert_eq!(receiver.into_transport().sent(), vec!["Main.Power=On"]);
    }

    #[test]
    fn test_get_returns_reported_value() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&["Main.Source=CD"]));
        let value = receiver
            .main()
            .command("source")
            .expect("should resolve source")
            .get()
            .expect("should invoke");
        assert_eq!(value.as_deref(), Some("CD"));
        assert_eq!(receiver.into_transport().sent(), vec!["Main.Source?"]);
    }

    #[test]
    fn test_echo_only_reply_is_none() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&["Main.Volume+"]));
        let value = receiver
            .main()
            .command("volume")
            .expect("should resolve volume")
            .increase()
            .expect("should invoke");
        assert_eq!(value, None);
    }

    #[test]
    fn test_empty_reply_is_no_reply_error() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        let err = receiver
            .main()
            .command("power")
            .expect("should resolve power")
            .get()
            .expect_err("silence should be an error");
        assert!(matches!(
            err,
            NadError::Protocol(ProtocolError::NoReply { .. })
        ));
        assert_eq!(receiver.into_transport().calls(), 1);
    }

    #[test]
    fn test_unexpected_reply_is_error() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&["Garbled"]));
        let err = receiver
            .main()
            .command("power")
            .expect("should resolve power")
            .get()
            .expect_err("garbage should be an error");
        assert!(matches!(
            err,
            NadError::Protocol(ProtocolError::UnexpectedReply { .. })
        ));
    }

    #[test]
    fn test_unknown_domain_fails_without_io() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        let err = receiver.domain("zone2").err().expect("should not resolve");
        assert!(matches!(
            err,
            NadError::Protocol(ProtocolError::UnknownDomain(_))
        ));
        assert_eq!(receiver.into_transport().calls(), 0);
    }

    #[test]
    fn test_unknown_command_fails_without_io() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        let err = receiver
            .tuner()
            .command("power")
            .err()
            .expect("tuner should have no power command");
        assert!(matches!(
            err,
            NadError::Protocol(ProtocolError::UnknownCommand { .. })
        ));
        assert_eq!(receiver.into_transport().calls(), 0);
    }

    #[test]
    fn test_unsupported_operator_fails_without_io() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        let err = receiver
            .main()
            .command("ir")
            .expect("should resolve ir")
            .get()
            .expect_err("ir should be write-only");
        assert!(matches!(
            err,
            NadError::Protocol(ProtocolError::UnsupportedOperator { .. })
        ));
        assert_eq!(receiver.into_transport().calls(), 0);
    }

    #[test]
    fn test_every_unsupported_operator_fails_without_io() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        for entry in COMMANDS {
            let command = receiver
                .domain(entry.domain.name())
                .expect("domain should resolve")
                .command(entry.name)
                .expect("command should resolve");
            for op in Operator::ALL {
                if !entry.supports(op) {
                    command
                        .operator(op)
                        .err()
                        .expect("unsupported operator should not resolve");
                }
            }
        }
        assert_eq!(receiver.into_transport().calls(), 0);
    }

    #[test]
    fn test_domain_accessors() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        assert_eq!(receiver.main().domain(), Domain::Main);
        assert_eq!(receiver.tuner().domain(), Domain::Tuner);
        assert_eq!(receiver.video().domain(), Domain::Video);
        assert_eq!(
            receiver.domain("video").expect("should resolve").domain(),
            Domain::Video
        );
    }

    #[test]
    fn test_entry_accessor() {
        let receiver = NadReceiver::new(ScriptedTransport::new(&[]));
        let command = receiver
            .main()
            .command("tape_monitor")
            .expect("should resolve tape_monitor");
        assert_eq!(command.entry().wire, "Main.Tape1");
    }

    #[test]
    fn test_boxed_transport() {
        let transport: Box<dyn NadTransport> =
            Box::new(ScriptedTransport::new(&["Main.Model=C356BEE"]));
        let receiver = NadReceiver::new(transport);
        let value = receiver
            .main()
            .command("model")
            .expect("should resolve model")
            .get()
            .expect("should invoke");
        assert_eq!(value.as_deref(), Some("C356BEE"));
    }
}
