//! The NAD command table: domains, command names, and the operators each
//! command accepts.
//!
//! Every command the receiver understands is one row of [`COMMANDS`]. A row
//! pairs a lookup name (`"power"`) with the wire command it expands to
//! (`Main.Power`) and the set of operators the receiver accepts for it.
//! Lookups and operator checks happen against this table before anything is
//! written to the device.

use crate::error::{ProtocolError, ProtocolResult};
use std::fmt;

// ============================================================================
// Operators
// ============================================================================

/// An operator verb, paired with its single-character wire symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Query the current value (`?`).
    Query,
    /// Assign a new value (`=`).
    Set,
    /// Step or toggle upward (`+`).
    Increase,
    /// Step or toggle downward (`-`).
    Decrease,
}

impl Operator {
    /// All operators, in the order the receiver manual lists them.
    pub const ALL: [Operator; 4] = [
        Operator::Increase,
        Operator::Decrease,
        Operator::Set,
        Operator::Query,
    ];

    /// The wire symbol appended to the command.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Query => '?',
            Operator::Set => '=',
            Operator::Increase => '+',
            Operator::Decrease => '-',
        }
    }

    /// The caller-facing verb for this operator.
    pub fn verb(&self) -> &'static str {
        match self {
            Operator::Query => "get",
            Operator::Set => "set",
            Operator::Increase => "increase",
            Operator::Decrease => "decrease",
        }
    }

    /// Parse an operator from its wire symbol.
    pub fn from_symbol(c: char) -> Option<Operator> {
        match c {
            '?' => Some(Operator::Query),
            '=' => Some(Operator::Set),
            '+' => Some(Operator::Increase),
            '-' => Some(Operator::Decrease),
            _ => None,
        }
    }

    /// Parse an operator from its verb (`"get"`, `"set"`, ...).
    pub fn from_verb(s: &str) -> Option<Operator> {
        match s {
            "get" => Some(Operator::Query),
            "set" => Some(Operator::Set),
            "increase" => Some(Operator::Increase),
            "decrease" => Some(Operator::Decrease),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())
    }
}

// ============================================================================
// Domains
// ============================================================================

/// A top-level command group on the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Amplifier section (`Main.*`).
    Main,
    /// Tuner section (`Tuner.*`).
    Tuner,
    /// Video switching section (`Video.*`).
    Video,
}

impl Domain {
    /// All domains in the command table.
    pub const ALL: [Domain; 3] = [Domain::Main, Domain::Tuner, Domain::Video];

    /// The lowercase lookup name.
    pub fn name(&self) -> &'static str {
        match self {
            Domain::Main => "main",
            Domain::Tuner => "tuner",
            Domain::Video => "video",
        }
    }

    /// The prefix used on the wire.
    pub fn prefix(&self) -> &'static str {
        match self {
            Domain::Main => "Main",
            Domain::Tuner => "Tuner",
            Domain::Video => "Video",
        }
    }

    /// Parse a domain from its lookup name.
    pub fn from_name(s: &str) -> Option<Domain> {
        match s {
            "main" => Some(Domain::Main),
            "tuner" => Some(Domain::Tuner),
            "video" => Some(Domain::Video),
            _ => None,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Command table
// ============================================================================

/// One row of the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Domain the command belongs to.
    pub domain: Domain,
    /// Lookup name within the domain.
    pub name: &'static str,
    /// Full command as written on the wire.
    pub wire: &'static str,
    /// Operators the receiver accepts for this command.
    pub operators: &'static [Operator],
}

impl CommandEntry {
    /// True if the receiver accepts `op` for this command.
    pub fn supports(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    /// Build the wire string for one invocation: `<wire><symbol><value>`.
    ///
    /// Fails with [`ProtocolError::UnsupportedOperator`] before any I/O if
    /// the command does not accept `op`. `value` is appended verbatim and is
    /// only meaningful with [`Operator::Set`].
    pub fn build(&self, op: Operator, value: Option<&str>) -> ProtocolResult<String> {
        if !self.supports(op) {
            return Err(ProtocolError::UnsupportedOperator {
                command: self.wire.to_string(),
                operator: op,
            });
        }
        Ok(format!("{}{}{}", self.wire, op.symbol(), value.unwrap_or("")))
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire)
    }
}

/// Operator set for ordinary read/write commands.
const FULL: &[Operator] = &[
    Operator::Increase,
    Operator::Decrease,
    Operator::Set,
    Operator::Query,
];
/// Operator set for read-only commands.
const QUERY_ONLY: &[Operator] = &[Operator::Query];
/// Operator set for write-only commands.
const SET_ONLY: &[Operator] = &[Operator::Set];
/// Operator set for commands that only step through a fixed cycle.
const STEP_ONLY: &[Operator] = &[Operator::Increase, Operator::Decrease];

/// The complete command table.
pub const COMMANDS: &[CommandEntry] = &[
    // ========== Main ==========
    CommandEntry {
        domain: Domain::Main,
        name: "balance",
        wire: "Main.Balance",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "bass",
        wire: "Main.Bass",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "dimmer",
        wire: "Main.Dimmer",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "ir",
        wire: "Main.IR",
        operators: SET_ONLY,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "listening_mode",
        wire: "Main.ListeningMode",
        operators: STEP_ONLY,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "model",
        wire: "Main.Model",
        operators: QUERY_ONLY,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "mute",
        wire: "Main.Mute",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "power",
        wire: "Main.Power",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "sleep",
        wire: "Main.Sleep",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "source",
        wire: "Main.Source",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "speaker_a",
        wire: "Main.SpeakerA",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "speaker_b",
        wire: "Main.SpeakerB",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "tape_monitor",
        wire: "Main.Tape1",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "treble",
        wire: "Main.Treble",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "version",
        wire: "Main.Version",
        operators: QUERY_ONLY,
    },
    CommandEntry {
        domain: Domain::Main,
        name: "volume",
        wire: "Main.Volume",
        operators: FULL,
    },
    // ========== Tuner ==========
    CommandEntry {
        domain: Domain::Tuner,
        name: "am_frequency",
        wire: "Tuner.AM.Frequency",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Tuner,
        name: "am_preset",
        wire: "Tuner.AM.Preset",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Tuner,
        name: "band",
        wire: "Tuner.Band",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Tuner,
        name: "fm_frequency",
        wire: "Tuner.FM.Frequency",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Tuner,
        name: "fm_mute",
        wire: "Tuner.FM.Mute",
        operators: FULL,
    },
    CommandEntry {
        domain: Domain::Tuner,
        name: "fm_preset",
        wire: "Tuner.FM.Preset",
        operators: FULL,
    },
    // ========== Video ==========
    CommandEntry {
        domain: Domain::Video,
        name: "source",
        wire: "Video.Source",
        operators: FULL,
    },
];

/// Look up a command by domain name and command name.
pub fn lookup(domain: &str, command: &str) -> ProtocolResult<&'static CommandEntry> {
    let domain =
        Domain::from_name(domain).ok_or_else(|| ProtocolError::UnknownDomain(domain.to_string()))?;
    lookup_in(domain, command)
}

/// Look up a command within an already-resolved domain.
pub fn lookup_in(domain: Domain, command: &str) -> ProtocolResult<&'static CommandEntry> {
    COMMANDS
        .iter()
        .find(|entry| entry.domain == domain && entry.name == command)
        .ok_or_else(|| ProtocolError::UnknownCommand {
            domain: domain.name().to_string(),
            command: command.to_string(),
        })
}

/// Iterate the commands of one domain, in table order.
pub fn domain_commands(domain: Domain) -> impl Iterator<Item = &'static CommandEntry> {
    COMMANDS.iter().filter(move |entry| entry.domain == domain)
}
