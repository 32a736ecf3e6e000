//! Socket record domain models.

use std::fmt;

use serde::{Serialize, Serializer};

/// Sentinel emitted for values that could not be resolved.
pub const UNKNOWN: &str = "unknown";

// ============================================================================
// Protocol
// ============================================================================

/// Transport protocol of a listening socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Both protocols, in the order they are enumerated.
    pub const ALL: [Protocol; 2] = [Protocol::Tcp, Protocol::Udp];

    /// Get the display name for this protocol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }

    /// Infer the protocol from a column value such as `TCP`, `tcp6` or `udp`.
    pub fn from_column(value: &str) -> Option<Self> {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("tcp") {
            Some(Protocol::Tcp)
        } else if lower.starts_with("udp") {
            Some(Protocol::Udp)
        } else {
            None
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Resolved
// ============================================================================

/// A value that may not be discoverable under the current privilege level.
///
/// `Unknown` renders and serializes as the literal string `"unknown"`, while
/// `Known(v)` serializes as `v` itself, so JSON consumers see either a number
/// or a name without an extra wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolved<T> {
    Known(T),
    Unknown,
}

impl<T> Resolved<T> {
    /// Borrow the inner value, if any.
    pub fn known(&self) -> Option<&T> {
        match self {
            Resolved::Known(value) => Some(value),
            Resolved::Unknown => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Resolved<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::Known(value) => value.fmt(f),
            // pad, so width and alignment flags apply
            Resolved::Unknown => f.pad(UNKNOWN),
        }
    }
}

impl<T: Serialize> Serialize for Resolved<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Resolved::Known(value) => value.serialize(serializer),
            Resolved::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

// ============================================================================
// SocketRecord
// ============================================================================

/// A listening socket and the process that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SocketRecord {
    /// Transport protocol.
    #[serde(rename = "proto")]
    pub protocol: Protocol,
    /// Local port the socket is bound to.
    pub port: u16,
    /// Process ID of the owner.
    pub pid: Resolved<u32>,
    /// Name of the owning process.
    #[serde(rename = "process")]
    pub process_name: Resolved<String>,
}

impl SocketRecord {
    /// Create a record whose owner was resolved.
    pub fn owned(protocol: Protocol, port: u16, pid: u32, process_name: impl Into<String>) -> Self {
        Self {
            protocol,
            port,
            pid: Resolved::Known(pid),
            process_name: Resolved::Known(process_name.into()),
        }
    }

    /// Create a record for a socket with no discoverable owner.
    pub fn unowned(protocol: Protocol, port: u16) -> Self {
        Self {
            protocol,
            port,
            pid: Resolved::Unknown,
            process_name: Resolved::Unknown,
        }
    }
}

impl fmt::Display for SocketRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (PID: {}, Process: {})",
            self.protocol, self.port, self.pid, self.process_name
        )
    }
}
