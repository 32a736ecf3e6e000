//! Socket source port (interface).

use crate::domain::Protocol;
use crate::error::Result;

/// Output layout of an enumeration command, which decides how its lines
/// are parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFormat {
    /// `ss` output. `ss` is run once per protocol, so the protocol is
    /// attached to the listing rather than read from a column.
    Ss(Protocol),
    /// `lsof` output with the protocol in the NODE column.
    Lsof,
    /// `netstat` output with the protocol in the first column.
    Netstat,
}

/// Raw text captured from one enumeration command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawListing {
    pub format: ListingFormat,
    pub text: String,
}

impl RawListing {
    pub fn new(format: ListingFormat, text: impl Into<String>) -> Self {
        Self {
            format,
            text: text.into(),
        }
    }
}

/// Source of raw listening-socket listings.
///
/// Implementations handle platform-specific details (ss, lsof, netstat).
/// Listings are returned in the order the commands were run.
pub trait SocketSource: Send + Sync {
    /// Enumerate listening sockets as raw command output.
    fn enumerate(&self) -> impl std::future::Future<Output = Result<Vec<RawListing>>> + Send;
}
