//! Port range filtering.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::SocketRecord;

/// Lowest well-known port.
pub const COMMON_MIN: u16 = 1;
/// Highest well-known port.
pub const COMMON_MAX: u16 = 1024;

// ============================================================================
// PortRange
// ============================================================================

/// An inclusive range of ports, always with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

/// Reasons a `START-END` range argument is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("expected START-END, got '{0}'")]
    Format(String),

    #[error("'{0}' is not a port number between 0 and 65535")]
    InvalidPort(String),

    #[error("start {start} is greater than end {end}")]
    Inverted { start: u16, end: u16 },
}

impl PortRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: u16, end: u16) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// The well-known ports, 1-1024.
    pub fn common() -> Self {
        Self {
            start: COMMON_MIN,
            end: COMMON_MAX,
        }
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    pub fn contains(&self, port: u16) -> bool {
        (self.start..=self.end).contains(&port)
    }
}

impl FromStr for PortRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .ok_or_else(|| RangeError::Format(s.to_string()))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u16>()
                .map_err(|_| RangeError::InvalidPort(part.to_string()))
        };

        Self::new(parse(start)?, parse(end)?)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ============================================================================
// PortFilter
// ============================================================================

/// Filter criteria for socket listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortFilter {
    /// Inclusive port bounds. `None` keeps every record.
    pub bounds: Option<PortRange>,
}

impl PortFilter {
    /// Create a filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to well-known ports.
    pub fn common() -> Self {
        Self::new().with_range(PortRange::common())
    }

    /// Set the port range.
    pub fn with_range(mut self, range: PortRange) -> Self {
        self.bounds = Some(range);
        self
    }

    /// Check if the filter has any active conditions.
    pub fn is_active(&self) -> bool {
        self.bounds.is_some()
    }

    /// Check if a record matches the filter.
    pub fn matches(&self, record: &SocketRecord) -> bool {
        self.bounds.map_or(true, |range| range.contains(record.port))
    }
}

/// Apply a filter to a list of records, preserving order.
pub fn filter_records(records: Vec<SocketRecord>, filter: &PortFilter) -> Vec<SocketRecord> {
    if !filter.is_active() {
        return records;
    }
    records.into_iter().filter(|r| filter.matches(r)).collect()
}
