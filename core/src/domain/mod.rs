//! Domain layer - Pure data models and filtering.
//!
//! These types have no I/O dependencies and can be tested in isolation.

mod filter;
mod socket;

// Re-export all domain types
pub use filter::{filter_records, PortFilter, PortRange, RangeError, COMMON_MAX, COMMON_MIN};
pub use socket::{Protocol, Resolved, SocketRecord, UNKNOWN};
