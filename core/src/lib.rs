//! portlist Core Library
//!
//! Lists the sockets listening on this host and the processes that own them.
//! Provides functionality to:
//! - Enumerate listening TCP and UDP sockets through platform commands
//! - Parse the command output into normalized socket records
//! - Filter records by port range
//! - Render records as an aligned table or JSON
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure data models and filtering
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! # Platform Support
//! - Linux: Uses `ss`, falling back to `netstat` or `lsof`
//! - macOS / BSD: Uses `lsof`

pub mod adapters;
pub mod application;
pub mod domain;
pub mod error;
pub mod parser;
pub mod ports;
pub mod render;

// Re-export domain types (primary API)
pub use domain::{filter_records, PortFilter, PortRange, Protocol, RangeError, Resolved, SocketRecord};

// Re-export other commonly used types
pub use adapters::{PlatformEnumerator, Tool};
pub use application::SocketService;
pub use error::{Error, Result};
pub use ports::{ListingFormat, RawListing, SocketSource};
pub use render::OutputFormat;
