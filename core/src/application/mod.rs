//! Application layer - Use case services.
//!
//! Services are thin orchestrators that accept domain types, use ports
//! (traits) for external dependencies and return domain types.

mod socket_service;

pub use socket_service::SocketService;
