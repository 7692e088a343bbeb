//! Core Kernel - Foundational types for the customer backend
//!
//! This crate provides the building blocks shared by the domain, the
//! database infrastructure and the HTTP layer:
//! - Strongly-typed identifiers
//! - The port error type and marker traits for ports and adapters
//! - Adapter health-check abstractions

pub mod identifiers;
pub mod ports;

pub use identifiers::CustomerId;
pub use ports::{
    PortError, DomainPort, AdapterHealth, HealthCheckResult, HealthCheckable,
};
