//! idstem API server library.
//!
//! Exposed as a library so integration tests can build the router and
//! serve it on an ephemeral port.

pub mod api;
pub mod config;
