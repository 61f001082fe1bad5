//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod postgres;
pub mod synq;

// Re-exports
pub use postgres::PgCallRepository;
pub use synq::SynqClient;
