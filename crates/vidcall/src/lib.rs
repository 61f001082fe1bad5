//! Vidcall Domain Library
//!
//! Core domain types and interfaces for recording calls made to the
//! video provider's "video details" endpoint.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (ApiCall, Video)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use vidcall::domain::{ApiCall, Video};
//! use vidcall::ports::{CallRepository, VideoProvider};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{ApiCall, DomainError, Video, DETAILS_CALL_TYPE, MISSING_VIDEO_ID};
pub use ports::{CallRepository, VideoProvider};
