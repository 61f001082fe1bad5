//! Service Ports
//!
//! Abstract interfaces for external services.

mod video_provider;

pub use video_provider::*;
