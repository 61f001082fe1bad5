//! Vidcall API Routes
//!
//! - /v1/details - Fetch video details from the provider and record the call
//! - /v1/status - Server start time and every recorded call

pub mod details;
pub mod status;
pub mod swagger;
