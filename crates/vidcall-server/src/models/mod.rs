//! Vidcall Data Models
//!
//! Request/response DTOs for the HTTP surface.

mod call;
mod details;

pub use call::*;
pub use details::*;
