//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - ApiCall: one attempt to fetch video details from the provider
//! - Video: the provider's video document

mod api_call;
mod video;

pub use api_call::*;
pub use video::*;
