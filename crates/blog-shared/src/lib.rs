//! # Blog Shared
//!
//! Wire types of the blog HTTP API: request and response bodies, and the
//! pretty JSON encoding every response uses.

pub mod dto;
pub mod response;

pub use dto::{Field, from_json_body};
pub use response::{ErrorBody, to_pretty_json};
