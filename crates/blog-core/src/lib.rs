//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the blog post entity, its update rules and the
//! repository ports, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
