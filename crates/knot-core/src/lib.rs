//! Core types and traits for the Knot URL shortener.
//!
//! This crate provides the base-62 identifier encoder, the mapping record
//! types, and the storage contract shared by the shortener and redirector
//! services.

pub mod base62;
pub mod error;
pub mod mapping;
pub mod repository;
pub mod shortcode;

pub use base62::Base62Encoder;
pub use error::{EncodeError, StorageError};
pub use mapping::{MappingId, NewMapping, UrlMapping};
pub use repository::Repository;
pub use shortcode::ShortCode;
