//! Lookup service for the Knot URL shortener.
//!
//! This crate provides a [`RedirectorService`] that resolves short codes to
//! their original URLs. A miss is a typed [`ResolveError::NotFound`] the
//! caller must handle explicitly; mapping it to an HTTP status is the web
//! layer's concern.

pub mod error;
pub mod redirector;
pub mod service;

pub use error::ResolveError;
pub use redirector::Redirector;
pub use service::RedirectorService;
