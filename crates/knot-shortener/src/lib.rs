//! Shortening workflow for the Knot URL shortener.
//!
//! This crate implements the two-phase creation workflow: persist a record
//! to obtain its identifier, encode the identifier as a base-62 short code,
//! then persist the code on the same record. It also provides the
//! out-of-band [`Reconciler`] that repairs records left code-less by a
//! failure between the two writes.

pub mod error;
pub mod reconcile;
pub mod service;
pub mod shortener;

pub use error::ShortenError;
pub use reconcile::Reconciler;
pub use service::ShortenerService;
pub use shortener::Shortener;
