//! # Tracekit identifier core
//!
//! Generation, encoding, and parsing of the identifiers Tracekit uses to
//! correlate distributed-tracing data: trace identifiers shared by every
//! span of one end-to-end operation, and span identifiers naming a single
//! unit of work within it.
//!
//! Every identifier carries two interchangeable representations of the same
//! value: a lowercase hexadecimal string for logs and textual headers, and
//! a fixed-width big-endian byte form for binary wire formats. Both are
//! held by [`Identifier`] and always decode to the same value, because
//! identifiers are only ever built by a [`Factory`].
//!
//! ## Getting started
//!
//! A tracer holds one [`Scheme`] and draws a trace identifier per trace and
//! a span identifier per span from it:
//!
//! ```
//! use tracekit_ident::Scheme;
//!
//! let scheme = Scheme::DOUBLE;
//!
//! let trace_id = scheme.trace_id_factory.generate();
//! let span_id = scheme.span_id_factory.generate();
//!
//! assert_eq!(trace_id.as_str().len(), 32);
//! assert_eq!(span_id.as_str().len(), 16);
//! ```
//!
//! ## Parsing propagated context
//!
//! Inbound identifiers come from the network and may be malformed. The
//! parse operations are total: any failure yields [`Identifier::EMPTY`]
//! rather than an error, so a propagation layer never has to handle a
//! parse failure inline:
//!
//! ```
//! use tracekit_ident::Factory;
//!
//! let id = Factory::EightBytes.from_hex("00000000000003e7");
//! assert_eq!(id.as_bytes(), 999u64.to_be_bytes());
//!
//! assert!(Factory::EightBytes.from_hex("not an identifier").is_empty());
//! assert!(Factory::SixteenBytes.from_bytes(&[0u8; 3]).is_empty());
//! ```
//!
//! ## Concurrency
//!
//! Factories and schemes are stateless `Copy` values, shared freely across
//! threads. [`Factory::generate`] draws randomness from a generator owned
//! by the calling thread, so concurrent generation never contends on a
//! lock.
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]
#![cfg_attr(test, deny(warnings))]

mod error;
mod factory;
pub mod hex;
mod identifier;
mod internal_logging;
mod scheme;

pub use error::ParseError;
pub use factory::Factory;
pub use identifier::Identifier;
pub use scheme::Scheme;

#[doc(hidden)]
#[cfg(feature = "internal-logs")]
pub mod _private {
    //! Re-exports for the internal logging macros. Not public API.
    pub use tracing::{debug, warn};
}
