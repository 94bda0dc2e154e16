//! Payload validation engine.
//!
//! Two passes over an incoming JSON body: a shape pass driven by
//! [`rules::FieldRule`] tables, then a length pass delegated to the
//! `validator` derive on the typed input structs in [`crate::catalog`].
//! Every failing field is reported, not just the first one.

pub mod evaluator;
pub mod rules;

pub use rules::{FieldErrors, FieldRule};
