//! An RDF graph, the central notion of the RDF data model,
//! is a collection of triples.
//!
//! This module provides the [`Graph`] abstraction consumed by the matcher,
//! as well as its implementation for [standard collections of triples](Graph#foreign-impls).

mod _foreign_impl;
mod _traits;
pub use self::_traits::*;
