//! This crate is part of rdfmatch,
//! a toolkit for comparing [RDF] graphs up to the renaming of their blank nodes.
//!
//! It defines the abstractions consumed by the matching algorithm:
//! [terms](term), [triples](triple) and [graphs](graph).
//! These abstractions are deliberately minimal,
//! so that any triple store can expose its content to the matcher.
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod graph;
pub mod term;
pub mod triple;
