//! This crate is part of rdfmatch,
//! a toolkit for comparing [RDF] graphs up to the renaming of their blank nodes.
//!
//! It computes, for two graphs, a [mapping](BnodeMapping) of the blank nodes of the first one
//! to the blank nodes of the second one,
//! such that renaming the blank nodes of the first graph according to that mapping
//! yields exactly the second graph.
//! Such a mapping exists if and only if the two graphs are [isomorphic].
//!
//! The matching happens in two stages:
//! * a [refinement](refinement) stage, computing structural signatures of the blank nodes
//!   and pairing them when their signature is unique,
//!   which is fast and enough for the vast majority of real-world graphs;
//! * a trial-and-error stage, enumerating the [permutations](permutation)
//!   of the blank nodes that the refinement could not tell apart.
//!
//! The second stage is exhaustive, hence exponential in the worst case
//! (graphs with large sets of undistinguishable blank nodes).
//! [`find_mapping_with`] allows to bound it.
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [isomorphic]: https://www.w3.org/TR/rdf11-concepts/#graph-isomorphism
#![deny(missing_docs)]

mod candidates;
mod hash;
mod iso_graph;
mod matcher;
pub mod permutation;
pub mod refinement;

pub use iso_graph::IsoGraph;
pub use matcher::*;

use std::collections::HashMap;
use std::error::Error;

/// A mapping from the blank nodes of a graph to the blank nodes of another graph.
///
/// Its keys are exactly the blank nodes occurring in the first graph.
pub type BnodeMapping<'a, T> = HashMap<&'a T, &'a T>;

/// Error raised while looking for a blank node mapping.
#[derive(Debug, thiserror::Error)]
pub enum MatchError<E1, E2>
where
    E1: Error + Send + Sync + 'static,
    E2: Error + Send + Sync + 'static,
{
    /// The first graph raised an error while being traversed
    #[error("Error from first graph: {0}")]
    FirstGraph(#[source] E1),
    /// The second graph raised an error while being traversed
    #[error("Error from second graph: {0}")]
    SecondGraph(#[source] E2),
    /// The search space exceeded the configured safeguards
    #[error("Toxic graph pair detected: {0}")]
    ToxicGraph(String),
}

/// Convenient type alias for [`Result`] whose error is [`MatchError`].
pub type MatchResult<T, E1, E2> = Result<T, MatchError<E1, E2>>;


#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
