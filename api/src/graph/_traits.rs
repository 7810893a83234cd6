// this module is transparently re-exported by its parent `graph`

use std::collections::HashSet;
use std::error::Error;
use std::hash::Hash;

use resiter::filter::*;

use crate::term::Term;

/// Type alias for the terms contained in a graph.
pub type GTerm<G> = <G as Graph>::Term;
/// Type alias for the triples yielded by a graph.
pub type GTriple<'a, G> = [&'a GTerm<G>; 3];
/// Type alias for results produced by a graph.
pub type GResult<G, T> = Result<T, <G as Graph>::Error>;
/// Type alias for fallible triple iterators produced by a graph.
///
/// See [`Graph::triples`] for more information about how to use it.
pub type GTripleSource<'a, G> = Box<dyn Iterator<Item = GResult<G, GTriple<'a, G>>> + 'a>;

/// Generic trait for RDF graphs.
///
/// For convenience, this trait is implemented
/// by [standard collections of triples](#foreign-impls).
///
/// NB: the semantics of this trait allows a graph to contain duplicate triples;
/// consumers that need set semantics must deduplicate.
pub trait Graph {
    /// The type of the terms contained in this graph.
    type Term: Term;
    /// The error type that this graph may raise.
    type Error: Error + Send + Sync + 'static;

    /// An iterator visiting all triples of this graph in arbitrary order.
    ///
    /// This iterator is fallible:
    /// its items are `Result`s,
    /// an error may occur at any time during the iteration.
    ///
    /// ```
    /// # use rdfmatch_api::graph::Graph;
    /// # use rdfmatch_api::term::SimpleTerm;
    /// # fn foo() -> Result<(), std::convert::Infallible> {
    /// # let graph = Vec::<[SimpleTerm; 3]>::new();
    /// for t in graph.triples() {
    ///     let [s, p, o] = t?; // rethrow error if any
    ///     // do something with s, p, o
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn triples(&self) -> GTripleSource<'_, Self>;

    /// An iterator visiting all triples with the given subject.
    fn triples_with_s<'s>(&'s self, s: &'s Self::Term) -> GTripleSource<'s, Self>
    where
        Self::Term: PartialEq,
    {
        Box::new(self.triples().filter_ok(move |t| t[0] == s))
    }

    /// An iterator visiting all triples with the given predicate.
    fn triples_with_p<'s>(&'s self, p: &'s Self::Term) -> GTripleSource<'s, Self>
    where
        Self::Term: PartialEq,
    {
        Box::new(self.triples().filter_ok(move |t| t[1] == p))
    }

    /// An iterator visiting all triples with the given object.
    fn triples_with_o<'s>(&'s self, o: &'s Self::Term) -> GTripleSource<'s, Self>
    where
        Self::Term: PartialEq,
    {
        Box::new(self.triples().filter_ok(move |t| t[2] == o))
    }

    /// Return `true` if this graph contains the given triple.
    fn contains(&self, s: &Self::Term, p: &Self::Term, o: &Self::Term) -> GResult<Self, bool>
    where
        Self::Term: PartialEq,
    {
        match self
            .triples_with_s(s)
            .filter_ok(|t| t[1] == p && t[2] == o)
            .next()
        {
            None => Ok(false),
            Some(Ok(_)) => Ok(true),
            Some(Err(err)) => Err(err),
        }
    }

    /// The set of distinct blank nodes used in this graph.
    ///
    /// Only blank nodes actually occurring in a triple are returned.
    fn blank_nodes(&self) -> GResult<Self, HashSet<&Self::Term>>
    where
        Self::Term: Eq + Hash,
    {
        let mut bnodes = HashSet::new();
        for t in self.triples() {
            for term in t? {
                if term.is_blank_node() {
                    bnodes.insert(term);
                }
            }
        }
        Ok(bnodes)
    }
}
