//! An RDF triple expresses a single fact.
//! It is formed of three terms called *subject*, *predicate* and *object*.
//!
//! In the model consumed by the matcher,
//! blank nodes are expected in subject and object position;
//! a blank node in predicate position (generalized RDF) is tolerated
//! and treated like any other blank node.

use crate::term::Term;

/// This trait represents an abstract RDF triple.
pub trait Triple {
    /// The type of the terms of this triple.
    type Term: Term + ?Sized;
    /// The subject of this triple.
    fn s(&self) -> &Self::Term;
    /// The predicate of this triple.
    fn p(&self) -> &Self::Term;
    /// The object of this triple.
    fn o(&self) -> &Self::Term;

    /// The three components of this triple.
    fn spo(&self) -> [&Self::Term; 3] {
        [self.s(), self.p(), self.o()]
    }
}

/// Arrays of terms, owned or borrowed, are triples.
impl<T> Triple for [T; 3]
where
    T: Term,
{
    type Term = T;
    #[inline]
    fn s(&self) -> &Self::Term {
        &self[0]
    }
    #[inline]
    fn p(&self) -> &Self::Term {
        &self[1]
    }
    #[inline]
    fn o(&self) -> &Self::Term {
        &self[2]
    }
}
