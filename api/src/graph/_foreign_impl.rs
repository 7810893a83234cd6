use super::*;
use crate::term::Term;
use crate::triple::Triple;
use std::collections::{BTreeSet, HashSet};
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};

//
// foreign implementations
//

// reference to Graph

impl<'a, G: Graph + ?Sized> Graph for &'a G {
    type Term = G::Term;
    type Error = G::Error;

    fn triples(&self) -> GTripleSource<'_, Self> {
        G::triples(*self)
    }
}

// slice of triples

impl<T: Term> Graph for [[T; 3]] {
    type Term = T;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Triple::spo).map(Ok))
    }
}

// Vec of triples

impl<T: Term> Graph for Vec<[T; 3]> {
    type Term = T;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        self[..].triples()
    }
}

// HashSet of triples

impl<T, S> Graph for HashSet<[T; 3], S>
where
    T: Eq + Hash + Term,
    S: BuildHasher,
{
    type Term = T;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Triple::spo).map(Ok))
    }
}

// BTreeSet of triples

impl<T> Graph for BTreeSet<[T; 3]>
where
    T: Ord + Term,
{
    type Term = T;
    type Error = Infallible;

    fn triples(&self) -> GTripleSource<'_, Self> {
        Box::new(self.iter().map(Triple::spo).map(Ok))
    }
}
