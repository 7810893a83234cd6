//! I define [`IsoGraph`],
//! the working copy of a graph on which the matcher operates.
use crate::BnodeMapping;
use rdfmatch_api::graph::{GResult, Graph};
use rdfmatch_api::term::Term;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// A node in a triple of an [`IsoGraph`]:
/// either a fixed term (compared by value),
/// or the index of a blank node in [`IsoGraph::bnodes`].
#[derive(Debug, Eq, Hash, PartialEq)]
pub(crate) enum Node<'a, T> {
    Fixed(&'a T),
    Blank(usize),
}

impl<T> Clone for Node<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Node<'_, T> {}

pub(crate) type IsoTriple<'a, T> = [Node<'a, T>; 3];

/// An immutable working copy of a [`Graph`], prepared for matching.
///
/// * Duplicate triples are collapsed, so [`len`](IsoGraph::len)
///   is the number of *distinct* triples.
/// * Blank nodes are stored in an arena, and identified by their index in it.
///   Only blank nodes occurring in some triple are part of the arena.
/// * Fixed terms are borrowed from the original graph, and compared by value.
///
/// The original graph must not be mutated while its `IsoGraph` is alive,
/// which the borrow checker guarantees.
#[derive(Debug)]
pub struct IsoGraph<'a, T> {
    bnodes: Vec<&'a T>,
    triples: Vec<IsoTriple<'a, T>>,
    index: HashSet<IsoTriple<'a, T>>,
    adjacency: Vec<Vec<usize>>,
    ground: usize,
}

impl<'a, T> IsoGraph<'a, T>
where
    T: Term + Eq + Hash,
{
    /// Traverse `g` once to build its working copy.
    ///
    /// # Error
    /// Any error raised by `g` while traversing it is returned.
    pub fn new<G>(g: &'a G) -> GResult<G, Self>
    where
        G: Graph<Term = T> + ?Sized,
    {
        let mut bnode_index: HashMap<&'a T, usize> = HashMap::new();
        let mut bnodes = Vec::new();
        let mut triples = Vec::new();
        let mut index = HashSet::new();
        for t in g.triples() {
            let t = t?.map(|term| {
                if term.is_blank_node() {
                    let next = bnode_index.len();
                    let i = *bnode_index.entry(term).or_insert_with(|| {
                        bnodes.push(term);
                        next
                    });
                    Node::Blank(i)
                } else {
                    Node::Fixed(term)
                }
            });
            if index.insert(t) {
                triples.push(t);
            }
        }

        let mut adjacency = vec![Vec::new(); bnodes.len()];
        let mut ground = 0;
        for (ti, t) in triples.iter().enumerate() {
            let mut is_ground = true;
            for node in t {
                if let Node::Blank(b) = *node {
                    is_ground = false;
                    // a triple may contain the same blank node several times
                    let incident: &mut Vec<usize> = &mut adjacency[b];
                    if incident.last() != Some(&ti) {
                        incident.push(ti);
                    }
                }
            }
            if is_ground {
                ground += 1;
            }
        }

        Ok(IsoGraph {
            bnodes,
            triples,
            index,
            adjacency,
            ground,
        })
    }

    /// The number of distinct triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Whether this graph contains no triple.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// The number of distinct blank nodes in this graph.
    pub fn bnode_count(&self) -> usize {
        self.bnodes.len()
    }

    /// The blank nodes of this graph.
    ///
    /// The position of a blank node in this slice is the handle
    /// used by [`Partition`](crate::refinement::Partition).
    pub fn bnodes(&self) -> &[&'a T] {
        &self.bnodes
    }

    /// The number of triples containing no blank node.
    pub fn ground_count(&self) -> usize {
        self.ground
    }

    /// Check that renaming the blank nodes of `self` according to `candidate`
    /// yields exactly `other`.
    ///
    /// `candidate[i]` is the handle in `other` of the image of blank node `i`.
    /// Any candidate that is not a bijection between the blank nodes of both graphs
    /// is rejected.
    pub fn accepts(&self, other: &IsoGraph<'a, T>, candidate: &[usize]) -> bool {
        if self.len() != other.len()
            || self.bnode_count() != other.bnode_count()
            || candidate.len() != self.bnode_count()
        {
            return false;
        }
        let mut used = vec![false; other.bnode_count()];
        for &b2 in candidate {
            if b2 >= used.len() || used[b2] {
                return false;
            }
            used[b2] = true;
        }
        self.triples.iter().all(|t| {
            let mapped = t.map(|node| match node {
                Node::Blank(b) => Node::Blank(candidate[b]),
                fixed => fixed,
            });
            other.index.contains(&mapped)
        })
    }

    /// Convert a candidate (as accepted by [`accepts`](IsoGraph::accepts))
    /// into a [`BnodeMapping`].
    pub(crate) fn to_mapping(
        &self,
        other: &IsoGraph<'a, T>,
        candidate: &[usize],
    ) -> BnodeMapping<'a, T> {
        candidate
            .iter()
            .enumerate()
            .map(|(b1, &b2)| (self.bnodes[b1], other.bnodes[b2]))
            .collect()
    }

    pub(crate) fn triples(&self) -> &[IsoTriple<'a, T>] {
        &self.triples
    }

    /// Indices (in [`triples`](IsoGraph::triples)) of the triples containing blank node `b`.
    pub(crate) fn incident(&self, b: usize) -> &[usize] {
        &self.adjacency[b]
    }

    pub(crate) fn ground_triples(&self) -> impl Iterator<Item = &IsoTriple<'a, T>> + '_ {
        self.triples
            .iter()
            .filter(|t| t.iter().all(|node| matches!(node, Node::Fixed(_))))
    }

    pub(crate) fn contains(&self, t: &IsoTriple<'a, T>) -> bool {
        self.index.contains(t)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfmatch_api::term::SimpleTerm;
    use std::error::Error;

    fn bn(id: &str) -> SimpleTerm {
        SimpleTerm::bnode(id).unwrap()
    }

    fn iri(i: &str) -> SimpleTerm {
        SimpleTerm::iri(i)
    }

    #[test]
    fn set_semantics() -> Result<(), Box<dyn Error>> {
        let g = vec![
            [iri("tag:s"), iri("tag:p"), bn("x")],
            [iri("tag:s"), iri("tag:p"), bn("x")],
            [bn("x"), iri("tag:p"), bn("x")],
            [iri("tag:s"), iri("tag:p"), iri("tag:o")],
        ];
        let ig = IsoGraph::new(&g)?;
        assert_eq!(ig.len(), 3);
        assert_eq!(ig.bnode_count(), 1);
        assert_eq!(ig.ground_count(), 1);
        assert_eq!(ig.ground_triples().count(), 1);
        // the self-loop is incident only once
        assert_eq!(ig.incident(0).len(), 2);
        Ok(())
    }

    #[test]
    fn empty() -> Result<(), Box<dyn Error>> {
        let g: Vec<[SimpleTerm; 3]> = vec![];
        let ig = IsoGraph::new(&g)?;
        assert!(ig.is_empty());
        assert_eq!(ig.bnode_count(), 0);
        assert!(ig.accepts(&ig, &[]));
        Ok(())
    }

    #[test]
    fn accepts() -> Result<(), Box<dyn Error>> {
        let p = iri("tag:p");
        let g1 = vec![
            [bn("a"), p.clone(), bn("b")],
            [bn("b"), p.clone(), iri("tag:o")],
        ];
        let g2 = vec![
            [bn("c"), p.clone(), iri("tag:o")],
            [bn("d"), p.clone(), bn("c")],
        ];
        let ig1 = IsoGraph::new(&g1)?;
        let ig2 = IsoGraph::new(&g2)?;
        assert_eq!(ig1.bnodes(), &[&bn("a"), &bn("b")]);
        assert_eq!(ig2.bnodes(), &[&bn("c"), &bn("d")]);
        // a -> d, b -> c
        assert!(ig1.accepts(&ig2, &[1, 0]));
        assert!(!ig1.accepts(&ig2, &[0, 1]));
        // not a bijection
        assert!(!ig1.accepts(&ig2, &[1, 1]));
        // out of range, or wrong length
        assert!(!ig1.accepts(&ig2, &[1, 2]));
        assert!(!ig1.accepts(&ig2, &[1]));

        let m = ig1.to_mapping(&ig2, &[1, 0]);
        assert_eq!(m.len(), 2);
        assert_eq!(m[&bn("a")], &bn("d"));
        assert_eq!(m[&bn("b")], &bn("c"));
        Ok(())
    }
}
