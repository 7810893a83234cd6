//! I implement the structural refinement of blank nodes,
//! the fast (polynomial) stage of the matching.
//!
//! Each blank node gets a signature,
//! computed from the triples in which it occurs.
//! Initially, other blank nodes in those triples are all hashed the same way;
//! then signatures are iteratively refined by incorporating
//! the signatures of neighbouring blank nodes
//! (a kind of [color refinement](https://en.wikipedia.org/wiki/Colour_refinement_algorithm)).
//!
//! Signatures are invariant under blank node renaming,
//! so any isomorphism must map a blank node to a blank node with the same signature.
//! When every signature is unique, the mapping is therefore fully determined.

use crate::hash::{combine, hash_triple_from};
use crate::iso_graph::IsoGraph;
use crate::permutation::factorial;
use crate::BnodeMapping;
use rdfmatch_api::term::Term;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Default bound on the number of refinement rounds:
/// no bound, as refinement always stabilizes after at most as many rounds as there are blank nodes.
pub const DEFAULT_MAX_ROUNDS: usize = usize::MAX;

/// The partition of blank nodes reached by the refinement,
/// when it could not resolve all of them.
///
/// Blank nodes are identified by their position in [`IsoGraph::bnodes`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    resolved: Vec<(usize, usize)>,
    classes: Vec<(Vec<usize>, Vec<usize>)>,
}

impl Partition {
    /// Pairs of blank nodes (from the first and second graph, respectively)
    /// that were resolved by their unique signature.
    pub fn resolved(&self) -> &[(usize, usize)] {
        &self.resolved
    }

    /// Pairs of matching equivalence classes (from the first and second graph, respectively)
    /// with more than one member.
    ///
    /// Both classes of a pair have the same size,
    /// and any isomorphism maps the first class onto the second one.
    pub fn classes(&self) -> &[(Vec<usize>, Vec<usize>)] {
        &self.classes
    }

    /// The number of bijections compatible with this partition,
    /// or `None` if it does not fit in a `usize`.
    pub fn search_space(&self) -> Option<usize> {
        self.classes
            .iter()
            .try_fold(1_usize, |acc, (c1, _)| acc.checked_mul(factorial(c1.len())?))
    }
}

/// The reason why the refinement did not produce a complete mapping.
#[derive(Debug, thiserror::Error)]
pub enum RefinementFailed {
    /// The graphs are definitely not isomorphic
    #[error("graphs are not isomorphic: {0}")]
    NotIsomorphic(&'static str),
    /// Some blank nodes could not be told apart
    #[error("{} classes of blank nodes could not be told apart", .0.classes().len())]
    Unresolved(Partition),
}

/// Try to compute the blank node mapping between `g1` and `g2`
/// using structural signatures only.
///
/// This calls [`refine_with`] with [`DEFAULT_MAX_ROUNDS`].
pub fn refine<'a, T>(
    g1: &IsoGraph<'a, T>,
    g2: &IsoGraph<'a, T>,
) -> Result<BnodeMapping<'a, T>, RefinementFailed>
where
    T: Term + Eq + Hash,
{
    refine_with(g1, g2, DEFAULT_MAX_ROUNDS)
}

/// Try to compute the blank node mapping between `g1` and `g2`
/// using structural signatures only,
/// refining them at most `max_rounds` times.
///
/// On success, the mapping is complete, but not verified:
/// if the graphs are not isomorphic, it might not be valid
/// (see [`IsoGraph::accepts`]).
///
/// # Failure
/// [`RefinementFailed::NotIsomorphic`] is returned if the graphs are proved not to be isomorphic.
/// [`RefinementFailed::Unresolved`] is returned if some blank nodes share the same signature;
/// the resulting [`Partition`] can then be used to restrict a search.
pub fn refine_with<'a, T>(
    g1: &IsoGraph<'a, T>,
    g2: &IsoGraph<'a, T>,
    max_rounds: usize,
) -> Result<BnodeMapping<'a, T>, RefinementFailed>
where
    T: Term + Eq + Hash,
{
    refine_candidate(g1, g2, max_rounds).map(|candidate| g1.to_mapping(g2, &candidate))
}

/// Same as [`refine_with`], but returns the mapping as a candidate
/// (as expected by [`IsoGraph::accepts`]).
pub(crate) fn refine_candidate<'a, T>(
    g1: &IsoGraph<'a, T>,
    g2: &IsoGraph<'a, T>,
    max_rounds: usize,
) -> Result<Vec<usize>, RefinementFailed>
where
    T: Term + Eq + Hash,
{
    use RefinementFailed::*;

    if g1.len() != g2.len() {
        return Err(NotIsomorphic("different numbers of triples"));
    }
    if g1.bnode_count() != g2.bnode_count() {
        return Err(NotIsomorphic("different numbers of blank nodes"));
    }
    if g1.ground_count() != g2.ground_count()
        || g1.ground_triples().any(|t| !g2.contains(t))
    {
        return Err(NotIsomorphic("different triples without blank nodes"));
    }

    let mut sig1 = initial_signatures(g1);
    let mut sig2 = initial_signatures(g2);
    let mut classes1 = classes_of(&sig1);
    let mut classes2 = classes_of(&sig2);
    check_compatible(&classes1, &classes2)?;

    let mut round = 0;
    while classes1.len() < g1.bnode_count() && round < max_rounds {
        round += 1;
        let next1 = refined_signatures(g1, &sig1);
        let next2 = refined_signatures(g2, &sig2);
        let next_classes1 = classes_of(&next1);
        let next_classes2 = classes_of(&next2);
        check_compatible(&next_classes1, &next_classes2)?;
        log::trace!(
            "refinement round {}: {} -> {} classes for {} blank nodes",
            round,
            classes1.len(),
            next_classes1.len(),
            g1.bnode_count(),
        );
        // signatures can only split classes, so the same count means a stable partition
        let stable = next_classes1.len() == classes1.len();
        sig1 = next1;
        sig2 = next2;
        classes1 = next_classes1;
        classes2 = next_classes2;
        if stable {
            break;
        }
    }

    let mut partition = Partition::default();
    for (sig, members1) in classes1 {
        // check_compatible guarantees that the class exists in g2, with the same size
        let members2 = classes2.remove(&sig).unwrap_or_default();
        if members1.len() == 1 && members2.len() == 1 {
            partition.resolved.push((members1[0], members2[0]));
        } else {
            partition.classes.push((members1, members2));
        }
    }
    log::debug!(
        "refinement resolved {} blank nodes after {} rounds, {} classes left",
        partition.resolved.len(),
        round,
        partition.classes.len(),
    );

    if partition.classes.is_empty() {
        let mut candidate = vec![0; g1.bnode_count()];
        for (b1, b2) in partition.resolved {
            candidate[b1] = b2;
        }
        Ok(candidate)
    } else {
        Err(Unresolved(partition))
    }
}

type Classes = BTreeMap<u64, Vec<usize>>;

fn initial_signatures<T>(g: &IsoGraph<'_, T>) -> Vec<u64>
where
    T: Term + Eq + Hash,
{
    (0..g.bnode_count())
        .map(|b| {
            let hashes = g
                .incident(b)
                .iter()
                .map(|&ti| hash_triple_from(&g.triples()[ti], b, None))
                .collect();
            combine(None, hashes)
        })
        .collect()
}

fn refined_signatures<T>(g: &IsoGraph<'_, T>, previous: &[u64]) -> Vec<u64>
where
    T: Term + Eq + Hash,
{
    (0..g.bnode_count())
        .map(|b| {
            let hashes = g
                .incident(b)
                .iter()
                .map(|&ti| hash_triple_from(&g.triples()[ti], b, Some(previous)))
                .collect();
            combine(Some(previous[b]), hashes)
        })
        .collect()
}

fn classes_of(signatures: &[u64]) -> Classes {
    let mut classes = Classes::new();
    for (b, sig) in signatures.iter().enumerate() {
        classes.entry(*sig).or_default().push(b);
    }
    classes
}

/// Check that, for each signature, there are the same number of bnodes in each graph.
fn check_compatible(classes1: &Classes, classes2: &Classes) -> Result<(), RefinementFailed> {
    if classes1.len() != classes2.len() {
        return Err(RefinementFailed::NotIsomorphic(
            "different blank node partitions",
        ));
    }
    for (sig, members1) in classes1 {
        match classes2.get(sig) {
            Some(members2) if members2.len() == members1.len() => {}
            _ => {
                return Err(RefinementFailed::NotIsomorphic(
                    "different blank node partitions",
                ))
            }
        }
    }
    Ok(())
}
