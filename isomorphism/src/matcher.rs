//! I implement the search for a blank node mapping between two graphs.
//!
//! Its public members are transparently re-exported by the crate root.

use crate::candidates::CandidateMappings;
use crate::iso_graph::IsoGraph;
use crate::refinement::{refine_candidate, Partition, RefinementFailed, DEFAULT_MAX_ROUNDS};
use crate::{BnodeMapping, MatchError, MatchResult};
use rdfmatch_api::graph::{GTerm, Graph};
use rdfmatch_api::term::Term;
use std::hash::Hash;

/// Default bound on the number of candidate mappings examined by the trial-and-error stage:
/// no bound, so that [`find_mapping`] always gives a definite answer.
pub const DEFAULT_PERMUTATION_LIMIT: usize = usize::MAX;

/// Find a mapping from the blank nodes of `g1` to the blank nodes of `g2`,
/// such that renaming the blank nodes of `g1` accordingly yields exactly `g2`.
///
/// Returns `None` if no such mapping exists, i.e. if the graphs are not isomorphic.
/// If the graphs contain no blank node, an empty mapping is returned if they are equal.
/// Graphs are considered as *sets* of triples: duplicates are ignored.
///
/// When several mappings exist, which one is returned is unspecified.
///
/// This calls [`find_mapping_with`] with
///   - [`DEFAULT_MAX_ROUNDS`],
///   - [`DEFAULT_PERMUTATION_LIMIT`].
///
/// # Error
/// If an error occurs while traversing `g1`,
/// a [`MatchError::FirstGraph`] is returned.
///
/// If an error occurs while traversing `g2`,
/// a [`MatchError::SecondGraph`] is returned.
///
/// # Performance
///
/// In the common case, blank nodes are told apart by their neighbourhood,
/// and the mapping is found in polynomial time.
/// Blank nodes that can not be told apart are matched by trying all their permutations,
/// which is exponential in the size of the largest set of such blank nodes.
/// See [`find_mapping_with`] for bounding this cost.
pub fn find_mapping<'a, G1, G2>(
    g1: &'a G1,
    g2: &'a G2,
) -> MatchResult<Option<BnodeMapping<'a, GTerm<G1>>>, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph<Term = GTerm<G1>> + ?Sized,
    GTerm<G1>: Eq + Hash,
{
    find_mapping_with(g1, g2, DEFAULT_MAX_ROUNDS, DEFAULT_PERMUTATION_LIMIT)
}

/// Find a mapping from the blank nodes of `g1` to the blank nodes of `g2`,
/// such that renaming the blank nodes of `g1` accordingly yields exactly `g2`.
///
/// The parameters `max_rounds` and `permutation_limit`
/// are used to stop the algorithm if the computation becomes too complex:
/// * the signatures of blank nodes are refined at most `max_rounds` times
///   (fewer rounds may leave more blank nodes to the trial-and-error stage);
/// * if the trial-and-error stage would have to examine more than `permutation_limit`
///   candidate mappings, a [`MatchError::ToxicGraph`] is returned.
///
/// See also [`find_mapping`].
pub fn find_mapping_with<'a, G1, G2>(
    g1: &'a G1,
    g2: &'a G2,
    max_rounds: usize,
    permutation_limit: usize,
) -> MatchResult<Option<BnodeMapping<'a, GTerm<G1>>>, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph<Term = GTerm<G1>> + ?Sized,
    GTerm<G1>: Eq + Hash,
{
    let g1 = IsoGraph::new(g1).map_err(MatchError::FirstGraph)?;
    let g2 = IsoGraph::new(g2).map_err(MatchError::SecondGraph)?;
    let candidate = find_candidate(&g1, &g2, max_rounds, permutation_limit)
        .map_err(MatchError::ToxicGraph)?;
    Ok(candidate.map(|c| g1.to_mapping(&g2, &c)))
}

/// Computes whether two graphs are isomorphic.
///
/// This is a shortcut for checking that [`find_mapping`] returns `Some` mapping.
pub fn isomorphic_graphs<G1, G2>(g1: &G1, g2: &G2) -> MatchResult<bool, G1::Error, G2::Error>
where
    G1: Graph + ?Sized,
    G2: Graph<Term = GTerm<G1>> + ?Sized,
    GTerm<G1>: Eq + Hash,
{
    Ok(find_mapping(g1, g2)?.is_some())
}

/// Find a verified candidate mapping (see [`IsoGraph::accepts`]),
/// or fail with a message if the search space is larger than `permutation_limit`.
fn find_candidate<'a, T>(
    g1: &IsoGraph<'a, T>,
    g2: &IsoGraph<'a, T>,
    max_rounds: usize,
    permutation_limit: usize,
) -> Result<Option<Vec<usize>>, String>
where
    T: Term + Eq + Hash,
{
    if g1.len() != g2.len() {
        log::debug!("graphs have different sizes ({} vs {})", g1.len(), g2.len());
        return Ok(None);
    }
    let partition = match refine_candidate(g1, g2, max_rounds) {
        Ok(candidate) => {
            // signatures are invariant under renaming,
            // so a failed verification means that no mapping exists
            let verified = g1.accepts(g2, &candidate);
            log::debug!(
                "refinement produced a complete mapping, verified: {}",
                verified
            );
            return Ok(verified.then_some(candidate));
        }
        Err(RefinementFailed::NotIsomorphic(reason)) => {
            log::debug!("{}", reason);
            return Ok(None);
        }
        Err(RefinementFailed::Unresolved(partition)) => partition,
    };
    trial_and_error(g1, g2, &partition, permutation_limit)
}

/// Try every bijection compatible with `partition`,
/// and return the first one that is accepted.
fn trial_and_error<'a, T>(
    g1: &IsoGraph<'a, T>,
    g2: &IsoGraph<'a, T>,
    partition: &Partition,
    permutation_limit: usize,
) -> Result<Option<Vec<usize>>, String>
where
    T: Term + Eq + Hash,
{
    let too_large = match partition.search_space() {
        Some(size) => size > permutation_limit,
        None => permutation_limit < usize::MAX,
    };
    if too_large {
        return Err(format!(
            "Too many candidate mappings ({} classes of undistinguishable blank nodes, limit set to {})",
            partition.classes().len(),
            permutation_limit,
        ));
    }
    log::debug!(
        "doing trial and error matching for {} bnodes, in graphs of size: {}",
        partition.classes().iter().map(|(c1, _)| c1.len()).sum::<usize>(),
        g1.len(),
    );

    let mut base = vec![0; g1.bnode_count()];
    for &(b1, b2) in partition.resolved() {
        base[b1] = b2;
    }
    let mut tried = 0_usize;
    for candidate in CandidateMappings::new(base, partition.classes()) {
        tried += 1;
        if g1.accepts(g2, &candidate) {
            log::debug!("found a mapping after {} candidates", tried);
            return Ok(Some(candidate));
        }
    }
    log::debug!("no mapping found among {} candidates", tried);
    Ok(None)
}
