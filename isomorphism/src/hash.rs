//! I define parameterized hashing functions,
//! where blank nodes are hashed according to a given signature map.

use crate::iso_graph::{IsoTriple, Node};
use std::hash::{Hash, Hasher};

/// The hasher used internally for computing signatures.
///
/// It must be deterministic, as signatures from two different graphs are compared.
pub(crate) type IsoHasher = std::collections::hash_map::DefaultHasher;

const FIXED: u8 = 0;
const FOCUS: u8 = 1;
const OTHER: u8 = 2;

/// Hash triple `t` from the point of view of blank node `focus`.
///
/// Fixed terms are hashed by value,
/// `focus` itself is hashed with a dedicated marker,
/// and other blank nodes are hashed with their signature in `signatures`,
/// or with a placeholder if `signatures` is `None`.
/// The position of each node in the triple is implied by the hashing order.
pub(crate) fn hash_triple_from<T: Hash>(
    t: &IsoTriple<'_, T>,
    focus: usize,
    signatures: Option<&[u64]>,
) -> u64 {
    let mut state = IsoHasher::new();
    for node in t {
        match *node {
            Node::Fixed(term) => {
                FIXED.hash(&mut state);
                term.hash(&mut state);
            }
            Node::Blank(b) if b == focus => FOCUS.hash(&mut state),
            Node::Blank(b) => {
                OTHER.hash(&mut state);
                if let Some(signatures) = signatures {
                    signatures[b].hash(&mut state);
                }
            }
        }
    }
    state.finish()
}

/// Combine the hashes of all the triples incident to a blank node
/// (and its previous signature, if any) into a new signature.
pub(crate) fn combine(previous: Option<u64>, mut triple_hashes: Vec<u64>) -> u64 {
    triple_hashes.sort_unstable(); // to ensure reproducibility
    let mut state = IsoHasher::new();
    previous.hash(&mut state);
    triple_hashes.hash(&mut state);
    state.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn focus_and_position_matter() {
        let p = "tag:p";
        let t1: IsoTriple<&str> = [Node::Blank(0), Node::Fixed(&p), Node::Blank(1)];
        let t2: IsoTriple<&str> = [Node::Blank(1), Node::Fixed(&p), Node::Blank(0)];
        // from the subject's point of view, both are the same
        assert_eq!(
            hash_triple_from(&t1, 0, None),
            hash_triple_from(&t2, 1, None)
        );
        // but subject and object roles differ
        assert_ne!(
            hash_triple_from(&t1, 0, None),
            hash_triple_from(&t1, 1, None)
        );
        // neighbour signatures are taken into account
        let sigs: [u64; 2] = [7, 8];
        let other_sigs: [u64; 2] = [7, 9];
        assert_ne!(
            hash_triple_from(&t1, 0, Some(&sigs)),
            hash_triple_from(&t1, 0, Some(&other_sigs)),
        );
    }

    #[test]
    fn combine_is_order_insensitive() {
        assert_eq!(combine(None, vec![1, 2, 3]), combine(None, vec![3, 1, 2]));
        assert_ne!(combine(None, vec![1, 2]), combine(Some(0), vec![1, 2]));
        assert_ne!(combine(None, vec![1, 2]), combine(None, vec![1, 2, 2]));
    }
}
