//! I define [`CandidateMappings`],
//! which enumerates all the bijections compatible with a partition of blank nodes.

use crate::permutation::Permutations;

/// Iterator over candidate mappings, as expected by [`IsoGraph::accepts`](crate::IsoGraph::accepts).
///
/// Each candidate extends a base mapping (the blank nodes already resolved)
/// with one permutation per class,
/// so that every combination of per-class permutations is produced exactly once.
/// Classes behave like the wheels of an odometer:
/// when the permutations of a class are exhausted,
/// they are restarted from scratch and the previous class moves one step.
pub(crate) struct CandidateMappings<'p> {
    classes: &'p [(Vec<usize>, Vec<usize>)],
    permutations: Vec<Permutations<usize>>,
    current: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<'p> CandidateMappings<'p> {
    /// `base` must have one entry per blank node of the first graph;
    /// entries for members of `classes` are overwritten.
    pub fn new(base: Vec<usize>, classes: &'p [(Vec<usize>, Vec<usize>)]) -> Self {
        let mut ret = CandidateMappings {
            classes,
            permutations: Vec::with_capacity(classes.len()),
            current: base,
            started: false,
            exhausted: false,
        };
        for (i, (_, members2)) in classes.iter().enumerate() {
            ret.permutations.push(Permutations::new(members2));
            if !ret.advance(i) {
                ret.exhausted = true;
            }
        }
        ret
    }

    /// Move class `i` to its next permutation.
    ///
    /// Return `false` if the permutations of that class are exhausted.
    fn advance(&mut self, i: usize) -> bool {
        match self.permutations[i].next() {
            Some(perm) => {
                for (&b1, b2) in self.classes[i].0.iter().zip(perm) {
                    self.current[b1] = b2;
                }
                true
            }
            None => false,
        }
    }

    fn restart(&mut self, i: usize) -> bool {
        self.permutations[i] = Permutations::new(&self.classes[i].1);
        self.advance(i)
    }
}

impl Iterator for CandidateMappings<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.current.clone());
        }
        let mut i = self.classes.len();
        loop {
            if i == 0 {
                self.exhausted = true;
                return None;
            }
            i -= 1;
            if self.advance(i) {
                break;
            }
        }
        for j in i + 1..self.classes.len() {
            if !self.restart(j) {
                self.exhausted = true;
                return None;
            }
        }
        Some(self.current.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn no_class() {
        let classes: [(Vec<usize>, Vec<usize>); 0] = [];
        let got: Vec<_> = CandidateMappings::new(vec![1, 0], &classes).collect();
        assert_eq!(got, vec![vec![1, 0]]);
    }

    #[test]
    fn one_class() {
        let classes = [(vec![0, 2], vec![2, 1])];
        let got: HashSet<_> =
            CandidateMappings::new(vec![9, 0, 9], &classes).collect();
        let exp: HashSet<_> = [vec![2, 0, 1], vec![1, 0, 2]].into_iter().collect();
        assert_eq!(got, exp);
    }

    #[test]
    fn product_of_classes() {
        let classes = [(vec![0, 1], vec![0, 1]), (vec![2, 3, 4], vec![2, 3, 4])];
        let mut count = 0;
        let mut got = HashSet::new();
        for candidate in CandidateMappings::new(vec![0; 5], &classes) {
            count += 1;
            // each class is mapped onto its counterpart
            let mut first: Vec<_> = candidate[..2].to_vec();
            first.sort_unstable();
            assert_eq!(first, vec![0, 1]);
            let mut second: Vec<_> = candidate[2..].to_vec();
            second.sort_unstable();
            assert_eq!(second, vec![2, 3, 4]);
            got.insert(candidate);
        }
        assert_eq!(count, 2 * 6);
        assert_eq!(got.len(), 2 * 6);
    }
}
