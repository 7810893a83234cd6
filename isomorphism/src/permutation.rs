//! I provide [`Permutations`],
//! a lazy iterator over all the permutations of a sequence.

use std::iter::FusedIterator;

/// Iterator over all the permutations of a sequence of values.
///
/// Permutations are produced on demand, using the iterative version of
/// [Heap's algorithm](https://en.wikipedia.org/wiki/Heap%27s_algorithm),
/// so a sequence of `n` values yields exactly `n!` distinct permutations
/// (in no particular order) without ever materializing them all.
///
/// An empty sequence yields no permutation at all.
/// Once exhausted, the iterator keeps returning `None`.
///
/// ```
/// # use rdfmatch_isomorphism::permutation::Permutations;
/// let values = ['a', 'b', 'c'];
/// assert_eq!(Permutations::new(&values).count(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct Permutations<T> {
    values: Vec<T>,
    counters: Vec<usize>,
    index: usize,
    state: State,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Exhausted,
}

impl<T: Clone> Permutations<T> {
    /// Iterate over the permutations of `values`.
    ///
    /// `values` is copied, and left untouched.
    pub fn new(values: &[T]) -> Self {
        Permutations {
            values: values.to_vec(),
            counters: vec![0; values.len()],
            index: 1,
            state: State::Fresh,
        }
    }
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Exhausted => None,
            State::Fresh => {
                if self.values.is_empty() {
                    self.state = State::Exhausted;
                    None
                } else {
                    self.state = State::Running;
                    Some(self.values.clone())
                }
            }
            State::Running => {
                let n = self.values.len();
                while self.index < n {
                    let i = self.index;
                    if self.counters[i] < i {
                        if i % 2 == 0 {
                            self.values.swap(0, i);
                        } else {
                            self.values.swap(self.counters[i], i);
                        }
                        self.counters[i] += 1;
                        self.index = 1;
                        return Some(self.values.clone());
                    }
                    self.counters[i] = 0;
                    self.index += 1;
                }
                self.state = State::Exhausted;
                None
            }
        }
    }
}

impl<T: Clone> FusedIterator for Permutations<T> {}

/// The number of permutations of `n` values, if it fits in a `usize`.
pub(crate) fn factorial(n: usize) -> Option<usize> {
    (2..=n).try_fold(1_usize, |acc, i| acc.checked_mul(i))
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashSet;

    fn collect(values: &[i32]) -> (usize, HashSet<Vec<i32>>) {
        let mut count = 0;
        let mut got = HashSet::new();
        for p in Permutations::new(values) {
            count += 1;
            got.insert(p);
        }
        (count, got)
    }

    #[test]
    fn check_empty() {
        let (count, got) = collect(&[]);
        assert_eq!(count, 0);
        assert!(got.is_empty());
    }

    #[test]
    fn check_1() {
        let (count, got) = collect(&[1]);
        assert_eq!(count, 1);
        assert_eq!(got, [vec![1]].into_iter().collect());
    }

    #[test]
    fn check_12() {
        let (count, got) = collect(&[1, 2]);
        assert_eq!(count, 2);
        assert_eq!(got, [vec![1, 2], vec![2, 1]].into_iter().collect());
    }

    #[test]
    fn check_123() {
        let exp = [
            vec![1, 2, 3],
            vec![2, 1, 3],
            vec![3, 1, 2],
            vec![1, 3, 2],
            vec![2, 3, 1],
            vec![3, 2, 1],
        ]
        .into_iter()
        .collect::<HashSet<_>>();
        let (count, got) = collect(&[1, 2, 3]);
        assert_eq!(count, 6);
        assert_eq!(got, exp);
    }

    #[test]
    fn check_larger() {
        for n in 4..=7 {
            let values: Vec<i32> = (0..n).collect();
            let (count, got) = collect(&values);
            let expected = factorial(n as usize).unwrap();
            // no duplicate, and nothing missing
            assert_eq!(count, expected);
            assert_eq!(got.len(), expected);
        }
    }

    #[test]
    fn first_is_input() {
        let values = ["x", "y", "z"];
        let mut perms = Permutations::new(&values);
        assert_eq!(perms.next(), Some(vec!["x", "y", "z"]));
        assert_eq!(values, ["x", "y", "z"]);
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut perms = Permutations::new(&[1, 2]);
        assert!(perms.next().is_some());
        assert!(perms.next().is_some());
        assert!(perms.next().is_none());
        assert!(perms.next().is_none());

        let mut perms = Permutations::<u8>::new(&[]);
        assert!(perms.next().is_none());
        assert!(perms.next().is_none());
    }

    #[test]
    fn factorials() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(1), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(100), None);
    }
}
