//! The aggregator (spec.md §4.8): a deterministic set of 1-based source
//! lines found unreachable on at least one evaluated path. Insertion is
//! idempotent, union merges two evaluators' findings at a branch join,
//! and the final output is always sorted ascending.

use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnreachableSet(BTreeSet<usize>);

impl UnreachableSet {
    pub fn new() -> Self {
        UnreachableSet(BTreeSet::new())
    }

    pub fn insert(&mut self, line: usize) {
        self.0.insert(line);
    }

    pub fn union_with(&mut self, other: &UnreachableSet) {
        self.0.extend(other.0.iter().copied());
    }

    pub fn into_sorted_vec(self) -> Vec<usize> {
        self.0.into_iter().collect()
    }
}
