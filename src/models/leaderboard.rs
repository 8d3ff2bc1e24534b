//! Leaderboard model
//!
//! A min-priority queue of [`ResultRun`]s. Insertion order does not matter;
//! extraction yields the fastest remaining run first.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{RankedRow, ResultRun};

/// Min-heap of race results keyed by elapsed time
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    heap: BinaryHeap<Reverse<ResultRun>>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, run: ResultRun) {
        self.heap.push(Reverse(run));
    }

    /// Remove and return the fastest remaining run
    pub fn pop_fastest(&mut self) -> Option<ResultRun> {
        self.heap.pop().map(|Reverse(run)| run)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drain the leaderboard in ascending order, assigning places from 1
    pub fn into_ranked_rows(mut self) -> Vec<RankedRow> {
        let mut rows = Vec::with_capacity(self.len());
        while let Some(run) = self.pop_fastest() {
            rows.push(RankedRow::new(rows.len() + 1, run));
        }
        rows
    }
}
