use crate::core::models::candidate::Candidate;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A scored candidate. Lower scores are better.
#[derive(Debug, Clone)]
pub struct Solution {
    pub candidate: Candidate,
    pub score: f64,
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}
impl Eq for Solution {}

impl PartialOrd for Solution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score.partial_cmp(&other.score)
    }
}

impl Ord for Solution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

// Heap entries are ordered by (score, submission sequence) so that among
// equal-scoring solutions the most recently submitted one sits at the top
// and is the one evicted, preserving first-seen-wins semantics.
#[derive(Debug, Clone)]
struct TrackedSolution {
    solution: Solution,
    seq: usize,
}

impl PartialEq for TrackedSolution {
    fn eq(&self, other: &Self) -> bool {
        self.solution.score == other.solution.score && self.seq == other.seq
    }
}
impl Eq for TrackedSolution {}

impl PartialOrd for TrackedSolution {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TrackedSolution {
    fn cmp(&self, other: &Self) -> Ordering {
        self.solution
            .score
            .partial_cmp(&other.solution.score)
            .unwrap_or(Ordering::Equal)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Retains the `capacity` best-scoring solutions seen so far.
///
/// A submission only displaces the current worst retained solution when its
/// score is strictly lower; ties keep the earlier solution. With a capacity
/// of one this is exactly best-so-far tracking with strict improvement.
#[derive(Debug)]
pub struct BestTracker {
    heap: BinaryHeap<TrackedSolution>,
    capacity: usize,
    submitted: usize,
}

impl BestTracker {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "tracker capacity must be positive");
        Self {
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
            capacity,
            submitted: 0,
        }
    }

    /// Offers a solution; returns true when it was retained.
    pub fn submit(&mut self, solution: Solution) -> bool {
        let seq = self.submitted;
        self.submitted += 1;

        if self.heap.len() < self.capacity {
            self.heap.push(TrackedSolution { solution, seq });
            return true;
        }

        let worst_score = self
            .heap
            .peek()
            .map(|entry| entry.solution.score)
            .unwrap_or(f64::INFINITY);
        if solution.score < worst_score {
            self.heap.pop();
            self.heap.push(TrackedSolution { solution, seq });
            return true;
        }
        false
    }

    /// Score of the best retained solution, or +infinity when none exists.
    pub fn best_score(&self) -> f64 {
        self.heap
            .iter()
            .map(|entry| entry.solution.score)
            .fold(f64::INFINITY, f64::min)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Consumes the tracker, returning solutions sorted best-first; among
    /// equal scores the earlier-seen solution comes first.
    pub fn into_sorted_solutions(self) -> Vec<Solution> {
        let mut entries: Vec<_> = self.heap.into_vec();
        entries.sort_by(|a, b| a.cmp(b));
        entries.into_iter().map(|entry| entry.solution).collect()
    }
}
