use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::maze::Position;

/// The set of discovered but not yet expanded cells, ordered per strategy.
///
/// The ordering discipline is the only thing that differs between the four
/// solvers; everything else lives in the shared engine.
pub(super) trait Frontier: Default {
    /// Whether a strictly cheaper rediscovery of a cell re-enters the
    /// frontier. Cost-ordered frontiers relax; FIFO and LIFO frontiers visit
    /// each cell once, since uniform step costs make the first visit final.
    const RELAXES: bool;

    /// Adds a cell with the priority its strategy ordered it by. FIFO and
    /// LIFO frontiers ignore the priority.
    fn push(&mut self, pos: Position, priority: u64);

    /// Removes and returns the best cell under this frontier's ordering.
    fn pop_best(&mut self) -> Option<Position>;

    fn is_empty(&self) -> bool;
}

/// First-in, first-out: breadth-first expansion, ties broken by insertion
/// order.
#[derive(Default)]
pub(super) struct FifoFrontier(VecDeque<Position>);

impl Frontier for FifoFrontier {
    const RELAXES: bool = false;

    fn push(&mut self, pos: Position, _priority: u64) {
        self.0.push_back(pos);
    }

    fn pop_best(&mut self) -> Option<Position> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Last-in, first-out: depth-first expansion, last-expanded cell first.
#[derive(Default)]
pub(super) struct LifoFrontier(Vec<Position>);

impl Frontier for LifoFrontier {
    const RELAXES: bool = false;

    fn push(&mut self, pos: Position, _priority: u64) {
        self.0.push(pos);
    }

    fn pop_best(&mut self) -> Option<Position> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Min-priority ordering for uniform-cost and A* search.
///
/// Equal priorities pop in insertion order: each entry carries a sequence
/// number, so the heap's tie-break is deterministic instead of leaning on the
/// position tuple's ordering.
#[derive(Default)]
pub(super) struct CostFrontier {
    heap: BinaryHeap<Reverse<(u64, u64, Position)>>,
    next_seq: u64,
}

impl Frontier for CostFrontier {
    const RELAXES: bool = true;

    fn push(&mut self, pos: Position, priority: u64) {
        self.heap.push(Reverse((priority, self.next_seq, pos)));
        self.next_seq += 1;
    }

    fn pop_best(&mut self) -> Option<Position> {
        self.heap.pop().map(|Reverse((_, _, pos))| pos)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_pops_in_insertion_order() {
        let mut frontier = FifoFrontier::default();
        assert!(frontier.is_empty());
        frontier.push((0, 0), 0);
        frontier.push((0, 1), 0);
        frontier.push((0, 2), 0);
        assert_eq!(frontier.pop_best(), Some((0, 0)));
        assert_eq!(frontier.pop_best(), Some((0, 1)));
        assert_eq!(frontier.pop_best(), Some((0, 2)));
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop_best(), None);
    }

    #[test]
    fn test_lifo_pops_latest_first() {
        let mut frontier = LifoFrontier::default();
        frontier.push((0, 0), 0);
        frontier.push((0, 1), 0);
        assert_eq!(frontier.pop_best(), Some((0, 1)));
        assert_eq!(frontier.pop_best(), Some((0, 0)));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_cost_frontier_orders_by_priority_then_insertion() {
        let mut frontier = CostFrontier::default();
        frontier.push((5, 5), 3);
        frontier.push((1, 1), 1);
        frontier.push((2, 2), 3);
        frontier.push((9, 9), 2);
        assert_eq!(frontier.pop_best(), Some((1, 1)));
        assert_eq!(frontier.pop_best(), Some((9, 9)));
        // Equal priority resolves to the earlier insertion, regardless of
        // how the positions themselves compare.
        assert_eq!(frontier.pop_best(), Some((5, 5)));
        assert_eq!(frontier.pop_best(), Some((2, 2)));
        assert!(frontier.is_empty());
    }
}
