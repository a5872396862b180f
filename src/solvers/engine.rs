use std::collections::HashMap;

use super::Path;
use super::frontier::Frontier;
use crate::maze::{Maze, Position};

/// The shared search loop behind all four solvers.
///
/// The frontier type supplies the expansion order and the heuristic supplies
/// the cost-to-goal estimate; everything else, neighbor expansion, cost
/// accounting, and path reconstruction, is identical across strategies. The
/// `came_from` and `cost_so_far` maps live only for this call.
///
/// The search stops as soon as the goal is popped from the frontier, or
/// returns `None` once the frontier runs dry.
pub(super) fn search<F: Frontier>(
    maze: &Maze,
    start: Position,
    goal: Position,
    heuristic: impl Fn(Position, Position) -> u64,
) -> Option<Path> {
    let mut frontier = F::default();
    let mut came_from: HashMap<Position, Option<Position>> = HashMap::new();
    let mut cost_so_far: HashMap<Position, u64> = HashMap::new();
    came_from.insert(start, None);
    cost_so_far.insert(start, 0);
    frontier.push(start, heuristic(start, goal));

    while !frontier.is_empty() {
        let Some(current) = frontier.pop_best() else {
            break;
        };
        if current == goal {
            break;
        }

        let new_cost = cost_so_far[&current] + 1; // Uniform cost for each step
        for neighbor in maze.neighbors(current) {
            let discovered = if F::RELAXES {
                // Relax: take the neighbor only on a strictly cheaper route.
                cost_so_far
                    .get(&neighbor)
                    .is_none_or(|&best| new_cost < best)
            } else {
                // First visit is final under uniform step costs.
                !came_from.contains_key(&neighbor)
            };
            if discovered {
                cost_so_far.insert(neighbor, new_cost);
                came_from.insert(neighbor, Some(current));
                frontier.push(neighbor, new_cost + heuristic(neighbor, goal));
            }
        }
    }

    reconstruct(&came_from, start, goal)
}

/// Walks the `came_from` chain backward from the goal. Yields `None` when the
/// chain never reaches the start, so a broken chain can not surface as a
/// partial path.
fn reconstruct(
    came_from: &HashMap<Position, Option<Position>>,
    start: Position,
    goal: Position,
) -> Option<Path> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(pos) = current {
        path.push(pos);
        current = came_from.get(&pos).copied().flatten();
    }
    path.reverse();
    (path.first() == Some(&start)).then_some(path)
}
