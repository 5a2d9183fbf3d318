use crate::position::*;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;

/// Metric value of a pairing that must never become a goal.
pub const COST_NO_ASSIGN: i64 = 100_000;

/// Minimum cost matching of every actor to a distinct target.
///
/// Returns, for each actor in order, the index of its target. Needs at least as many
/// targets as actors.
pub fn assign_to_targets<A, T, F>(actors: &[A], targets: &[T], metric: F) -> Vec<usize>
where
    F: Fn(&A, &T) -> i64,
{
    if actors.is_empty() || targets.len() < actors.len() {
        return Vec::new();
    }

    let weights = Matrix::from_fn(actors.len(), targets.len(), |(actor, target)| metric(&actors[actor], &targets[target]));

    let (_, assignments) = kuhn_munkres_min(&weights);

    assignments
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssignmentActor {
    pub pos: Position,
    /// Ticks before the actor can start moving.
    pub delay: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssignmentTarget {
    pub pos: Position,
    /// Ticks before the target disappears.
    pub lifetime: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    pub actor: usize,
    pub target: usize,
}

/// Grid range from actor to target, or `None` when the actor would arrive after the
/// target decays (less the safety margin).
pub fn feasible_range(actor: &AssignmentActor, target: &AssignmentTarget, safety_margin: i32) -> Option<u32> {
    let range = actor.pos.get_range_to(target.pos);
    let arrival = range as i64 + actor.delay as i64;

    if arrival > target.lifetime as i64 - safety_margin as i64 {
        None
    } else {
        Some(range)
    }
}

/// Spreads actors over decaying targets. Targets are repeated cyclically when there are
/// more actors than targets. Pairings that cannot be reached in time are dropped, so an
/// actor may end up without a target. Target indices refer to `targets`.
pub fn allocate(actors: &[AssignmentActor], targets: &[AssignmentTarget], safety_margin: i32) -> Vec<Assignment> {
    if actors.is_empty() || targets.is_empty() {
        return Vec::new();
    }

    let expanded: Vec<(usize, &AssignmentTarget)> = targets.iter().enumerate().cycle().take(targets.len().max(actors.len())).collect();

    let assignments = assign_to_targets(actors, &expanded, |actor, (_, target)| {
        feasible_range(actor, target, safety_margin).map(|range| range as i64).unwrap_or(COST_NO_ASSIGN)
    });

    // The matcher pairs everyone, even at the sentinel cost.
    assignments
        .into_iter()
        .enumerate()
        .filter(|(actor, target)| feasible_range(&actors[*actor], expanded[*target].1, safety_margin).is_some())
        .map(|(actor, target)| Assignment {
            actor,
            target: expanded[target].0,
        })
        .collect()
}
