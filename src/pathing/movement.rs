use crate::creep::UnitId;
use crate::position::*;
use bitflags::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of advancing a goal or issuing a command.
///
/// Variants are declared from best to worst and the derived ordering is the
/// severity order used when results are aggregated, so `worst` is simply `max`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveResult {
    #[default]
    Success,
    /// Blocked this tick (fatigue, cooldown, a convoy gathering stragglers). Resolves by itself.
    MustWait,
    /// No live or movable actor behind the goal. Safe to ignore.
    NoCapableActor,
    /// The goal was built wrong (empty combinator, mismatched builder input).
    InvalidConfiguration,
}

impl MoveResult {
    pub fn is_success(self) -> bool {
        self == MoveResult::Success
    }

    /// The more severe of two results.
    pub fn worst(self, other: MoveResult) -> MoveResult {
        self.max(other)
    }
}

impl fmt::Display for MoveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveResult::Success => "success",
            MoveResult::MustWait => "must-wait",
            MoveResult::NoCapableActor => "no-capable-actor",
            MoveResult::InvalidConfiguration => "invalid-configuration",
        };

        f.write_str(name)
    }
}

/// Estimated cheapness of a goal, lower is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cost(pub u32);

impl Cost {
    pub const INFEASIBLE: Cost = Cost(u32::MAX);
    pub const ZERO: Cost = Cost(0);

    /// Finite cost. Values that would collide with the sentinel saturate just below it.
    pub fn finite(value: u32) -> Cost {
        Cost(value.min(u32::MAX - 1))
    }

    pub fn is_feasible(self) -> bool {
        self != Cost::INFEASIBLE
    }

    pub fn value(self) -> Option<u32> {
        if self.is_feasible() {
            Some(self.0)
        } else {
            None
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("infeasible"),
        }
    }
}

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct MoveOptions: u8 {
        /// Estimate cost with the path oracle instead of straight grid range.
        const COST_BY_PATH = 1;
        /// Treat the tail of a convoy as its locomotive.
        const BACKWARDS    = 1 << 1;
    }
}

impl MoveOptions {
    pub fn with(self, flags: MoveOptions, on: bool) -> MoveOptions {
        let mut options = self;
        options.set(flags, on);
        options
    }
}

/// Movement oracle provided by the host. Commands are final for the tick they are issued in.
pub trait MovementOracle {
    /// Path-seeking move of a unit toward `target`.
    fn move_to(&mut self, creep: UnitId, target: Position, options: MoveOptions) -> MoveResult;

    /// Direct single step, no path finding.
    fn move_direction(&mut self, creep: UnitId, direction: Direction) -> MoveResult;

    /// Exact path cost in plain-tile steps, `None` when there is no path.
    fn path_cost(&self, from: Position, to: Position) -> Option<u32>;
}

/// Cost from `from` to `to` with the estimate requested by `options`.
pub fn estimate_cost<O: MovementOracle + ?Sized>(oracle: &O, from: Position, to: Position, options: MoveOptions) -> Cost {
    if options.contains(MoveOptions::COST_BY_PATH) {
        oracle.path_cost(from, to).map(Cost::finite).unwrap_or(Cost::INFEASIBLE)
    } else {
        Cost::finite(from.get_range_to(to))
    }
}
