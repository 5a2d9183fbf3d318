pub mod assignment;
pub mod bodypart;
pub mod combinators;
pub mod creepline;
pub mod creepposition;
pub mod tower;

pub use self::bodypart::*;
pub use self::combinators::*;
pub use self::creepline::*;
pub use self::creepposition::*;
pub use self::tower::*;

use crate::pathing::movement::*;
use crate::snapshot::*;
use log::*;
use shrinkwraprs::*;

/// Behaviour shared by every goal.
///
/// `cost` and `valid` never issue commands. `advance` may issue at most one command per
/// unit it controls.
pub trait Objective {
    fn describe(&self) -> String;

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult;

    fn valid(&self, ctx: &TickContext) -> bool;

    fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost;
}

#[derive(Clone, Debug, PartialEq)]
pub enum Goal {
    CreepPosition(CreepPositionGoal),
    Line(LinePositionGoal),
    Tower(TowerGoal),
    BodyPart(BodyPartGoal),
    And(AndGoal),
    Or(OrGoal),
}

impl Goal {
    pub fn as_objective(&self) -> &dyn Objective {
        match self {
            Goal::CreepPosition(ref data) => data,
            Goal::Line(ref data) => data,
            Goal::Tower(ref data) => data,
            Goal::BodyPart(ref data) => data,
            Goal::And(ref data) => data,
            Goal::Or(ref data) => data,
        }
    }

    pub fn as_objective_mut(&mut self) -> &mut dyn Objective {
        match self {
            Goal::CreepPosition(ref mut data) => data,
            Goal::Line(ref mut data) => data,
            Goal::Tower(ref mut data) => data,
            Goal::BodyPart(ref mut data) => data,
            Goal::And(ref mut data) => data,
            Goal::Or(ref mut data) => data,
        }
    }

    pub fn describe(&self) -> String {
        self.as_objective().describe()
    }

    pub fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        self.as_objective_mut().advance(ctx, options)
    }

    pub fn valid(&self, ctx: &TickContext) -> bool {
        self.as_objective().valid(ctx)
    }

    pub fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost {
        self.as_objective().cost(ctx, options)
    }
}

impl From<CreepPositionGoal> for Goal {
    fn from(goal: CreepPositionGoal) -> Goal {
        Goal::CreepPosition(goal)
    }
}

impl From<LinePositionGoal> for Goal {
    fn from(goal: LinePositionGoal) -> Goal {
        Goal::Line(goal)
    }
}

impl From<TowerGoal> for Goal {
    fn from(goal: TowerGoal) -> Goal {
        Goal::Tower(goal)
    }
}

impl From<BodyPartGoal> for Goal {
    fn from(goal: BodyPartGoal) -> Goal {
        Goal::BodyPart(goal)
    }
}

impl From<AndGoal> for Goal {
    fn from(goal: AndGoal) -> Goal {
        Goal::And(goal)
    }
}

impl From<OrGoal> for Goal {
    fn from(goal: OrGoal) -> Goal {
        Goal::Or(goal)
    }
}

/// Goals advanced together for one posture.
#[derive(Shrinkwrap, Clone, Debug, Default, PartialEq)]
#[shrinkwrap(mutable)]
pub struct GoalList(pub Vec<Goal>);

impl GoalList {
    pub fn new() -> GoalList {
        GoalList::default()
    }

    /// Advances every goal in order. A misconfigured goal skips the rest of the list for
    /// this tick.
    pub fn advance(&mut self, name: &str, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        let mut result = MoveResult::Success;

        for goal in self.0.iter_mut() {
            let goal_result = goal.advance(ctx, options);

            if goal_result == MoveResult::InvalidConfiguration {
                error!("Goal list {} skipped after misconfigured goal: {}", name, goal.describe());

                return goal_result;
            }

            result = result.worst(goal_result);
        }

        result
    }
}

impl From<Vec<Goal>> for GoalList {
    fn from(goals: Vec<Goal>) -> GoalList {
        GoalList(goals)
    }
}
