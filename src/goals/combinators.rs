use super::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AndMode {
    /// Advance every sub-goal, valid or not.
    All,
    /// Skip invalid sub-goals, reporting no actor when none was valid.
    Valid,
}

/// Advances all of its sub-goals and reports the worst result.
#[derive(Clone, Debug, PartialEq)]
pub struct AndGoal {
    pub goals: Vec<Goal>,
    pub mode: AndMode,
    /// Stop at the first result worse than `MustWait`.
    pub fail_fast: bool,
}

impl AndGoal {
    pub fn all(goals: Vec<Goal>) -> AndGoal {
        AndGoal {
            goals,
            mode: AndMode::All,
            fail_fast: false,
        }
    }

    pub fn valid_only(goals: Vec<Goal>) -> AndGoal {
        AndGoal {
            goals,
            mode: AndMode::Valid,
            fail_fast: false,
        }
    }

    pub fn fail_fast(self, fail_fast: bool) -> AndGoal {
        AndGoal { fail_fast, ..self }
    }

    fn participates(&self, goal: &Goal, ctx: &TickContext) -> bool {
        self.mode == AndMode::All || goal.valid(ctx)
    }
}

impl Objective for AndGoal {
    fn describe(&self) -> String {
        format!("and[{:?}] of {}", self.mode, self.goals.len())
    }

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        if self.goals.is_empty() {
            return MoveResult::InvalidConfiguration;
        }

        let mode = self.mode;
        let fail_fast = self.fail_fast;

        let mut result = MoveResult::Success;
        let mut advanced = 0;

        for goal in self.goals.iter_mut() {
            if mode == AndMode::Valid && !goal.valid(ctx) {
                continue;
            }

            let goal_result = goal.advance(ctx, options);
            result = result.worst(goal_result);
            advanced += 1;

            if fail_fast && goal_result > MoveResult::MustWait {
                debug!("Stopping and-goal after {}: {}", goal.describe(), goal_result);
                break;
            }
        }

        if advanced == 0 {
            MoveResult::NoCapableActor
        } else {
            result
        }
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        self.goals.iter().any(|goal| goal.valid(ctx))
    }

    /// The most expensive participating sub-goal.
    fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost {
        self.goals
            .iter()
            .filter(|goal| self.participates(goal, ctx))
            .map(|goal| goal.cost(ctx, options))
            .max()
            .unwrap_or(Cost::INFEASIBLE)
    }
}

/// Advances the single cheapest valid sub-goal.
#[derive(Clone, Debug, PartialEq)]
pub struct OrGoal {
    pub goals: Vec<Goal>,
}

impl OrGoal {
    pub fn new(goals: Vec<Goal>) -> OrGoal {
        OrGoal { goals }
    }

    /// Index of the first valid sub-goal with the lowest feasible cost.
    pub fn select(&self, ctx: &TickContext, options: MoveOptions) -> Option<usize> {
        let mut best: Option<(usize, Cost)> = None;

        for (index, goal) in self.goals.iter().enumerate() {
            if !goal.valid(ctx) {
                continue;
            }

            let cost = goal.cost(ctx, options);
            if !cost.is_feasible() {
                continue;
            }

            if best.map(|(_, best_cost)| cost < best_cost).unwrap_or(true) {
                best = Some((index, cost));
            }
        }

        best.map(|(index, _)| index)
    }
}

impl Objective for OrGoal {
    fn describe(&self) -> String {
        format!("or of {}", self.goals.len())
    }

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        if self.goals.is_empty() {
            return MoveResult::InvalidConfiguration;
        }

        match self.select(ctx, options) {
            Some(index) => {
                let goal = &mut self.goals[index];
                trace!("Or-goal picked {}", goal.describe());

                goal.advance(ctx, options)
            }
            None => MoveResult::NoCapableActor,
        }
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        self.goals.iter().any(|goal| goal.valid(ctx))
    }

    fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost {
        self.goals
            .iter()
            .filter(|goal| goal.valid(ctx))
            .map(|goal| goal.cost(ctx, options))
            .min()
            .unwrap_or(Cost::INFEASIBLE)
    }
}
