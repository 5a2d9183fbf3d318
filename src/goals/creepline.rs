use super::*;
use crate::creep::*;
use crate::position::*;
use log::*;

/// Ordered chain of creeps moving as one actor, head at index 0.
///
/// The locomotive is the head, or the tail when moving `BACKWARDS`. Every other creep
/// chases the creep in front of it, so the chain keeps its shape while the locomotive
/// path-finds. The chain only ever shrinks as creeps die.
#[derive(Clone, Debug, PartialEq)]
pub struct CreepLine {
    creeps: Vec<UnitId>,
}

impl CreepLine {
    pub fn new(creeps: Vec<UnitId>) -> CreepLine {
        CreepLine { creeps }
    }

    pub fn creeps(&self) -> &[UnitId] {
        &self.creeps
    }

    pub fn len(&self) -> usize {
        self.creeps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creeps.is_empty()
    }

    pub fn valid(&self, snapshot: &WorldSnapshot) -> bool {
        self.creeps.iter().any(|id| snapshot.is_operational(*id))
    }

    /// Chain index of the n-th creep counted from the locomotive end.
    fn loco_to_wagon_index(&self, n: usize, options: MoveOptions) -> usize {
        if options.contains(MoveOptions::BACKWARDS) {
            self.creeps.len() - 1 - n
        } else {
            n
        }
    }

    /// Chain index of the n-th creep counted from the trailing end.
    fn wagon_to_loco_index(&self, n: usize, options: MoveOptions) -> usize {
        if options.contains(MoveOptions::BACKWARDS) {
            n
        } else {
            self.creeps.len() - 1 - n
        }
    }

    /// First operational creep counted from the locomotive end.
    pub fn locomotive<'s>(&self, snapshot: &'s WorldSnapshot, options: MoveOptions) -> Option<&'s Creep> {
        (0..self.creeps.len())
            .map(|n| self.creeps[self.loco_to_wagon_index(n, options)])
            .find_map(|id| snapshot.operational_creep(id))
    }

    /// Drops creeps that are gone and reports whether the chain can move this tick.
    pub fn refresh(&mut self, snapshot: &WorldSnapshot) -> MoveResult {
        self.creeps.retain(|id| snapshot.is_operational(*id));

        if self.creeps.is_empty() {
            return MoveResult::NoCapableActor;
        }

        for creep in self.creeps.iter().filter_map(|id| snapshot.operational_creep(*id)) {
            if creep.fatigue > 0 {
                return MoveResult::MustWait;
            }

            if !creep.has_active_part(Part::Move) {
                return MoveResult::NoCapableActor;
            }
        }

        MoveResult::Success
    }

    pub fn cost(&self, ctx: &TickContext, target: Position, options: MoveOptions) -> Cost {
        self.locomotive(ctx.snapshot, options)
            .map(|loco| ctx.estimate_cost(loco.pos, target, options))
            .unwrap_or(Cost::INFEASIBLE)
    }

    /// Pulls every wagon up behind the locomotive. Returns the locomotive once the chain is
    /// tight, or the result to report while stragglers catch up.
    fn chase_locomotive(&mut self, ctx: &mut TickContext, options: MoveOptions) -> Result<UnitId, MoveResult> {
        let state = self.refresh(ctx.snapshot);
        if !state.is_success() {
            return Err(state);
        }

        if self.creeps.len() == 1 {
            return Ok(self.creeps[0]);
        }

        for n in 0..self.creeps.len() - 1 {
            let current_id = self.creeps[self.wagon_to_loco_index(n, options)];
            let next_id = self.creeps[self.wagon_to_loco_index(n + 1, options)];

            let (current, next) = match (ctx.snapshot.creep(current_id), ctx.snapshot.creep(next_id)) {
                (Some(current), Some(next)) => (current, next),
                _ => return Err(MoveResult::NoCapableActor),
            };

            match current.pos.get_range_to(next.pos) {
                0 => {}
                1 => {
                    if let Some(direction) = current.pos.get_direction_to(next.pos) {
                        ctx.actuator.move_direction(current_id, direction);
                    }
                }
                range => {
                    debug!("Convoy wagon {} is {} behind {}, waiting", current_id, range, next_id);

                    ctx.actuator.move_to(current_id, next.pos, options);

                    return Err(MoveResult::MustWait);
                }
            }
        }

        Ok(self.creeps[self.loco_to_wagon_index(0, options)])
    }

    pub fn move_to(&mut self, ctx: &mut TickContext, target: Position, options: MoveOptions) -> MoveResult {
        let loco = match self.chase_locomotive(ctx, options) {
            Ok(loco) => loco,
            Err(result) => return result,
        };

        let on_target = ctx.snapshot.creep(loco).map(|creep| creep.pos.is_equal_to(target)).unwrap_or(false);
        if on_target {
            return MoveResult::Success;
        }

        ctx.actuator.move_to(loco, target, options)
    }

    pub fn move_direction(&mut self, ctx: &mut TickContext, direction: Direction, options: MoveOptions) -> MoveResult {
        match self.chase_locomotive(ctx, options) {
            Ok(loco) => ctx.actuator.move_direction(loco, direction),
            Err(result) => result,
        }
    }
}

/// Orientation memory of a convoy that may swap which end leads.
///
/// At an eligible tick the cheaper end by path cost wins, ties keep the current
/// orientation. A flip locks the orientation for a window proportional to the chain
/// length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReversalLatch {
    backwards: bool,
    can_reverse_tick: u32,
}

impl ReversalLatch {
    pub fn new() -> ReversalLatch {
        ReversalLatch::default()
    }

    pub fn is_backwards(&self) -> bool {
        self.backwards
    }

    pub fn can_reverse_tick(&self) -> u32 {
        self.can_reverse_tick
    }

    pub fn is_eligible(&self, tick: u32) -> bool {
        tick >= self.can_reverse_tick
    }

    fn directional_cost(line: &CreepLine, ctx: &TickContext, target: Position, options: MoveOptions, backwards: bool) -> Cost {
        line.cost(ctx, target, options.with(MoveOptions::BACKWARDS, backwards))
    }

    /// Re-evaluates the orientation when eligible and returns the options to move with.
    pub fn orient(&mut self, line: &CreepLine, ctx: &TickContext, target: Position, options: MoveOptions) -> MoveOptions {
        let tick = ctx.tick();

        if self.is_eligible(tick) {
            let by_path = options | MoveOptions::COST_BY_PATH;

            let forwards = Self::directional_cost(line, ctx, target, by_path, false);
            let backwards = Self::directional_cost(line, ctx, target, by_path, true);

            let wants_backwards = if forwards > backwards {
                true
            } else if forwards < backwards {
                false
            } else {
                self.backwards
            };

            if wants_backwards != self.backwards {
                self.backwards = wants_backwards;
                self.can_reverse_tick = tick + ctx.settings.reverse_cooldown_per_unit * line.len() as u32;

                debug!(
                    "Convoy reversed to {} until tick {}",
                    if wants_backwards { "tail first" } else { "head first" },
                    self.can_reverse_tick
                );
            }
        }

        options.with(MoveOptions::BACKWARDS, self.backwards)
    }

    pub fn cost(&self, line: &CreepLine, ctx: &TickContext, target: Position, options: MoveOptions) -> Cost {
        if self.is_eligible(ctx.tick()) {
            Self::directional_cost(line, ctx, target, options, false).min(Self::directional_cost(line, ctx, target, options, true))
        } else {
            Self::directional_cost(line, ctx, target, options, self.backwards)
        }
    }
}

/// Moves a convoy to a tile, optionally letting the convoy reverse.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePositionGoal {
    pub line: CreepLine,
    pub position: Position,
    pub reversal: Option<ReversalLatch>,
}

impl LinePositionGoal {
    pub fn new(line: CreepLine, position: Position) -> LinePositionGoal {
        LinePositionGoal {
            line,
            position,
            reversal: None,
        }
    }

    pub fn with_auto_reverse(line: CreepLine, position: Position) -> LinePositionGoal {
        LinePositionGoal {
            line,
            position,
            reversal: Some(ReversalLatch::new()),
        }
    }
}

impl Objective for LinePositionGoal {
    fn describe(&self) -> String {
        format!("convoy of {} to {}", self.line.len(), self.position)
    }

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        let options = match self.reversal.as_mut() {
            Some(latch) => latch.orient(&self.line, ctx, self.position, options),
            None => options,
        };

        self.line.move_to(ctx, self.position, options)
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        self.line.valid(ctx.snapshot)
    }

    fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost {
        match self.reversal.as_ref() {
            Some(latch) => latch.cost(&self.line, ctx, self.position, options),
            None => self.line.cost(ctx, self.position, options),
        }
    }
}
