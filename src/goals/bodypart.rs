use super::assignment::*;
use super::creepline::*;
use super::creepposition::*;
use super::*;
use crate::creep::*;
use crate::position::*;
use log::*;

/// Sends creeps and convoys after the body parts lying on the ground.
///
/// Nothing is remembered between ticks except the orientation of each convoy; the
/// pairing is recomputed from scratch every tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BodyPartGoal {
    creeps: Vec<UnitId>,
    convoys: Vec<LinePositionGoal>,
}

impl BodyPartGoal {
    pub fn new() -> BodyPartGoal {
        BodyPartGoal::default()
    }

    pub fn add_creep(&mut self, creep: UnitId) {
        self.creeps.push(creep);
    }

    pub fn add_creep_line(&mut self, line: CreepLine) {
        self.convoys.push(LinePositionGoal::with_auto_reverse(line, Position::default()));
    }

    pub fn creeps(&self) -> &[UnitId] {
        &self.creeps
    }

    fn plan_group(creeps: &[&Creep], parts: &[&DroppedPart], safety_margin: i32) -> Vec<CreepPositionGoal> {
        let actors: Vec<AssignmentActor> = creeps
            .iter()
            .map(|creep| AssignmentActor {
                pos: creep.pos,
                delay: creep.fatigue,
            })
            .collect();

        let targets: Vec<AssignmentTarget> = parts
            .iter()
            .map(|part| AssignmentTarget {
                pos: part.pos,
                lifetime: part.ticks_to_decay,
            })
            .collect();

        allocate(&actors, &targets, safety_margin)
            .into_iter()
            .map(|assignment| CreepPositionGoal::new(creeps[assignment.actor].id, parts[assignment.target].pos))
            .collect()
    }

    fn advance_convoys(&mut self, ctx: &mut TickContext, parts: &[&DroppedPart], options: MoveOptions) -> MoveResult {
        let snapshot = ctx.snapshot;

        let actors: Vec<(usize, AssignmentActor)> = self
            .convoys
            .iter()
            .enumerate()
            .filter_map(|(index, convoy)| {
                convoy.line.locomotive(snapshot, MoveOptions::empty()).map(|loco| {
                    (
                        index,
                        AssignmentActor {
                            pos: loco.pos,
                            delay: loco.fatigue,
                        },
                    )
                })
            })
            .collect();

        let targets: Vec<AssignmentTarget> = parts
            .iter()
            .map(|part| AssignmentTarget {
                pos: part.pos,
                lifetime: part.ticks_to_decay,
            })
            .collect();

        let just_actors: Vec<AssignmentActor> = actors.iter().map(|(_, actor)| *actor).collect();

        let mut result = MoveResult::Success;

        for assignment in allocate(&just_actors, &targets, ctx.settings.pickup_safety_margin) {
            let convoy = &mut self.convoys[actors[assignment.actor].0];
            convoy.position = parts[assignment.target].pos;

            result = result.worst(convoy.advance(ctx, options));
        }

        result
    }

    fn advance_creeps(&mut self, ctx: &mut TickContext, parts: &[&DroppedPart], options: MoveOptions) -> MoveResult {
        let snapshot = ctx.snapshot;
        let safety_margin = ctx.settings.pickup_safety_margin;

        let creeps: Vec<&Creep> = self.creeps.iter().filter_map(|id| snapshot.operational_creep(*id)).collect();

        let parts_of = |part: Part| parts.iter().filter(|dropped| dropped.part == part).copied().collect::<Vec<_>>();
        let carriers_of = |part: Part| creeps.iter().filter(|creep| creep.has_part(part)).copied().collect::<Vec<_>>();
        let lacking_move: Vec<&Creep> = creeps.iter().filter(|creep| creep.lacks_move()).copied().collect();

        // Later sweeps take precedence for a creep that was already planned.
        let sweeps = [
            Self::plan_group(&creeps, &parts_of(Part::Tough), safety_margin),
            Self::plan_group(&creeps, &parts_of(Part::Move), safety_margin),
            Self::plan_group(&carriers_of(Part::Attack), &parts_of(Part::Attack), safety_margin),
            Self::plan_group(&carriers_of(Part::RangedAttack), &parts_of(Part::RangedAttack), safety_margin),
            Self::plan_group(&carriers_of(Part::Heal), &parts_of(Part::Heal), safety_margin),
            Self::plan_group(&lacking_move, &parts_of(Part::Move), safety_margin),
        ];

        let mut planned: Vec<CreepPositionGoal> = Vec::new();

        for goal in sweeps.into_iter().flatten() {
            match planned.iter_mut().find(|existing| existing.creep == goal.creep) {
                Some(existing) => *existing = goal,
                None => planned.push(goal),
            }
        }

        let mut result = MoveResult::Success;

        for goal in planned.iter_mut() {
            result = result.worst(goal.advance(ctx, options));
        }

        result
    }
}

impl Objective for BodyPartGoal {
    fn describe(&self) -> String {
        format!("body part sweep of {} creeps and {} convoys", self.creeps.len(), self.convoys.len())
    }

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        let snapshot = ctx.snapshot;

        let parts: Vec<&DroppedPart> = snapshot.dropped_parts().iter().collect();
        if parts.is_empty() {
            return MoveResult::Success;
        }

        self.creeps.retain(|id| snapshot.is_operational(*id));
        self.convoys.retain(|convoy| convoy.line.valid(snapshot));

        if self.creeps.is_empty() && self.convoys.is_empty() {
            return MoveResult::NoCapableActor;
        }

        trace!("Sweeping {} body parts", parts.len());

        let convoys = self.advance_convoys(ctx, &parts, options);
        let creeps = self.advance_creeps(ctx, &parts, options);

        convoys.worst(creeps)
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        self.creeps.iter().any(|id| ctx.snapshot.is_operational(*id)) || self.convoys.iter().any(|convoy| convoy.line.valid(ctx.snapshot))
    }

    /// Too fractal to estimate, a flat half map.
    fn cost(&self, ctx: &TickContext, _options: MoveOptions) -> Cost {
        if self.valid(ctx) {
            Cost::finite(ctx.settings.map_side_size as u32 / 2)
        } else {
            Cost::INFEASIBLE
        }
    }
}
