use super::*;
use crate::creep::*;
use crate::position::*;

/// Moves a single creep onto a tile.
#[derive(Clone, Debug, PartialEq)]
pub struct CreepPositionGoal {
    pub creep: UnitId,
    pub position: Position,
}

impl CreepPositionGoal {
    pub fn new(creep: UnitId, position: Position) -> CreepPositionGoal {
        CreepPositionGoal { creep, position }
    }
}

impl Objective for CreepPositionGoal {
    fn describe(&self) -> String {
        format!("{} to {}", self.creep, self.position)
    }

    fn advance(&mut self, ctx: &mut TickContext, options: MoveOptions) -> MoveResult {
        let creep = match ctx.snapshot.operational_creep(self.creep) {
            Some(creep) => creep,
            None => return MoveResult::NoCapableActor,
        };

        if creep.pos.is_equal_to(self.position) {
            return MoveResult::Success;
        }

        ctx.actuator.move_to(self.creep, self.position, options)
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        ctx.snapshot.is_operational(self.creep)
    }

    fn cost(&self, ctx: &TickContext, options: MoveOptions) -> Cost {
        ctx.snapshot
            .operational_creep(self.creep)
            .map(|creep| ctx.estimate_cost(creep.pos, self.position, options))
            .unwrap_or(Cost::INFEASIBLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::military::ranking::*;
    use crate::settings::*;
    use crate::testing::*;

    #[test]
    fn moves_until_on_target() {
        let snapshot = creeps_snapshot(1, vec![mover(1, 5, 5)]);
        let settings = TacticsSettings::default();
        let ranking = ValueRanking::default();
        let mut actuator = RecordingActuator::new();

        let mut goal = CreepPositionGoal::new(UnitId(1), Position::new(8, 9));
        {
            let mut ctx = TickContext::new(&snapshot, &mut actuator, &ranking, &settings);
            assert_eq!(goal.cost(&ctx, MoveOptions::empty()), Cost(4));
            assert_eq!(goal.advance(&mut ctx, MoveOptions::empty()), MoveResult::Success);
        }
        assert_eq!(actuator.commands, vec![Command::MoveTo(UnitId(1), Position::new(8, 9))]);

        let mut arrived = CreepPositionGoal::new(UnitId(1), Position::new(5, 5));
        let mut ctx = TickContext::new(&snapshot, &mut actuator, &ranking, &settings);
        assert_eq!(arrived.advance(&mut ctx, MoveOptions::empty()), MoveResult::Success);
        assert_eq!(arrived.cost(&ctx, MoveOptions::empty()), Cost::ZERO);
    }

    #[test]
    fn missing_creep_has_no_actor() {
        let snapshot = creeps_snapshot(1, Vec::new());
        let settings = TacticsSettings::default();
        let ranking = ValueRanking::default();
        let mut actuator = RecordingActuator::new();
        let mut ctx = TickContext::new(&snapshot, &mut actuator, &ranking, &settings);

        let mut goal = CreepPositionGoal::new(UnitId(1), Position::new(8, 9));

        assert!(!goal.valid(&ctx));
        assert_eq!(goal.cost(&ctx, MoveOptions::empty()), Cost::INFEASIBLE);
        assert_eq!(goal.advance(&mut ctx, MoveOptions::empty()), MoveResult::NoCapableActor);
    }
}
