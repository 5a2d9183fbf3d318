use super::*;
use crate::constants::*;
use crate::creep::*;
use log::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TowerStance {
    /// Heal or attack the best ranked creep in reach.
    Defend,
    /// Hold fire and keep the energy for later.
    Standby,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TowerGoal {
    pub tower: StructureId,
    pub stance: TowerStance,
}

impl TowerGoal {
    pub fn defend(tower: StructureId) -> TowerGoal {
        TowerGoal {
            tower,
            stance: TowerStance::Defend,
        }
    }

    pub fn standby(tower: StructureId) -> TowerGoal {
        TowerGoal {
            tower,
            stance: TowerStance::Standby,
        }
    }
}

impl Objective for TowerGoal {
    fn describe(&self) -> String {
        format!("{} {:?}", self.tower, self.stance)
    }

    fn advance(&mut self, ctx: &mut TickContext, _options: MoveOptions) -> MoveResult {
        let tower = match ctx.snapshot.tower(self.tower).filter(|tower| tower.is_operational()) {
            Some(tower) => tower,
            None => return MoveResult::NoCapableActor,
        };

        if tower.cooldown > 0 || tower.energy < TOWER_ENERGY_COST {
            return MoveResult::MustWait;
        }

        if self.stance == TowerStance::Standby {
            return MoveResult::Success;
        }

        let target = match ctx.ranking.rank(tower, ctx.snapshot, &ctx.hits) {
            Some(target) => target,
            None => return MoveResult::Success,
        };

        debug!(
            "{} {} {} for {}",
            self.tower,
            if target.heal { "heals" } else { "attacks" },
            target.creep,
            target.power
        );

        if target.heal {
            ctx.hits.register_heal(target.creep, target.power);
            ctx.actuator.tower_heal(self.tower, target.creep)
        } else {
            ctx.hits.register_damage(target.creep, target.power);
            ctx.actuator.tower_attack(self.tower, target.creep)
        }
    }

    fn valid(&self, ctx: &TickContext) -> bool {
        ctx.snapshot.tower(self.tower).map(|tower| tower.is_operational()).unwrap_or(false)
    }

    /// A tower that is full and ready is the cheapest to use.
    fn cost(&self, ctx: &TickContext, _options: MoveOptions) -> Cost {
        ctx.snapshot
            .tower(self.tower)
            .filter(|tower| tower.is_operational())
            .map(|tower| Cost::finite(tower.free_capacity() + tower.cooldown))
            .unwrap_or(Cost::INFEASIBLE)
    }
}
