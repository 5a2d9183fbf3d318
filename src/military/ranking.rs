use super::damage::*;
use crate::constants::*;
use crate::creep::*;
use crate::snapshot::*;
use itertools::Itertools;

/// Creep a tower should act on this tick. Friendly creeps are healed, enemies attacked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TowerTarget {
    pub creep: UnitId,
    pub heal: bool,
    pub power: u32,
}

/// Picks the tower target among the creeps of the snapshot.
pub trait TargetRanking {
    fn rank(&self, tower: &Tower, snapshot: &WorldSnapshot, ledger: &HitsLedger) -> Option<TowerTarget>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct TowerScore {
    creep: UnitId,
    heal: bool,
    range: u32,
    score: f32,
    power: u32,
}

impl TowerScore {
    fn new(tower: &Tower, creep: &Creep) -> TowerScore {
        let range = tower.pos.get_range_to(creep.pos);
        let heal = creep.my == tower.my;

        let (score, power) = if range > TOWER_RANGE {
            (0.0, 0)
        } else {
            let value_at_optimal = if heal { creep.hurt_value() } else { creep.active_value() };
            let power = if heal { tower_heal_at_range(range) } else { tower_attack_at_range(range) };

            (tower_power(value_at_optimal, range), power)
        };

        TowerScore {
            creep: creep.id,
            heal,
            range,
            score,
            power,
        }
    }
}

/// Ranks by the spawn value a single shot restores or destroys, considering only creeps
/// within twice the optimal range of the tower.
#[derive(Clone, Copy, Debug)]
pub struct ValueRanking {
    pub max_range: u32,
}

impl Default for ValueRanking {
    fn default() -> ValueRanking {
        ValueRanking {
            max_range: TOWER_OPTIMAL_RANGE * 2,
        }
    }
}

impl TargetRanking for ValueRanking {
    fn rank(&self, tower: &Tower, snapshot: &WorldSnapshot, ledger: &HitsLedger) -> Option<TowerTarget> {
        snapshot
            .creeps()
            .iter()
            .filter(|creep| creep.is_operational())
            .filter(|creep| if creep.my == tower.my { ledger.not_max_hits(creep) } else { ledger.not_zero_hits(creep) })
            .map(|creep| TowerScore::new(tower, creep))
            .filter(|score| score.range <= self.max_range)
            .sorted_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal))
            .next()
            .map(|score| TowerTarget {
                creep: score.creep,
                heal: score.heal,
                power: score.power,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::*;

    fn tower_at(pos: Position) -> Tower {
        Tower {
            id: StructureId(1),
            pos,
            my: true,
            hits: None,
            cooldown: 0,
            energy: TOWER_CAPACITY,
            energy_capacity: TOWER_CAPACITY,
        }
    }

    #[test]
    fn prefers_the_most_valuable_enemy() {
        let tower = tower_at(Position::new(10, 10));
        let cheap = Creep::new(UnitId(1), Position::new(12, 10), false, &[Part::Move, Part::Tough]);
        let expensive = Creep::new(UnitId(2), Position::new(13, 10), false, &[Part::Move, Part::Heal]);

        let snapshot = WorldSnapshot::new(1, vec![cheap, expensive], vec![tower.clone()], Vec::new(), Vec::new());

        let target = ValueRanking::default().rank(&tower, &snapshot, &HitsLedger::new());

        assert_eq!(
            target,
            Some(TowerTarget {
                creep: UnitId(2),
                heal: false,
                power: TOWER_POWER_ATTACK
            })
        );
    }

    #[test]
    fn heals_hurt_friends_and_skips_healthy_ones() {
        let tower = tower_at(Position::new(10, 10));
        let healthy = Creep::new(UnitId(1), Position::new(11, 10), true, &[Part::Heal]);
        let mut hurt = Creep::new(UnitId(2), Position::new(11, 11), true, &[Part::Move, Part::Attack]);
        hurt.body[1].hits = 20;
        hurt.hits = 120;

        let snapshot = WorldSnapshot::new(1, vec![healthy, hurt], vec![tower.clone()], Vec::new(), Vec::new());

        let target = ValueRanking::default().rank(&tower, &snapshot, &HitsLedger::new());
        assert_eq!(target.map(|target| (target.creep, target.heal)), Some((UnitId(2), true)));

        let mut ledger = HitsLedger::new();
        ledger.register_heal(UnitId(2), 80);
        assert_eq!(ValueRanking::default().rank(&tower, &snapshot, &ledger), None);
    }

    #[test]
    fn ignores_creeps_out_of_reach() {
        let tower = tower_at(Position::new(10, 10));
        let far = Creep::new(UnitId(1), Position::new(30, 10), false, &[Part::Attack]);

        let snapshot = WorldSnapshot::new(1, vec![far], vec![tower.clone()], Vec::new(), Vec::new());

        assert_eq!(ValueRanking::default().rank(&tower, &snapshot, &HitsLedger::new()), None);
    }
}
