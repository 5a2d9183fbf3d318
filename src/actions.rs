use crate::creep::*;
use crate::pathing::movement::*;
use bitflags::*;

// Arena action pipelines, a unit may act once per pipeline each tick:
//
// Pipeline A (move):   move, moveTo
// Pipeline B (tower):  attack, heal
//
// Creep combat actions belong to the combat micro and are not modelled here.

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct ActionFlags: u8 {
        const UNSET = 0;

        const MOVE = 1;

        const TOWER_ATTACK = 1 << 1;
        const TOWER_HEAL   = 1 << 1;
    }
}

impl ActionFlags {
    pub fn consume(&mut self, flags: ActionFlags) -> bool {
        if !self.intersects(flags) {
            self.insert(flags);

            true
        } else {
            false
        }
    }
}

/// Static defender commands provided by the host.
pub trait TowerControl {
    fn tower_attack(&mut self, tower: StructureId, target: UnitId) -> MoveResult;

    fn tower_heal(&mut self, tower: StructureId, target: UnitId) -> MoveResult;
}

/// Everything a goal may command during one tick.
pub trait Actuator: MovementOracle + TowerControl {}

impl<T> Actuator for T where T: MovementOracle + TowerControl {}
