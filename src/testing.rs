use crate::actions::*;
use crate::creep::*;
use crate::pathing::movement::*;
use crate::position::*;
use crate::snapshot::*;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    MoveTo(UnitId, Position),
    MoveDirection(UnitId, Direction),
    TowerAttack(StructureId, UnitId),
    TowerHeal(StructureId, UnitId),
}

/// Actuator that records every command and answers path queries from a table,
/// falling back to grid range.
#[derive(Default)]
pub struct RecordingActuator {
    pub commands: Vec<Command>,
    pub path_costs: HashMap<(Position, Position), u32>,
    pub blocked: Vec<Position>,
}

impl RecordingActuator {
    pub fn new() -> RecordingActuator {
        RecordingActuator::default()
    }

    pub fn moved(&self) -> Vec<UnitId> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                Command::MoveTo(creep, _) | Command::MoveDirection(creep, _) => Some(*creep),
                _ => None,
            })
            .collect()
    }
}

impl MovementOracle for RecordingActuator {
    fn move_to(&mut self, creep: UnitId, target: Position, _options: MoveOptions) -> MoveResult {
        self.commands.push(Command::MoveTo(creep, target));
        MoveResult::Success
    }

    fn move_direction(&mut self, creep: UnitId, direction: Direction) -> MoveResult {
        self.commands.push(Command::MoveDirection(creep, direction));
        MoveResult::Success
    }

    fn path_cost(&self, from: Position, to: Position) -> Option<u32> {
        if self.blocked.contains(&to) {
            return None;
        }

        Some(self.path_costs.get(&(from, to)).copied().unwrap_or_else(|| from.get_range_to(to)))
    }
}

impl TowerControl for RecordingActuator {
    fn tower_attack(&mut self, tower: StructureId, target: UnitId) -> MoveResult {
        self.commands.push(Command::TowerAttack(tower, target));
        MoveResult::Success
    }

    fn tower_heal(&mut self, tower: StructureId, target: UnitId) -> MoveResult {
        self.commands.push(Command::TowerHeal(tower, target));
        MoveResult::Success
    }
}

pub fn mover(id: u32, x: i32, y: i32) -> Creep {
    Creep::new(UnitId(id), Position::new(x, y), true, &[Part::Move, Part::Attack])
}

pub fn creeps_snapshot(tick: u32, creeps: Vec<Creep>) -> WorldSnapshot {
    WorldSnapshot::new(tick, creeps, Vec::new(), Vec::new(), Vec::new())
}
