use super::map::*;
use crate::actions::*;
use crate::constants::*;
use crate::creep::*;
use crate::pathing::movement::*;
use crate::position::*;
use crate::snapshot::*;
use log::*;
use pathfinding::prelude::astar;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TowerAction {
    pub tower: StructureId,
    pub target: UnitId,
    pub heal: bool,
}

/// Commands accepted during one tick, applied by the arena systems.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intents {
    /// Creep and the adjacent tile it steps onto.
    pub moves: Vec<(UnitId, Position)>,
    pub tower_actions: Vec<TowerAction>,
}

impl Intents {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.tower_actions.is_empty()
    }
}

/// Cheapest path over terrain, optionally treating some tiles as blocked. The goal tile
/// itself is never blocked.
pub fn find_path(map: &ArenaMap, from: Position, to: Position, blocked: &HashSet<Position>) -> Option<(Vec<Position>, u32)> {
    if !map.is_passable(to) {
        return None;
    }

    astar(
        &from,
        |pos| {
            pos.neighbours()
                .filter(|next| next.is_equal_to(to) || !blocked.contains(next))
                .filter_map(|next| map.move_cost(next).map(|cost| (next, cost)))
                .collect::<Vec<_>>()
        },
        |pos| pos.get_range_to(to) * PLAIN_COST,
        |pos| pos.is_equal_to(to),
    )
}

/// Collects commands against a snapshot, enforcing one action per pipeline per unit.
pub struct IntentBuffer<'a> {
    map: &'a ArenaMap,
    snapshot: &'a WorldSnapshot,
    creep_actions: HashMap<UnitId, ActionFlags>,
    tower_actions: HashMap<StructureId, ActionFlags>,
    path_costs: RefCell<HashMap<(Position, Position), Option<u32>>>,
    intents: Intents,
}

impl<'a> IntentBuffer<'a> {
    pub fn new(map: &'a ArenaMap, snapshot: &'a WorldSnapshot) -> IntentBuffer<'a> {
        IntentBuffer {
            map,
            snapshot,
            creep_actions: HashMap::new(),
            tower_actions: HashMap::new(),
            path_costs: RefCell::new(HashMap::new()),
            intents: Intents::default(),
        }
    }

    pub fn intents(&self) -> &Intents {
        &self.intents
    }

    pub fn into_intents(self) -> Intents {
        self.intents
    }

    fn ready_to_move(&self, creep: UnitId) -> Result<&'a Creep, MoveResult> {
        let creep = self.snapshot.operational_creep(creep).ok_or(MoveResult::NoCapableActor)?;

        if !creep.has_active_part(Part::Move) {
            return Err(MoveResult::NoCapableActor);
        }

        if creep.fatigue > 0 {
            return Err(MoveResult::MustWait);
        }

        Ok(creep)
    }

    fn push_move(&mut self, creep: UnitId, destination: Position) -> MoveResult {
        let flags = self.creep_actions.entry(creep).or_insert(ActionFlags::UNSET);

        if !flags.consume(ActionFlags::MOVE) {
            warn!("Second move for {} in one tick ignored", creep);

            return MoveResult::MustWait;
        }

        self.intents.moves.push((creep, destination));

        MoveResult::Success
    }

    fn push_tower_action(&mut self, tower: StructureId, target: UnitId, heal: bool) -> MoveResult {
        let ready = match self.snapshot.tower(tower) {
            Some(state) if state.is_operational() => state.cooldown == 0 && state.energy >= TOWER_ENERGY_COST,
            _ => return MoveResult::NoCapableActor,
        };

        if !ready {
            return MoveResult::MustWait;
        }

        if self.snapshot.operational_creep(target).is_none() {
            return MoveResult::NoCapableActor;
        }

        let pipeline = if heal { ActionFlags::TOWER_HEAL } else { ActionFlags::TOWER_ATTACK };

        if !self.tower_actions.entry(tower).or_insert(ActionFlags::UNSET).consume(pipeline) {
            return MoveResult::MustWait;
        }

        self.intents.tower_actions.push(TowerAction { tower, target, heal });

        MoveResult::Success
    }
}

impl<'a> MovementOracle for IntentBuffer<'a> {
    fn move_to(&mut self, creep: UnitId, target: Position, _options: MoveOptions) -> MoveResult {
        let creep = match self.ready_to_move(creep) {
            Ok(creep) => creep,
            Err(result) => return result,
        };

        if creep.pos.is_equal_to(target) {
            return MoveResult::Success;
        }

        let occupied: HashSet<Position> = self
            .snapshot
            .creeps()
            .iter()
            .filter(|other| other.id != creep.id && other.is_operational())
            .map(|other| other.pos)
            .collect();

        let next = find_path(self.map, creep.pos, target, &occupied)
            .or_else(|| find_path(self.map, creep.pos, target, &HashSet::new()))
            .and_then(|(path, _)| path.get(1).copied());

        match next {
            Some(next) => self.push_move(creep.id, next),
            None => MoveResult::NoCapableActor,
        }
    }

    fn move_direction(&mut self, creep: UnitId, direction: Direction) -> MoveResult {
        match self.ready_to_move(creep) {
            Ok(creep) => self.push_move(creep.id, creep.pos.step(direction)),
            Err(result) => result,
        }
    }

    fn path_cost(&self, from: Position, to: Position) -> Option<u32> {
        if from.is_equal_to(to) {
            return Some(0);
        }

        *self
            .path_costs
            .borrow_mut()
            .entry((from, to))
            .or_insert_with(|| find_path(self.map, from, to, &HashSet::new()).map(|(_, cost)| cost / PLAIN_COST))
    }
}

impl<'a> TowerControl for IntentBuffer<'a> {
    fn tower_attack(&mut self, tower: StructureId, target: UnitId) -> MoveResult {
        self.push_tower_action(tower, target, false)
    }

    fn tower_heal(&mut self, tower: StructureId, target: UnitId) -> MoveResult {
        self.push_tower_action(tower, target, true)
    }
}
