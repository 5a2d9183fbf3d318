use crate::actions::*;
use crate::creep::*;
use crate::military::ranking::*;
use crate::pathing::movement::*;
use crate::position::*;
use crate::settings::*;
use std::collections::HashMap;

/// Consistent read-only view of the world for one tick. Every collection is sorted by
/// identity so iteration order is deterministic.
#[derive(Clone, Debug, Default)]
pub struct WorldSnapshot {
    tick: u32,
    creeps: Vec<Creep>,
    towers: Vec<Tower>,
    flags: Vec<Flag>,
    dropped_parts: Vec<DroppedPart>,
    creep_index: HashMap<UnitId, usize>,
    tower_index: HashMap<StructureId, usize>,
}

impl WorldSnapshot {
    pub fn new(tick: u32, mut creeps: Vec<Creep>, mut towers: Vec<Tower>, mut flags: Vec<Flag>, mut dropped_parts: Vec<DroppedPart>) -> WorldSnapshot {
        creeps.sort_by_key(|creep| creep.id);
        towers.sort_by_key(|tower| tower.id);
        flags.sort_by_key(|flag| flag.id);
        dropped_parts.sort_by_key(|part| part.id);

        let creep_index = creeps.iter().enumerate().map(|(index, creep)| (creep.id, index)).collect();
        let tower_index = towers.iter().enumerate().map(|(index, tower)| (tower.id, index)).collect();

        WorldSnapshot {
            tick,
            creeps,
            towers,
            flags,
            dropped_parts,
            creep_index,
            tower_index,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn creeps(&self) -> &[Creep] {
        &self.creeps
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub fn dropped_parts(&self) -> &[DroppedPart] {
        &self.dropped_parts
    }

    pub fn creep(&self, id: UnitId) -> Option<&Creep> {
        self.creep_index.get(&id).map(|index| &self.creeps[*index])
    }

    /// The creep if it still exists and has hit points.
    pub fn operational_creep(&self, id: UnitId) -> Option<&Creep> {
        self.creep(id).filter(|creep| creep.is_operational())
    }

    pub fn is_operational(&self, id: UnitId) -> bool {
        self.operational_creep(id).is_some()
    }

    pub fn tower(&self, id: StructureId) -> Option<&Tower> {
        self.tower_index.get(&id).map(|index| &self.towers[*index])
    }

    pub fn my_flag(&self) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.my == Some(true))
    }

    pub fn enemy_flag(&self) -> Option<&Flag> {
        self.flags.iter().find(|flag| flag.my == Some(false))
    }
}

/// One side's roster, collected once when the plan is made.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerInfo {
    pub creeps: Vec<UnitId>,
    pub towers: Vec<StructureId>,
}

impl PlayerInfo {
    pub fn collect(snapshot: &WorldSnapshot, my: bool) -> PlayerInfo {
        PlayerInfo {
            creeps: snapshot.creeps().iter().filter(|creep| creep.my == my).map(|creep| creep.id).collect(),
            towers: snapshot.towers().iter().filter(|tower| tower.my == my).map(|tower| tower.id).collect(),
        }
    }

    pub fn operational_creeps<'a>(&'a self, snapshot: &'a WorldSnapshot) -> impl Iterator<Item = &'a Creep> + 'a {
        self.creeps.iter().filter_map(move |id| snapshot.operational_creep(*id))
    }
}

/// Damage and healing already promised to creeps during the current tick.
#[derive(Clone, Debug, Default)]
pub struct HitsLedger {
    registered: HashMap<UnitId, i64>,
}

impl HitsLedger {
    pub fn new() -> HitsLedger {
        HitsLedger::default()
    }

    pub fn register_heal(&mut self, creep: UnitId, power: u32) {
        *self.registered.entry(creep).or_insert(0) += power as i64;
    }

    pub fn register_damage(&mut self, creep: UnitId, power: u32) {
        *self.registered.entry(creep).or_insert(0) -= power as i64;
    }

    pub fn registered(&self, creep: UnitId) -> i64 {
        self.registered.get(&creep).copied().unwrap_or(0)
    }

    /// Still missing hit points after the heals promised so far.
    pub fn not_max_hits(&self, creep: &Creep) -> bool {
        creep.hits as i64 + self.registered(creep.id) < creep.hits_max as i64
    }

    /// Not yet overkilled. Damage up to twice the maximum hit points is allowed to pile up.
    pub fn not_zero_hits(&self, creep: &Creep) -> bool {
        self.registered(creep.id) + creep.hits as i64 + creep.hits_max as i64 > 0
    }
}

/// Everything a goal sees and may touch while it advances during one tick.
pub struct TickContext<'a> {
    pub snapshot: &'a WorldSnapshot,
    pub actuator: &'a mut dyn Actuator,
    pub ranking: &'a dyn TargetRanking,
    pub settings: &'a TacticsSettings,
    pub hits: HitsLedger,
}

impl<'a> TickContext<'a> {
    pub fn new(snapshot: &'a WorldSnapshot, actuator: &'a mut dyn Actuator, ranking: &'a dyn TargetRanking, settings: &'a TacticsSettings) -> TickContext<'a> {
        TickContext {
            snapshot,
            actuator,
            ranking,
            settings,
            hits: HitsLedger::new(),
        }
    }

    pub fn tick(&self) -> u32 {
        self.snapshot.tick()
    }

    pub fn estimate_cost(&self, from: Position, to: Position, options: MoveOptions) -> Cost {
        estimate_cost(&*self.actuator, from, to, options)
    }
}
