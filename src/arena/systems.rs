use super::components::*;
use super::intents::*;
use super::map::*;
use crate::constants::*;
use crate::creep::*;
use crate::military::damage::*;
use crate::position::*;
use log::*;
use specs::prelude::*;
use std::collections::{HashMap, HashSet};

#[derive(SystemData)]
pub struct MovementSystemData<'a> {
    entities: Entities<'a>,
    map: ReadExpect<'a, ArenaMap>,
    intents: ReadExpect<'a, Intents>,
    identities: ReadStorage<'a, Identity>,
    bodies: ReadStorage<'a, Body>,
    positions: WriteStorage<'a, GridPosition>,
    fatigue: WriteStorage<'a, Fatigue>,
}

/// Applies move intents of rested creeps. A creep may follow into a tile another creep
/// vacates in the same tick.
pub struct MovementSystem;

impl<'a> System<'a> for MovementSystem {
    type SystemData = MovementSystemData<'a>;

    fn run(&mut self, mut data: Self::SystemData) {
        let mut creeps: HashMap<UnitId, Entity> = HashMap::new();
        let mut occupied: HashSet<Position> = HashSet::new();

        for (entity, identity, body, position) in (&data.entities, &data.identities, &data.bodies, &data.positions).join() {
            if let Identity::Creep(id) = identity {
                creeps.insert(*id, entity);

                if body.hits() > 0 {
                    occupied.insert(position.0);
                }
            }
        }

        let mut pending: Vec<(Entity, Position)> = data
            .intents
            .moves
            .iter()
            .filter_map(|(id, destination)| creeps.get(id).map(|entity| (*entity, *destination)))
            .filter(|(entity, destination)| {
                let rested = data.fatigue.get(*entity).map(|fatigue| fatigue.0 == 0).unwrap_or(true);
                let mobile = data.bodies.get(*entity).map(|body| body.active_count(Part::Move) > 0).unwrap_or(false);
                let adjacent = data.positions.get(*entity).map(|position| position.get_range_to(*destination) == 1).unwrap_or(false);

                rested && mobile && adjacent && data.map.is_passable(*destination)
            })
            .collect();

        loop {
            let before = pending.len();

            pending.retain(|(entity, destination)| {
                if occupied.contains(destination) {
                    return true;
                }

                if let Some(position) = data.positions.get_mut(*entity) {
                    occupied.remove(&position.0);
                    occupied.insert(*destination);
                    position.0 = *destination;
                }

                let heavy_parts = data
                    .bodies
                    .get(*entity)
                    .map(|body| body.parts.iter().filter(|part| part.part != Part::Move).count() as u32)
                    .unwrap_or(0);

                let gained = heavy_parts * data.map.terrain(*destination).fatigue_factor();

                if let Some(fatigue) = data.fatigue.get_mut(*entity) {
                    fatigue.0 += gained;
                }

                false
            });

            if pending.is_empty() || pending.len() == before {
                break;
            }
        }

        if !pending.is_empty() {
            trace!("{} moves blocked", pending.len());
        }
    }
}

/// Each active move part recovers fatigue every tick.
pub struct FatigueSystem;

impl<'a> System<'a> for FatigueSystem {
    type SystemData = (ReadStorage<'a, Body>, WriteStorage<'a, Fatigue>);

    fn run(&mut self, (bodies, mut fatigue): Self::SystemData) {
        for (body, fatigue) in (&bodies, &mut fatigue).join() {
            fatigue.0 = fatigue.0.saturating_sub(MOVE_FATIGUE_RECOVERY * body.active_count(Part::Move));
        }
    }
}

#[derive(SystemData)]
pub struct TowerSystemData<'a> {
    entities: Entities<'a>,
    intents: ReadExpect<'a, Intents>,
    identities: ReadStorage<'a, Identity>,
    positions: ReadStorage<'a, GridPosition>,
    towers: WriteStorage<'a, TowerState>,
    bodies: WriteStorage<'a, Body>,
}

/// Cools towers down, then fires accepted tower actions. Creeps left without hit points
/// are removed.
pub struct TowerSystem;

impl<'a> System<'a> for TowerSystem {
    type SystemData = TowerSystemData<'a>;

    fn run(&mut self, mut data: Self::SystemData) {
        for tower in (&mut data.towers).join() {
            tower.cooldown = tower.cooldown.saturating_sub(1);
        }

        let mut creeps: HashMap<UnitId, Entity> = HashMap::new();
        let mut structures: HashMap<StructureId, Entity> = HashMap::new();

        for (entity, identity) in (&data.entities, &data.identities).join() {
            match identity {
                Identity::Creep(id) => {
                    creeps.insert(*id, entity);
                }
                Identity::Structure(id) => {
                    structures.insert(*id, entity);
                }
            }
        }

        for action in data.intents.tower_actions.iter() {
            let (tower_entity, target_entity) = match (structures.get(&action.tower), creeps.get(&action.target)) {
                (Some(tower), Some(target)) => (*tower, *target),
                _ => continue,
            };

            let range = match (data.positions.get(tower_entity), data.positions.get(target_entity)) {
                (Some(from), Some(to)) => from.get_range_to(to.0),
                _ => continue,
            };

            let tower = match data.towers.get_mut(tower_entity) {
                Some(tower) if tower.cooldown == 0 && tower.energy >= TOWER_ENERGY_COST && range <= TOWER_RANGE => tower,
                _ => continue,
            };

            tower.energy -= TOWER_ENERGY_COST;
            tower.cooldown = TOWER_COOLDOWN;

            if let Some(body) = data.bodies.get_mut(target_entity) {
                if action.heal {
                    body.heal(tower_heal_at_range(range));
                } else {
                    body.damage(tower_attack_at_range(range));

                    if body.hits() == 0 {
                        debug!("{} destroyed by {}", action.target, action.tower);

                        if let Err(err) = data.entities.delete(target_entity) {
                            warn!("Failed to remove {}: {}", action.target, err);
                        }
                    }
                }
            }
        }
    }
}

#[derive(SystemData)]
pub struct PickupSystemData<'a> {
    entities: Entities<'a>,
    decays: ReadStorage<'a, Decay>,
    positions: ReadStorage<'a, GridPosition>,
    bodies: WriteStorage<'a, Body>,
}

/// A creep standing on a dropped part grows it.
pub struct PickupSystem;

impl<'a> System<'a> for PickupSystem {
    type SystemData = PickupSystemData<'a>;

    fn run(&mut self, mut data: Self::SystemData) {
        let dropped: Vec<(Entity, Position, Part)> = (&data.entities, &data.decays, &data.positions)
            .join()
            .map(|(entity, decay, position)| (entity, position.0, decay.part))
            .collect();

        for (part_entity, position, part) in dropped {
            let carrier = (&data.entities, &data.positions, &mut data.bodies)
                .join()
                .find(|(_, creep_position, body)| creep_position.0 == position && body.hits() > 0);

            if let Some((_, _, body)) = carrier {
                body.parts.push(BodyPart::new(part));

                if let Err(err) = data.entities.delete(part_entity) {
                    warn!("Failed to remove picked up part: {}", err);
                }
            }
        }
    }
}

/// Dropped parts vanish once their timer runs out.
pub struct DecaySystem;

impl<'a> System<'a> for DecaySystem {
    type SystemData = (Entities<'a>, WriteStorage<'a, Decay>);

    fn run(&mut self, (entities, mut decays): Self::SystemData) {
        for (entity, decay) in (&entities, &mut decays).join() {
            decay.ticks_to_decay = decay.ticks_to_decay.saturating_sub(1);

            if decay.ticks_to_decay == 0 {
                if let Err(err) = entities.delete(entity) {
                    warn!("Failed to remove decayed part: {}", err);
                }
            }
        }
    }
}
