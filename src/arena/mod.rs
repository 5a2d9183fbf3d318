pub mod components;
pub mod intents;
pub mod map;
pub mod scenario;
pub mod systems;

use self::components::*;
use self::intents::*;
use self::map::*;
use self::scenario::*;
use self::systems::*;
use crate::creep::*;
use crate::game_loop::*;
use crate::snapshot::*;
use log::*;
use specs::prelude::*;

/// Simulated match the controller can be run against.
pub struct Arena {
    world: World,
    dispatcher: Dispatcher<'static, 'static>,
    map: ArenaMap,
    tick: u32,
}

impl Arena {
    pub fn new(scenario: &Scenario) -> Arena {
        let map = scenario.map();

        let mut world = World::new();

        register_components(&mut world);

        world.insert(map.clone());
        world.insert(Intents::default());

        for creep in scenario.creeps.iter() {
            world
                .create_entity()
                .with(Identity::Creep(creep.id))
                .with(GridPosition(creep.pos))
                .with(Owner(creep.my))
                .with(Body { parts: creep.body.clone() })
                .with(Fatigue(creep.fatigue))
                .build();
        }

        for tower in scenario.towers.iter() {
            world
                .create_entity()
                .with(Identity::Structure(tower.id))
                .with(GridPosition(tower.pos))
                .with(Owner(tower.my))
                .with(TowerState {
                    hits: tower.hits,
                    cooldown: tower.cooldown,
                    energy: tower.energy,
                    energy_capacity: tower.energy_capacity,
                })
                .build();
        }

        for flag in scenario.flags.iter() {
            world
                .create_entity()
                .with(Identity::Structure(flag.id))
                .with(GridPosition(flag.pos))
                .with(FlagMarker { my: flag.my })
                .build();
        }

        for part in scenario.dropped_parts.iter() {
            world
                .create_entity()
                .with(Identity::Structure(part.id))
                .with(GridPosition(part.pos))
                .with(Decay {
                    part: part.part,
                    ticks_to_decay: part.ticks_to_decay,
                })
                .build();
        }

        let mut dispatcher = DispatcherBuilder::new()
            .with(TowerSystem, "tower", &[])
            .with(MovementSystem, "movement", &["tower"])
            .with(FatigueSystem, "fatigue", &["movement"])
            .with(PickupSystem, "pickup", &["movement"])
            .with(DecaySystem, "decay", &["pickup"])
            .build();

        dispatcher.setup(&mut world);

        Arena {
            world,
            dispatcher,
            map,
            tick: 1,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn map(&self) -> &ArenaMap {
        &self.map
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let identities = self.world.read_storage::<Identity>();
        let positions = self.world.read_storage::<GridPosition>();
        let owners = self.world.read_storage::<Owner>();
        let bodies = self.world.read_storage::<Body>();
        let fatigue = self.world.read_storage::<Fatigue>();
        let towers = self.world.read_storage::<TowerState>();
        let flags = self.world.read_storage::<FlagMarker>();
        let decays = self.world.read_storage::<Decay>();

        let creeps = (&identities, &positions, &owners, &bodies, (&fatigue).maybe())
            .join()
            .filter_map(|(identity, position, owner, body, fatigue)| match identity {
                Identity::Creep(id) => Some(Creep {
                    id: *id,
                    pos: position.0,
                    my: owner.0,
                    hits: body.hits(),
                    hits_max: body.hits_max(),
                    fatigue: fatigue.map(|fatigue| fatigue.0).unwrap_or(0),
                    body: body.parts.clone(),
                }),
                Identity::Structure(_) => None,
            })
            .collect();

        let tower_list = (&identities, &positions, &owners, &towers)
            .join()
            .filter_map(|(identity, position, owner, tower)| match identity {
                Identity::Structure(id) => Some(Tower {
                    id: *id,
                    pos: position.0,
                    my: owner.0,
                    hits: tower.hits,
                    cooldown: tower.cooldown,
                    energy: tower.energy,
                    energy_capacity: tower.energy_capacity,
                }),
                Identity::Creep(_) => None,
            })
            .collect();

        let flag_list = (&identities, &positions, &flags)
            .join()
            .filter_map(|(identity, position, flag)| match identity {
                Identity::Structure(id) => Some(Flag {
                    id: *id,
                    pos: position.0,
                    my: flag.my,
                }),
                Identity::Creep(_) => None,
            })
            .collect();

        let parts = (&identities, &positions, &decays)
            .join()
            .filter_map(|(identity, position, decay)| match identity {
                Identity::Structure(id) => Some(DroppedPart {
                    id: *id,
                    pos: position.0,
                    part: decay.part,
                    ticks_to_decay: decay.ticks_to_decay,
                }),
                Identity::Creep(_) => None,
            })
            .collect();

        WorldSnapshot::new(self.tick, creeps, tower_list, flag_list, parts)
    }

    /// Applies one tick of intents and advances the clock.
    pub fn step(&mut self, intents: Intents) {
        trace!("Tick {}: {} moves, {} tower actions", self.tick, intents.moves.len(), intents.tower_actions.len());

        *self.world.write_resource::<Intents>() = intents;

        self.dispatcher.dispatch(&self.world);
        self.world.maintain();

        self.tick += 1;
    }

    /// Lets the controller act on a fresh snapshot, then applies what it commanded.
    pub fn run_tick(&mut self, controller: &mut Controller) -> TickReport {
        let snapshot = self.snapshot();

        let (report, intents) = {
            let mut buffer = IntentBuffer::new(&self.map, &snapshot);
            let report = controller.tick(&snapshot, &mut buffer);

            (report, buffer.into_intents())
        };

        self.step(intents);

        report
    }

    /// The side with a living creep on the opposing flag, if any.
    pub fn captured(&self) -> Option<bool> {
        let snapshot = self.snapshot();

        snapshot.flags().iter().find_map(|flag| {
            let owner = flag.my?;

            snapshot
                .creeps()
                .iter()
                .find(|creep| creep.is_operational() && creep.my != owner && creep.pos.is_equal_to(flag.pos))
                .map(|creep| creep.my)
        })
    }
}
