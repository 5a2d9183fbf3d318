use crate::creep::*;
use crate::position::*;
use serde::{Deserialize, Serialize};
use shrinkwraprs::*;
use specs::prelude::*;
use specs::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[storage(VecStorage)]
pub enum Identity {
    Creep(UnitId),
    Structure(StructureId),
}

#[derive(Shrinkwrap, Component, Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[shrinkwrap(mutable)]
#[storage(VecStorage)]
pub struct GridPosition(pub Position);

/// Side of a creep or tower, `true` for the controlled team.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[storage(VecStorage)]
pub struct Owner(pub bool);

#[derive(Component, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[storage(DenseVecStorage)]
pub struct Body {
    pub parts: Vec<BodyPart>,
}

impl Body {
    pub fn hits(&self) -> u32 {
        self.parts.iter().map(|part| part.hits).sum()
    }

    pub fn hits_max(&self) -> u32 {
        self.parts.len() as u32 * crate::constants::BODYPART_HITS
    }

    pub fn active_count(&self, part: Part) -> u32 {
        self.parts.iter().filter(|body_part| body_part.is_active() && body_part.part == part).count() as u32
    }

    /// Damage is absorbed front to back.
    pub fn damage(&mut self, mut amount: u32) {
        for part in self.parts.iter_mut() {
            let taken = part.hits.min(amount);
            part.hits -= taken;
            amount -= taken;

            if amount == 0 {
                break;
            }
        }
    }

    /// Healing restores back to front.
    pub fn heal(&mut self, mut amount: u32) {
        for part in self.parts.iter_mut().rev() {
            let restored = (crate::constants::BODYPART_HITS - part.hits).min(amount);
            part.hits += restored;
            amount -= restored;

            if amount == 0 {
                break;
            }
        }
    }
}

#[derive(Shrinkwrap, Component, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[shrinkwrap(mutable)]
#[storage(VecStorage)]
pub struct Fatigue(pub u32);

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[storage(DenseVecStorage)]
pub struct TowerState {
    pub hits: Option<u32>,
    pub cooldown: u32,
    pub energy: u32,
    pub energy_capacity: u32,
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[storage(DenseVecStorage)]
pub struct FlagMarker {
    pub my: Option<bool>,
}

/// A body part lying on the ground.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[storage(DenseVecStorage)]
pub struct Decay {
    pub part: Part,
    pub ticks_to_decay: u32,
}

pub fn register_components(world: &mut World) {
    world.register::<Identity>();
    world.register::<GridPosition>();
    world.register::<Owner>();
    world.register::<Body>();
    world.register::<Fatigue>();
    world.register::<TowerState>();
    world.register::<FlagMarker>();
    world.register::<Decay>();
}
