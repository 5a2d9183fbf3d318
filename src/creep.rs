use crate::constants::*;
use crate::position::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a creep. Ordering is the deterministic iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "creep#{}", self.0)
    }
}

/// Stable identity of a structure (tower, flag) or a dropped body part.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "structure#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    Move,
    Work,
    Carry,
    Attack,
    RangedAttack,
    Heal,
    Tough,
    Claim,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    pub part: Part,
    pub hits: u32,
}

impl BodyPart {
    pub fn new(part: Part) -> BodyPart {
        BodyPart { part, hits: BODYPART_HITS }
    }

    pub fn is_active(&self) -> bool {
        self.hits > 0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Creep {
    pub id: UnitId,
    pub pos: Position,
    pub my: bool,
    pub hits: u32,
    pub hits_max: u32,
    #[serde(default)]
    pub fatigue: u32,
    pub body: Vec<BodyPart>,
}

impl Creep {
    pub fn new(id: UnitId, pos: Position, my: bool, parts: &[Part]) -> Creep {
        let body: Vec<BodyPart> = parts.iter().map(|part| BodyPart::new(*part)).collect();
        let hits = body.len() as u32 * BODYPART_HITS;

        Creep {
            id,
            pos,
            my,
            hits,
            hits_max: hits,
            fatigue: 0,
            body,
        }
    }

    /// A creep present in the snapshot is operational while it has hit points left.
    pub fn is_operational(&self) -> bool {
        self.hits > 0
    }

    pub fn has_active_part(&self, part: Part) -> bool {
        self.body.iter().any(|body_part| body_part.is_active() && body_part.part == part)
    }

    pub fn has_part(&self, part: Part) -> bool {
        self.body.iter().any(|body_part| body_part.part == part)
    }

    /// More non-move parts than move parts, so the creep gathers fatigue on plain terrain.
    pub fn lacks_move(&self) -> bool {
        let balance = self
            .body
            .iter()
            .fold(0i32, |balance, body_part| if body_part.part == Part::Move { balance + 1 } else { balance - 1 });

        balance < 0
    }

    /// Spawn value of the damage this creep has taken.
    pub fn hurt_value(&self) -> f32 {
        self.body
            .iter()
            .map(|body_part| {
                let hurt = 1.0 - body_part.hits as f32 / BODYPART_HITS as f32;
                bodypart_cost(body_part.part) as f32 * hurt
            })
            .sum()
    }

    /// Spawn value of the parts still working on this creep.
    pub fn active_value(&self) -> f32 {
        self.body
            .iter()
            .map(|body_part| {
                let active = body_part.hits as f32 / BODYPART_HITS as f32;
                bodypart_cost(body_part.part) as f32 * active
            })
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: StructureId,
    pub pos: Position,
    pub my: bool,
    /// Towers without hit points cannot be destroyed.
    #[serde(default)]
    pub hits: Option<u32>,
    #[serde(default)]
    pub cooldown: u32,
    pub energy: u32,
    pub energy_capacity: u32,
}

impl Tower {
    pub fn is_operational(&self) -> bool {
        self.hits.map(|hits| hits > 0).unwrap_or(true)
    }

    pub fn free_capacity(&self) -> u32 {
        self.energy_capacity.saturating_sub(self.energy)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flag {
    pub id: StructureId,
    pub pos: Position,
    /// `None` while the flag is neutral.
    #[serde(default)]
    pub my: Option<bool>,
}

/// A body part lying on the ground, waiting to be picked up before it decays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DroppedPart {
    pub id: StructureId,
    pub pos: Position,
    pub part: Part,
    pub ticks_to_decay: u32,
}
