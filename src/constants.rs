use crate::creep::Part;

// No constant is exposed by the arena for these, they are observed values.
pub const MAP_SIDE_SIZE: i32 = 100;
pub const TICK_LIMIT: u32 = 2000;

/// Rounded square root of the map side, used as a "small distance" on this map.
pub const MAP_SIDE_SIZE_SQRT: i32 = 10;

pub const BODYPART_HITS: u32 = 100;

pub const TOWER_RANGE: u32 = 50;
pub const TOWER_OPTIMAL_RANGE: u32 = 5;
pub const TOWER_FALLOFF_RANGE: u32 = 20;
pub const TOWER_FALLOFF: f32 = 0.75;
pub const TOWER_POWER_ATTACK: u32 = 150;
pub const TOWER_POWER_HEAL: u32 = 100;
pub const TOWER_ENERGY_COST: u32 = 10;
pub const TOWER_CAPACITY: u32 = 50;
pub const TOWER_COOLDOWN: u32 = 10;

/// Fatigue removed per active move part each tick.
pub const MOVE_FATIGUE_RECOVERY: u32 = 2;

pub fn bodypart_cost(part: Part) -> u32 {
    match part {
        Part::Move => 50,
        Part::Work => 100,
        Part::Carry => 50,
        Part::Attack => 80,
        Part::RangedAttack => 150,
        Part::Heal => 250,
        Part::Tough => 10,
        Part::Claim => 600,
    }
}
