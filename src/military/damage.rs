use crate::constants::*;
use lerp::*;

/// Scale an amount delivered by a tower at `range`.
///
/// - Range 0..=5: full amount
/// - Range 6..=20: linear falloff down to a quarter
/// - Range 21+: a quarter
pub fn tower_power(full_amount: f32, range: u32) -> f32 {
    if range <= TOWER_OPTIMAL_RANGE {
        return full_amount;
    }

    let effective_range = range.min(TOWER_FALLOFF_RANGE);
    let t = (effective_range - TOWER_OPTIMAL_RANGE) as f32 / (TOWER_FALLOFF_RANGE - TOWER_OPTIMAL_RANGE) as f32;

    full_amount.lerp_bounded(full_amount * (1.0 - TOWER_FALLOFF), t).floor()
}

pub fn tower_attack_at_range(range: u32) -> u32 {
    tower_power(TOWER_POWER_ATTACK as f32, range) as u32
}

pub fn tower_heal_at_range(range: u32) -> u32 {
    tower_power(TOWER_POWER_HEAL as f32, range) as u32
}
