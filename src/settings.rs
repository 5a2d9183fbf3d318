use crate::constants::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable thresholds of the controller. All values are empirical; every field can be
/// overridden from a JSON file and missing fields keep their default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TacticsSettings {
    pub map_side_size: i32,
    pub tick_limit: u32,
    /// Ticks before the deadline that count as "hot" (unorganised rush).
    pub hot_window: u32,
    /// Ticks before the deadline that count as end game (organised rush).
    pub endgame_window: u32,
    /// Fraction of the flag distance that bounds the early phase in ticks.
    pub early_phase_fraction: f32,
    /// Enemy creeps all this close to their own flag are considered castled.
    pub castle_radius: u32,
    /// Enemy offence median below this fraction of the flag distance counts as an attack.
    pub aggression_fraction: f32,
    /// Tighter median fraction that latches the attack state. Unset latches as soon as the
    /// attack condition holds.
    pub commitment_fraction: Option<f32>,
    /// Orientation lock of a reversing convoy, in ticks per convoy unit.
    pub reverse_cooldown_per_unit: u32,
    /// Slack subtracted from a dropped part's lifetime before a pickup counts as feasible.
    pub pickup_safety_margin: i32,
    /// Stop advancing a strict AND goal after its first hard failure.
    pub and_fail_fast: bool,
}

impl Default for TacticsSettings {
    fn default() -> TacticsSettings {
        TacticsSettings {
            map_side_size: MAP_SIDE_SIZE,
            tick_limit: TICK_LIMIT,
            hot_window: MAP_SIDE_SIZE as u32,
            endgame_window: (MAP_SIDE_SIZE as f32 * 2.5) as u32,
            early_phase_fraction: 0.5,
            castle_radius: MAP_SIDE_SIZE_SQRT as u32,
            aggression_fraction: 2.0 / 3.0,
            commitment_fraction: None,
            reverse_cooldown_per_unit: 2,
            pickup_safety_margin: MAP_SIDE_SIZE_SQRT,
            and_fail_fast: false,
        }
    }
}

impl TacticsSettings {
    pub fn from_json(json: &str) -> Result<TacticsSettings, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<TacticsSettings, String> {
        let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read settings {}: {}", path.display(), e))?;

        Self::from_json(&json)
    }

    pub fn ticks_remaining(&self, tick: u32) -> u32 {
        self.tick_limit.saturating_sub(tick)
    }

    pub fn is_hot(&self, tick: u32) -> bool {
        tick > self.tick_limit.saturating_sub(self.hot_window)
    }

    pub fn is_endgame(&self, tick: u32) -> bool {
        tick > self.tick_limit.saturating_sub(self.endgame_window)
    }

    pub fn commitment_fraction(&self) -> f32 {
        self.commitment_fraction.unwrap_or(self.aggression_fraction)
    }

    pub fn is_early(&self, tick: u32, flag_distance: u32) -> bool {
        (tick as f32) < flag_distance as f32 * self.early_phase_fraction
    }
}
