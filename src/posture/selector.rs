use super::statistics::*;
use crate::settings::*;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Goal list the team follows for a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Posture {
    RushRandom,
    RushOrganised,
    PowerUp,
    Defence,
    DefenceOrRushRandom,
    DefenceOrRushOrganised,
    Prepare,
}

impl Posture {
    pub const ALL: [Posture; 7] = [
        Posture::RushRandom,
        Posture::RushOrganised,
        Posture::PowerUp,
        Posture::Defence,
        Posture::DefenceOrRushRandom,
        Posture::DefenceOrRushOrganised,
        Posture::Prepare,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Posture::RushRandom => "rushRandom",
            Posture::RushOrganised => "rushOrganised",
            Posture::PowerUp => "powerUp",
            Posture::Defence => "defence",
            Posture::DefenceOrRushRandom => "defenceOrRushRandom",
            Posture::DefenceOrRushOrganised => "defenceOrRushOrganised",
            Posture::Prepare => "prepare",
        }
    }
}

impl fmt::Display for Posture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which branch of the decision procedure fired, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostureRule {
    /// Enemy cannot reach our flag, near the deadline.
    A,
    /// Enemy cannot reach our flag, end game.
    B,
    /// Enemy cannot reach our flag, otherwise.
    C,
    /// Enemy castled, near the deadline.
    D,
    /// Enemy castled, end game.
    E,
    /// Enemy castled, otherwise.
    F,
    /// Earliest phase.
    G,
    /// Enemy attacking, near the deadline.
    H,
    /// Enemy attacking, otherwise.
    I,
    /// Enemy not committed.
    J,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostureDecision {
    pub rule: PostureRule,
    pub posture: Posture,
}

impl fmt::Display for PostureDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}. {}", self.rule, self.posture)
    }
}

/// Battlefield summary the selector classifies.
#[derive(Clone, Debug, PartialEq)]
pub struct PostureInputs {
    pub tick: u32,
    /// Range between the two flags.
    pub flag_distance: u32,
    /// Enemy creeps relative to our flag.
    pub enemy_offence: PositionStatistics,
    /// Enemy creeps relative to their own flag.
    pub enemy_defence: PositionStatistics,
}

/// Classifies every tick from scratch, except for the attack latch which never resets.
#[derive(Clone, Debug, Default)]
pub struct PostureSelector {
    enemy_attacked: bool,
    last: Option<PostureDecision>,
}

impl PostureSelector {
    pub fn new() -> PostureSelector {
        PostureSelector::default()
    }

    pub fn enemy_attacked(&self) -> bool {
        self.enemy_attacked
    }

    pub fn last(&self) -> Option<PostureDecision> {
        self.last
    }

    fn by_deadline(settings: &TacticsSettings, tick: u32, rules: [PostureRule; 3], otherwise: Posture) -> PostureDecision {
        if settings.is_hot(tick) {
            PostureDecision {
                rule: rules[0],
                posture: Posture::RushRandom,
            }
        } else if settings.is_endgame(tick) {
            PostureDecision {
                rule: rules[1],
                posture: Posture::RushOrganised,
            }
        } else {
            PostureDecision {
                rule: rules[2],
                posture: otherwise,
            }
        }
    }

    fn classify(&mut self, settings: &TacticsSettings, inputs: &PostureInputs) -> PostureDecision {
        let tick = inputs.tick;
        let distance = inputs.flag_distance as f32;

        // Wiped or too far away.
        if inputs.enemy_offence.can_reach == 0 {
            return Self::by_deadline(settings, tick, [PostureRule::A, PostureRule::B, PostureRule::C], Posture::PowerUp);
        }

        let early = settings.is_early(tick, inputs.flag_distance);

        // Idle or castled.
        if inputs.enemy_defence.max < settings.castle_radius && !early {
            return Self::by_deadline(settings, tick, [PostureRule::D, PostureRule::E, PostureRule::F], Posture::Prepare);
        }

        if early {
            return PostureDecision {
                rule: PostureRule::G,
                posture: Posture::Defence,
            };
        }

        if self.enemy_attacked || inputs.enemy_offence.median_below(distance * settings.aggression_fraction) {
            if inputs.enemy_offence.median_below(distance * settings.commitment_fraction()) {
                if !self.enemy_attacked {
                    info!("Enemy committed to attack: {}", inputs.enemy_offence);
                }

                self.enemy_attacked = true;
            }

            return if settings.is_hot(tick) {
                PostureDecision {
                    rule: PostureRule::H,
                    posture: Posture::DefenceOrRushRandom,
                }
            } else {
                PostureDecision {
                    rule: PostureRule::I,
                    posture: Posture::DefenceOrRushOrganised,
                }
            };
        }

        PostureDecision {
            rule: PostureRule::J,
            posture: Posture::Prepare,
        }
    }

    pub fn select(&mut self, settings: &TacticsSettings, inputs: &PostureInputs) -> PostureDecision {
        let decision = self.classify(settings, inputs);

        if self.last.map(|last| last.posture) != Some(decision.posture) {
            info!("Tick {}: posture {} (offence {}, defence {})", inputs.tick, decision, inputs.enemy_offence, inputs.enemy_defence);
        } else {
            debug!("Tick {}: {}", inputs.tick, decision);
        }

        self.last = Some(decision);

        decision
    }
}
