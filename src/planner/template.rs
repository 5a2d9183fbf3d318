use crate::creep::*;
use serde::{Deserialize, Serialize};

/// A creep expected at the start of the match, relative to the own flag.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RosterSlot {
    pub part: Part,
    pub x: i32,
    pub y: i32,
}

impl RosterSlot {
    pub const fn new(part: Part, x: i32, y: i32) -> RosterSlot {
        RosterSlot { part, x, y }
    }
}

/// Starting formation and the roles derived from it.
///
/// * `roster` - where each creep starts and which part it must carry.
/// * `defence` - where the creep from the same roster slot defends.
/// * `lines` - convoys, as indices into `defence`, head first.
/// * `doorstop` - the defender that never leaves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleTemplate {
    pub offset: (i32, i32),
    pub roster: Vec<RosterSlot>,
    pub defence: Vec<(i32, i32)>,
    pub lines: Vec<Vec<usize>>,
    pub doorstop: usize,
}

impl Default for RoleTemplate {
    fn default() -> RoleTemplate {
        RoleTemplate {
            offset: (-3, -3),
            roster: vec![
                RosterSlot::new(Part::Attack, 8, 7),
                RosterSlot::new(Part::Attack, 7, 8),
                RosterSlot::new(Part::RangedAttack, 8, 6),
                RosterSlot::new(Part::RangedAttack, 6, 8),
                RosterSlot::new(Part::RangedAttack, 8, 5),
                RosterSlot::new(Part::RangedAttack, 5, 8),
                RosterSlot::new(Part::RangedAttack, 8, 4),
                RosterSlot::new(Part::RangedAttack, 4, 8),
                RosterSlot::new(Part::Heal, 8, 3),
                RosterSlot::new(Part::Heal, 3, 8),
                RosterSlot::new(Part::Heal, 8, 2),
                RosterSlot::new(Part::Heal, 2, 8),
                RosterSlot::new(Part::Heal, 8, 1),
                RosterSlot::new(Part::Heal, 1, 8),
            ],
            defence: vec![
                (6, 3),
                (3, 6),
                (7, 3),
                (3, 7),
                (5, 3),
                (3, 4),
                (3, 5),
                (4, 3),
                (2, 5),
                (4, 4),
                (6, 2),
                (2, 6),
                (5, 2),
                (3, 3),
            ],
            lines: vec![vec![0, 10, 2], vec![4, 12], vec![6, 8], vec![1, 11, 3], vec![5, 9, 7]],
            doorstop: 13,
        }
    }
}

impl RoleTemplate {
    pub fn validate(&self) -> Result<(), String> {
        if self.roster.is_empty() {
            return Err("empty roster".to_string());
        }

        if self.roster.len() != self.defence.len() {
            return Err(format!("{} roster slots for {} defence positions", self.roster.len(), self.defence.len()));
        }

        let slots = self.defence.len();

        if self.doorstop >= slots {
            return Err(format!("doorstop {} out of {} slots", self.doorstop, slots));
        }

        for line in self.lines.iter() {
            if line.is_empty() {
                return Err("empty line".to_string());
            }

            if let Some(index) = line.iter().find(|index| **index >= slots) {
                return Err(format!("line member {} out of {} slots", index, slots));
            }
        }

        Ok(())
    }
}
