use super::map::*;
use crate::constants::*;
use crate::creep::*;
use crate::planner::template::*;
use crate::position::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Initial state of an arena match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub walls: Vec<Position>,
    pub swamps: Vec<Position>,
    pub creeps: Vec<Creep>,
    pub towers: Vec<Tower>,
    pub flags: Vec<Flag>,
    pub dropped_parts: Vec<DroppedPart>,
}

impl Default for Scenario {
    fn default() -> Scenario {
        Scenario {
            width: MAP_SIDE_SIZE,
            height: MAP_SIDE_SIZE,
            walls: Vec::new(),
            swamps: Vec::new(),
            creeps: Vec::new(),
            towers: Vec::new(),
            flags: Vec::new(),
            dropped_parts: Vec::new(),
        }
    }
}

fn body_for(part: Part) -> [Part; 4] {
    [Part::Move, Part::Move, part, part]
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Scenario, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn load(path: &Path) -> Result<Scenario, String> {
        let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read scenario {}: {}", path.display(), e))?;

        Self::from_json(&json)
    }

    pub fn map(&self) -> ArenaMap {
        let mut map = ArenaMap::new(self.width, self.height);

        for swamp in self.swamps.iter() {
            map.add_swamp(*swamp);
        }

        for wall in self.walls.iter() {
            map.add_wall(*wall);
        }

        map
    }

    /// Point reflection through the map centre.
    fn mirror(&self, pos: Position) -> Position {
        Position::new(self.width - 1 - pos.x, self.height - 1 - pos.y)
    }

    /// Two teams in the default formation around flags in opposite corners, a river of
    /// walls with fords, a swamp in the middle and a handful of dropped parts.
    pub fn capture_the_flag() -> Scenario {
        let mut scenario = Scenario::default();
        let template = RoleTemplate::default();

        let my_flag = Position::new(10, 10);
        let (offset_x, offset_y) = template.offset;

        for x in 20..80 {
            if x % 15 != 0 {
                scenario.walls.push(Position::new(x, 99 - x));
                scenario.walls.push(Position::new(x, 100 - x));
            }
        }

        for x in 45..55 {
            for y in 45..55 {
                scenario.swamps.push(Position::new(x, y));
            }
        }

        let mut next_id = 1;

        for (index, slot) in template.roster.iter().enumerate() {
            let pos = my_flag.offset(offset_x + slot.x, offset_y + slot.y);

            scenario.creeps.push(Creep::new(UnitId(index as u32 + 1), pos, true, &body_for(slot.part)));
            scenario.creeps.push(Creep::new(UnitId(index as u32 + 101), scenario.mirror(pos), false, &body_for(slot.part)));
        }

        let tower_pos = my_flag.offset(offset_x + 1, offset_y + 1);

        for (my, pos) in [(true, tower_pos), (false, scenario.mirror(tower_pos))] {
            scenario.towers.push(Tower {
                id: StructureId(next_id),
                pos,
                my,
                hits: None,
                cooldown: 0,
                energy: TOWER_CAPACITY,
                energy_capacity: TOWER_CAPACITY,
            });

            next_id += 1;
        }

        for (my, pos) in [(true, my_flag), (false, scenario.mirror(my_flag))] {
            scenario.flags.push(Flag {
                id: StructureId(next_id),
                pos,
                my: Some(my),
            });

            next_id += 1;
        }

        let drops = [
            (Position::new(30, 40), Part::Move, 200),
            (Position::new(52, 52), Part::Heal, 300),
            (Position::new(60, 30), Part::Attack, 250),
            (Position::new(45, 70), Part::Tough, 150),
            (Position::new(25, 20), Part::RangedAttack, 300),
        ];

        for (pos, part, ticks_to_decay) in drops {
            scenario.dropped_parts.push(DroppedPart {
                id: StructureId(next_id),
                pos,
                part,
                ticks_to_decay,
            });

            next_id += 1;
        }

        scenario
    }
}
