use crate::position::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const PLAIN_COST: u32 = 2;
pub const SWAMP_COST: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Plain,
    Swamp,
    Wall,
}

impl Terrain {
    /// Fatigue generated per non-move part when stepping onto this terrain.
    pub fn fatigue_factor(self) -> u32 {
        match self {
            Terrain::Plain => 2,
            Terrain::Swamp => 10,
            Terrain::Wall => 0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArenaMap {
    width: i32,
    height: i32,
    walls: HashSet<Position>,
    swamps: HashSet<Position>,
}

impl ArenaMap {
    pub fn new(width: i32, height: i32) -> ArenaMap {
        ArenaMap {
            width,
            height,
            walls: HashSet::new(),
            swamps: HashSet::new(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn add_wall(&mut self, pos: Position) {
        self.swamps.remove(&pos);
        self.walls.insert(pos);
    }

    pub fn add_swamp(&mut self, pos: Position) {
        if !self.walls.contains(&pos) {
            self.swamps.insert(pos);
        }
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    pub fn terrain(&self, pos: Position) -> Terrain {
        if !self.in_bounds(pos) || self.walls.contains(&pos) {
            Terrain::Wall
        } else if self.swamps.contains(&pos) {
            Terrain::Swamp
        } else {
            Terrain::Plain
        }
    }

    pub fn is_passable(&self, pos: Position) -> bool {
        self.terrain(pos) != Terrain::Wall
    }

    /// Cost of stepping onto `pos`, `None` for walls and tiles off the map.
    pub fn move_cost(&self, pos: Position) -> Option<u32> {
        match self.terrain(pos) {
            Terrain::Plain => Some(PLAIN_COST),
            Terrain::Swamp => Some(SWAMP_COST),
            Terrain::Wall => None,
        }
    }
}
