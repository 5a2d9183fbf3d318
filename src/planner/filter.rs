use super::rotator::*;
use crate::creep::*;
use crate::position::*;

/// Expected roster: which part must be carried by the creep on each tile.
#[derive(Clone, Debug, PartialEq)]
pub struct CreepFilter {
    parts: Vec<Part>,
    positions: Vec<Position>,
}

impl CreepFilter {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Splits creeps into the expected ones, in slot order, and the rest. All or nothing:
    /// `None` when any slot is empty or held by a creep without the required active part.
    pub fn filter<'c, I>(&self, creeps: I) -> Option<(Vec<UnitId>, Vec<UnitId>)>
    where
        I: IntoIterator<Item = &'c Creep>,
    {
        if self.parts.len() != self.positions.len() {
            return None;
        }

        let mut found: Vec<Option<UnitId>> = vec![None; self.positions.len()];
        let mut remainder = Vec::new();

        for creep in creeps {
            match self.positions.iter().position(|position| creep.pos.is_equal_to(*position)) {
                Some(slot) => {
                    if !creep.has_active_part(self.parts[slot]) {
                        return None;
                    }

                    found[slot] = Some(creep.id);
                }
                None => remainder.push(creep.id),
            }
        }

        let expected = found.into_iter().collect::<Option<Vec<UnitId>>>()?;

        Some((expected, remainder))
    }
}

pub struct CreepFilterBuilder {
    layout: Layout,
    parts: Vec<Part>,
}

impl CreepFilterBuilder {
    pub fn around(anchor: Position) -> CreepFilterBuilder {
        CreepFilterBuilder {
            layout: Layout::around(anchor),
            parts: Vec::new(),
        }
    }

    pub fn offset(mut self, x: i32, y: i32) -> CreepFilterBuilder {
        self.layout.set_offset(Position::new(x, y));
        self
    }

    pub fn with_part_at(mut self, part: Part, x: i32, y: i32) -> CreepFilterBuilder {
        self.parts.push(part);
        self.layout.push(Position::new(x, y));
        self
    }

    pub fn rotate(mut self, rotation: Rotation) -> CreepFilterBuilder {
        self.layout.set_rotation(rotation);
        self
    }

    pub fn auto_rotate(mut self, map_side_size: i32) -> CreepFilterBuilder {
        self.layout.auto_rotate(map_side_size);
        self
    }

    pub fn build(self) -> CreepFilter {
        CreepFilter {
            parts: self.parts,
            positions: self.layout.positions(),
        }
    }
}
