use crate::position::*;
use serde::{Deserialize, Serialize};

/// Clockwise orientation of a layout drawn for a flag in the top-left quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    //  . x ------>
    //  y  R0    R90
    //  | R270  R180
    //  v
    pub fn for_anchor(anchor: Position, map_side_size: i32) -> Rotation {
        let half = (map_side_size as f32 / 2.0).round() as i32;

        match (anchor.x < half, anchor.y < half) {
            (true, true) => Rotation::R0,
            (true, false) => Rotation::R270,
            (false, true) => Rotation::R90,
            (false, false) => Rotation::R180,
        }
    }

    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }
}

fn rotate_cw((x, y): (i32, i32)) -> (i32, i32) {
    (-y, x)
}

/// Rotates a relative offset around the origin.
pub fn rotate(relative: Position, rotation: Rotation) -> Position {
    let mut offset = (relative.x, relative.y);

    for _ in 0..rotation.quarter_turns() {
        offset = rotate_cw(offset);
    }

    offset.into()
}

/// Absolute tiles of a layout: each relative tile is shifted by `offset`, rotated and
/// placed around `anchor`.
pub fn place(anchor: Position, offset: Position, relatives: &[Position], rotation: Rotation) -> Vec<Position> {
    relatives
        .iter()
        .map(|relative| {
            let rotated = rotate(relative.offset(offset.x, offset.y), rotation);

            anchor.offset(rotated.x, rotated.y)
        })
        .collect()
}

/// Relative tiles around an anchor, collected by the builders before placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    anchor: Position,
    offset: Position,
    relatives: Vec<Position>,
    rotation: Rotation,
}

impl Layout {
    pub fn around(anchor: Position) -> Layout {
        Layout {
            anchor,
            offset: Position::default(),
            relatives: Vec::new(),
            rotation: Rotation::R0,
        }
    }

    pub fn set_offset(&mut self, offset: Position) {
        self.offset = offset;
    }

    pub fn push(&mut self, relative: Position) {
        self.relatives.push(relative);
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn auto_rotate(&mut self, map_side_size: i32) {
        self.rotation = Rotation::for_anchor(self.anchor, map_side_size);
    }

    pub fn len(&self) -> usize {
        self.relatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relatives.is_empty()
    }

    pub fn positions(&self) -> Vec<Position> {
        place(self.anchor, self.offset, &self.relatives, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_picks_rotation() {
        assert_eq!(Rotation::for_anchor(Position::new(10, 10), 100), Rotation::R0);
        assert_eq!(Rotation::for_anchor(Position::new(90, 10), 100), Rotation::R90);
        assert_eq!(Rotation::for_anchor(Position::new(90, 90), 100), Rotation::R180);
        assert_eq!(Rotation::for_anchor(Position::new(10, 90), 100), Rotation::R270);
        assert_eq!(Rotation::for_anchor(Position::new(50, 49), 100), Rotation::R90);
    }

    #[test]
    fn rotation_turns_clockwise() {
        let relative = Position::new(5, 2);

        assert_eq!(rotate(relative, Rotation::R0), Position::new(5, 2));
        assert_eq!(rotate(relative, Rotation::R90), Position::new(-2, 5));
        assert_eq!(rotate(relative, Rotation::R180), Position::new(-5, -2));
        assert_eq!(rotate(relative, Rotation::R270), Position::new(2, -5));
    }

    #[test]
    fn placement_is_pure() {
        let relatives = [Position::new(8, 7), Position::new(3, 3)];
        let offset = Position::new(-3, -3);

        let first = place(Position::new(90, 90), offset, &relatives, Rotation::R180);
        let second = place(Position::new(90, 90), offset, &relatives, Rotation::R180);

        assert_eq!(first, second);
        assert_eq!(first, vec![Position::new(85, 86), Position::new(90, 90)]);
    }

    #[test]
    fn layout_rotates_for_its_anchor() {
        let mut layout = Layout::around(Position::new(10, 90));
        layout.set_offset(Position::new(-3, -3));
        layout.push(Position::new(8, 7));
        layout.auto_rotate(100);

        assert_eq!(layout.positions(), vec![Position::new(14, 85)]);
    }
}
