use super::rotator::*;
use crate::creep::*;
use crate::goals::*;
use crate::position::*;

/// Builds one position goal per creep from a layout drawn around an anchor.
pub struct PositionGoalBuilder {
    layout: Layout,
    creeps: Vec<UnitId>,
}

impl PositionGoalBuilder {
    pub fn around(anchor: Position) -> PositionGoalBuilder {
        PositionGoalBuilder {
            layout: Layout::around(anchor),
            creeps: Vec::new(),
        }
    }

    pub fn offset(mut self, x: i32, y: i32) -> PositionGoalBuilder {
        self.layout.set_offset(Position::new(x, y));
        self
    }

    pub fn with_creep_at(mut self, creep: UnitId, x: i32, y: i32) -> PositionGoalBuilder {
        self.creeps.push(creep);
        self.layout.push(Position::new(x, y));
        self
    }

    pub fn with_creeps(mut self, creeps: &[UnitId]) -> PositionGoalBuilder {
        self.creeps.extend_from_slice(creeps);
        self
    }

    pub fn with_positions(mut self, positions: &[(i32, i32)]) -> PositionGoalBuilder {
        for (x, y) in positions.iter() {
            self.layout.push(Position::new(*x, *y));
        }
        self
    }

    pub fn rotate(mut self, rotation: Rotation) -> PositionGoalBuilder {
        self.layout.set_rotation(rotation);
        self
    }

    pub fn auto_rotate(mut self, map_side_size: i32) -> PositionGoalBuilder {
        self.layout.auto_rotate(map_side_size);
        self
    }

    pub fn build(self) -> Result<Vec<CreepPositionGoal>, String> {
        if self.creeps.len() != self.layout.len() {
            return Err(format!("{} creeps for {} positions", self.creeps.len(), self.layout.len()));
        }

        Ok(self
            .creeps
            .into_iter()
            .zip(self.layout.positions())
            .map(|(creep, position)| CreepPositionGoal::new(creep, position))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goals_follow_the_rotated_layout() {
        let goals = PositionGoalBuilder::around(Position::new(90, 10))
            .offset(-3, -3)
            .with_creep_at(UnitId(4), 6, 3)
            .with_creep_at(UnitId(5), 3, 3)
            .auto_rotate(100)
            .build();

        assert_eq!(
            goals,
            Ok(vec![
                CreepPositionGoal::new(UnitId(4), Position::new(90, 13)),
                CreepPositionGoal::new(UnitId(5), Position::new(90, 10)),
            ])
        );
    }

    #[test]
    fn mismatched_counts_are_an_error() {
        let goals = PositionGoalBuilder::around(Position::new(10, 10))
            .with_creeps(&[UnitId(1), UnitId(2)])
            .with_positions(&[(1, 1)])
            .build();

        assert!(goals.is_err());
    }
}
