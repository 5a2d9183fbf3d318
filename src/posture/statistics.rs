use crate::creep::*;
use crate::position::*;
use std::fmt;

/// Summary of how far a group of creeps is from a point.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionStatistics {
    pub number_of_creeps: usize,
    pub min: u32,
    pub min_2nd: u32,
    pub max: u32,
    pub median: Option<u32>,
    /// Creeps whose range fits in the remaining tick budget.
    pub can_reach: usize,
}

impl PositionStatistics {
    pub fn new(mut ranges: Vec<u32>, ticks_remaining: u32) -> PositionStatistics {
        ranges.sort_unstable();

        if ranges.is_empty() {
            return PositionStatistics {
                number_of_creeps: 0,
                min: u32::MAX,
                min_2nd: u32::MAX,
                max: 0,
                median: None,
                can_reach: 0,
            };
        }

        PositionStatistics {
            number_of_creeps: ranges.len(),
            min: ranges[0],
            min_2nd: *ranges.get(1).unwrap_or(&ranges[0]),
            max: ranges[ranges.len() - 1],
            median: Some(ranges[ranges.len() / 2]),
            can_reach: ranges.partition_point(|range| *range <= ticks_remaining),
        }
    }

    /// Ranges of the operational creeps to `position`.
    pub fn for_creeps_and_position<'a, I>(creeps: I, position: Position, ticks_remaining: u32) -> PositionStatistics
    where
        I: IntoIterator<Item = &'a Creep>,
    {
        let ranges = creeps
            .into_iter()
            .filter(|creep| creep.is_operational())
            .map(|creep| position.get_range_to(creep.pos))
            .collect();

        PositionStatistics::new(ranges, ticks_remaining)
    }

    pub fn median_below(&self, bound: f32) -> bool {
        self.median.map(|median| (median as f32) < bound).unwrap_or(false)
    }
}

impl fmt::Display for PositionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No [{}] min/2nd [{}/{}] max [{}] median [{}] canReach [{}]",
            self.number_of_creeps,
            self.min,
            self.min_2nd,
            self.max,
            self.median.map(|median| median.to_string()).unwrap_or_else(|| "-".to_string()),
            self.can_reach
        )
    }
}
