#![warn(clippy::all)]

pub mod actions;
pub mod arena;
pub mod constants;
pub mod creep;
pub mod game_loop;
pub mod goals;
pub mod logging;
pub mod military;
pub mod pathing;
pub mod planner;
pub mod position;
pub mod posture;
pub mod settings;
pub mod snapshot;

#[cfg(test)]
mod testing;
