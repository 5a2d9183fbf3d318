pub mod selector;
pub mod statistics;
