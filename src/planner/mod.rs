pub mod builder;
pub mod filter;
pub mod plan;
pub mod rotator;
pub mod template;
