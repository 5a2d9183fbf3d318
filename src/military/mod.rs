pub mod damage;
pub mod ranking;
