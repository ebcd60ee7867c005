pub mod activities;

pub use activities::ActivityQueries;
