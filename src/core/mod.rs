// src/core/mod.rs

pub mod gate;
pub mod planner;
pub mod risk;
pub mod types;
