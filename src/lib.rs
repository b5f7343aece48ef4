// src/lib.rs

pub mod agents;
pub mod api;
pub mod cli;
pub mod core;
pub mod infra;
pub mod memory;
pub mod providers;
