// src/agents/mod.rs — Collaborator agents around the core evaluator

pub mod context;
pub mod execution;
pub mod planning;
pub mod schedule;
