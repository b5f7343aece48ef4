// src/providers/mod.rs — Candidate sources
//
// Trait seams for the delivery and ride lookups so the planner can run against
// real upstreams, the bundled mock tables, or test doubles.

pub mod food;
pub mod travel;

use async_trait::async_trait;

use crate::core::types::{FoodCandidate, TravelCandidate};
use crate::infra::config::ProfileConfig;
use crate::infra::errors::DaybreakError;

#[async_trait]
pub trait FoodSource: Send + Sync {
    async fn candidates(&self, profile: &ProfileConfig)
        -> Result<Vec<FoodCandidate>, DaybreakError>;
}

#[async_trait]
pub trait TravelSource: Send + Sync {
    async fn candidates(
        &self,
        profile: &ProfileConfig,
    ) -> Result<Vec<TravelCandidate>, DaybreakError>;
}
