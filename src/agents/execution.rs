// src/agents/execution.rs — Booking execution
//
// Produces a mock confirmation receipt. There is no negotiation with real
// providers; the receipt records what would have been booked and when.

use chrono::Utc;
use chrono_tz::Tz;

use crate::core::types::{ExecutionReceipt, FoodCandidate, TravelCandidate};

pub struct ExecutionAgent {
    tz: Tz,
}

impl ExecutionAgent {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn execute(&self, food: &FoodCandidate, travel: &TravelCandidate) -> ExecutionReceipt {
        let now = Utc::now().with_timezone(&self.tz);

        ExecutionReceipt {
            food_ordered: format!("{} from {}", food.item, food.restaurant),
            food_service: food.service.clone(),
            travel_booked: format!("{} {}", travel.service, travel.mode),
            travel_cost: travel.cost,
            confirmed_at: now.format("%H:%M:%S").to_string(),
            status: "Confirmed".into(),
            notes: "Booking details would be sent to the registered phone number".into(),
        }
    }
}
