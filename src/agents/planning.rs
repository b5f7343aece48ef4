// src/agents/planning.rs — Action plan builder

use crate::core::types::{Plan, PlanStep, PlannerContext};
use crate::infra::config::ProfileConfig;

pub struct PlanningAgent;

impl PlanningAgent {
    pub fn create_plan(&self, ctx: &PlannerContext, profile: &ProfileConfig) -> Plan {
        Plan {
            objective: "Optimize morning routine for attending first class".into(),
            steps: vec![
                PlanStep {
                    order: 1,
                    action: "Book food delivery".into(),
                    reason: "Need breakfast before heading to class".into(),
                    estimate: Some(format!("budget Rs {:.0}", profile.food_budget)),
                },
                PlanStep {
                    order: 2,
                    action: "Book travel".into(),
                    reason: format!(
                        "Travel {:.1} km to class at {}",
                        ctx.distance_km, profile.location
                    ),
                    estimate: Some(format!(
                        "{:.0} minutes available",
                        ctx.minutes_until_class
                    )),
                },
                PlanStep {
                    order: 3,
                    action: "Monitor time".into(),
                    reason: "Ensure timely arrival to first class".into(),
                    estimate: None,
                },
            ],
            constraints: vec![
                format!("Must arrive before {}", profile.class_start_time),
                "Stay within budget".into(),
                "Minimize delivery delay variance".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_has_three_ordered_steps() {
        let ctx = PlannerContext {
            current_time: "08:00".into(),
            date: "2026-08-25".into(),
            minutes_until_class: 60.0,
            distance_km: 8.5,
        };
        let plan = PlanningAgent.create_plan(&ctx, &ProfileConfig::default());
        assert_eq!(plan.steps.len(), 3);
        assert_eq!(plan.steps[0].order, 1);
        assert_eq!(plan.steps[1].action, "Book travel");
        assert!(plan.steps[1].reason.contains("8.5 km"));
        assert!(plan.steps[1].estimate.as_deref().unwrap().contains("60"));
        assert!(plan.constraints[0].contains("09:00"));
    }
}
