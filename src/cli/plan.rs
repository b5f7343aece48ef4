// src/cli/plan.rs — One planning cycle, printed for a terminal
//
// Prints each phase of the cycle as it would read in a morning briefing,
// then either confirms the automatic execution or asks the user to approve
// a low-confidence plan.

use std::io::IsTerminal;

use crate::core::planner::{PlanRequest, Planner};
use crate::core::types::{AgentState, ExecutionReceipt, PlanReport};
use crate::infra::config::Config;

pub async fn run_plan(
    config: &Config,
    class_time: Option<String>,
    location: Option<String>,
    yes: bool,
    quiet: bool,
) -> anyhow::Result<()> {
    let planner = Planner::from_config(config)?;

    let req = PlanRequest {
        class_time: class_time.clone(),
        location: location.clone(),
        approved: false,
    };

    let report = planner.run(&req).await?;

    if !quiet {
        print_report(&report);
    }

    match report.state {
        AgentState::Completed => {
            println!(
                "Plan executed automatically ({:.0}% confidence).",
                report.risk.confidence * 100.0
            );
            Ok(())
        }
        AgentState::WaitingForOverride => {
            if let Some(ref message) = report.message {
                println!("{}", message);
            }

            let approve = if yes {
                true
            } else if std::io::stdin().is_terminal() {
                inquire::Confirm::new("Execute this plan anyway?")
                    .with_default(false)
                    .with_help_message("Orders food and books the ride")
                    .prompt()
                    .unwrap_or(false)
            } else {
                false
            };

            if !approve {
                println!("Plan not executed. Re-run with --yes to approve.");
                return Ok(());
            }

            let approved_req = PlanRequest {
                class_time,
                location,
                approved: true,
            };
            let approved_report = planner.run(&approved_req).await?;
            if let Some(ref execution) = approved_report.execution {
                println!();
                print_execution(execution);
            }
            println!("Plan executed with user approval.");
            Ok(())
        }
        _ => Ok(()),
    }
}

fn print_report(report: &PlanReport) {
    println!("daybreak v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("Context");
    println!("  Time:      {} ({})", report.context.current_time, report.context.date);
    println!("  Class in:  {:.1} minutes", report.context.minutes_until_class);
    println!("  Distance:  {:.1} km", report.context.distance_km);
    println!();

    println!("Plan: {}", report.plan.objective);
    for step in &report.plan.steps {
        match &step.estimate {
            Some(estimate) => println!("  {}. {} ({})", step.order, step.action, estimate),
            None => println!("  {}. {}", step.order, step.action),
        }
        println!("     {}", step.reason);
    }
    println!();

    println!("Food options");
    for (i, food) in report.food_options.iter().enumerate() {
        let marker = if i == 0 { ">" } else { " " };
        println!(
            "  {} {} — {} (Rs.{:.0}, {:.0} min, {} {:.1})",
            marker, food.restaurant, food.item, food.price, food.eta_minutes, food.service, food.rating,
        );
    }
    println!();

    println!("Travel options");
    for (i, ride) in report.travel_options.iter().enumerate() {
        let marker = if i == 0 { ">" } else { " " };
        println!(
            "  {} {} {} — Rs.{:.0}, {:.0} min",
            marker, ride.service, ride.mode, ride.cost, ride.eta_minutes,
        );
    }
    println!();

    println!("Risk assessment");
    println!("  Confidence: {:.0}%", report.risk.confidence * 100.0);
    println!("  Buffer:     {:.1} minutes", report.risk.buffer_minutes);
    if report.risk.reasoning.penalties.is_empty() {
        println!("  Penalties:  none");
    } else {
        println!("  Penalties:");
        for penalty in &report.risk.reasoning.penalties {
            println!("    -{:.2}  {}", penalty.amount, penalty.detail);
        }
    }
    println!("  Recommendation: {}", report.risk.recommendation);
    println!();

    if let Some(ref execution) = report.execution {
        print_execution(execution);
        println!();
    }

    println!("Today");
    for line in &report.schedule {
        println!("  {}", line);
    }
    println!();
}

fn print_execution(execution: &ExecutionReceipt) {
    println!("Execution");
    println!("  Food:    {} via {}", execution.food_ordered, execution.food_service);
    println!(
        "  Travel:  {} (Rs.{:.0})",
        execution.travel_booked, execution.travel_cost
    );
    println!("  Status:  {} at {}", execution.status, execution.confirmed_at);
    if !execution.notes.is_empty() {
        println!("  Notes:   {}", execution.notes);
    }
}
