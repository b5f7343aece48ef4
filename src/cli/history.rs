// src/cli/history.rs — Past execution display

use crate::core::planner::Planner;
use crate::infra::config::Config;

pub async fn show_history(config: &Config, limit: usize) -> anyhow::Result<()> {
    let planner = Planner::from_config(config)?;

    let Some(store) = planner.history() else {
        println!("History logging is disabled.");
        return Ok(());
    };

    let records = store.read(limit);
    if records.is_empty() {
        println!("No executed plans yet.");
        println!("  Log: {}", store.path().display());
        return Ok(());
    }

    println!("Executed plans (last {}):", records.len());
    println!();
    for record in &records {
        let approved = if record.approved_by_user {
            " [user-approved]"
        } else {
            ""
        };
        println!("  {}{}", record.timestamp, approved);
        println!("    Food:       {}", record.food);
        println!("    Travel:     {}", record.travel);
        println!(
            "    Confidence: {:.0}%  (buffer {:.1} min)",
            record.confidence * 100.0,
            record.buffer_minutes,
        );
        println!();
    }

    Ok(())
}
