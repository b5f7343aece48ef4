// src/cli/mod.rs — CLI definition (clap derive)

pub mod history;
pub mod plan;
pub mod serve;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "daybreak", about = "Morning class-time planning assistant", version)]
pub struct Cli {
    /// Class start time override (HH:MM, 24-hour)
    #[arg(short = 't', long)]
    pub class_time: Option<String>,

    /// Class location override
    #[arg(short, long)]
    pub location: Option<String>,

    /// Approve low-confidence plans without prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Suppress section output (only emit the final decision line)
    #[arg(long)]
    pub quiet: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show past executed plans
    History {
        /// Max entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
}
