//! Task Predictor CLI
//!
//! A command-line tool for requesting task duration and priority
//! predictions, submitting accuracy feedback, and inspecting the
//! prediction service.

mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{feedback, metrics, predict, status};

/// Fallback endpoint when neither flag, env var nor config file sets one
const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Task Predictor CLI
#[derive(Parser)]
#[command(name = "tp")]
#[command(author, version, about = "CLI for the Task Duration Predictor", long_about = None)]
pub struct Cli {
    /// API endpoint URL (also TP_API_URL env var or the config file;
    /// defaults to http://localhost:8000)
    #[arg(long, env = "TP_API_URL")]
    pub api_url: Option<String>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    pub format: output::OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict duration and priority for a task
    Predict {
        /// Task category (e.g. Work, Personal, Learning)
        category: String,

        /// Priority label (low, medium, high, urgent)
        #[arg(long, short, default_value = "medium")]
        priority: String,

        /// Number of subtasks
        #[arg(long, short, default_value_t = 0)]
        subtasks: u32,

        /// Days until the deadline (fractional; zero or negative when overdue)
        #[arg(long, short)]
        deadline_days: Option<f64>,
    },

    /// Report the actual duration of a completed task
    Feedback {
        /// Actual duration in minutes
        #[arg(long)]
        actual: i64,

        /// Predicted duration the task was given, in minutes
        #[arg(long)]
        predicted: i64,
    },

    /// Show prediction accuracy metrics
    Metrics,

    /// Show service and component status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flag/env beats the config file, which beats the default
    let file_config = config::Config::load().unwrap_or_default();
    let api_url = cli
        .api_url
        .or(file_config.api_url)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = client::ApiClient::new(&api_url)?;

    match cli.command {
        Commands::Predict {
            category,
            priority,
            subtasks,
            deadline_days,
        } => {
            predict::predict_task(&client, &category, &priority, subtasks, deadline_days, cli.format)
                .await?;
        }
        Commands::Feedback { actual, predicted } => {
            feedback::submit_feedback(&client, actual, predicted, cli.format).await?;
        }
        Commands::Metrics => {
            metrics::show_metrics(&client, cli.format).await?;
        }
        Commands::Status => {
            status::show_status(&client, cli.format).await?;
        }
    }

    Ok(())
}
