//! Accuracy metrics CLI command

use anyhow::Result;
use colored::Colorize;

use crate::client::{ApiClient, ModelMetrics};
use crate::output::{color_status, OutputFormat};

/// Show the service's prediction accuracy snapshot
pub async fn show_metrics(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let result: ModelMetrics = client.get("metrics").await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let mode = if result.is_trained {
                "trained"
            } else {
                "untrained"
            };

            println!("{}", "Model Accuracy".bold());
            println!("{}", "=".repeat(50));
            println!("Mean Absolute Error:    {:.1} minutes", result.mae);
            println!("Tasks Processed:        {}", result.tasks_processed);
            println!("Model State:            {}", color_status(mode));

            if !result.is_trained {
                println!();
                println!(
                    "{}",
                    "Predictions use the cold-start heuristic until the model is trained"
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}
