//! Prediction CLI command

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, PredictionResponse, TaskInput};
use crate::output::{color_confidence, format_minutes, OutputFormat};

/// Row for the prediction table
#[derive(Tabled)]
struct PredictionRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Confidence")]
    confidence: String,
    #[tabled(rename = "Reason")]
    reason: String,
}

/// Request a duration and priority prediction for a task
pub async fn predict_task(
    client: &ApiClient,
    category: &str,
    priority: &str,
    subtasks: u32,
    deadline_days: Option<f64>,
    format: OutputFormat,
) -> Result<()> {
    let request = TaskInput {
        category: category.to_string(),
        priority: priority.to_string(),
        subtask_count: subtasks,
        days_until_deadline: deadline_days,
    };

    let response: PredictionResponse = client.post("predict", &request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows = vec![PredictionRow {
                category: category.to_string(),
                duration: format_minutes(response.predicted_duration),
                priority: format!("{}/100", response.priority_score),
                confidence: color_confidence(response.confidence),
                reason: response.reason.clone(),
            }];

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
