//! Feedback CLI command

use anyhow::Result;

use crate::client::{ApiClient, FeedbackRequest, FeedbackResponse};
use crate::output::{print_success, OutputFormat};

/// Submit an actual-vs-predicted duration pair to the service
pub async fn submit_feedback(
    client: &ApiClient,
    actual: i64,
    predicted: i64,
    format: OutputFormat,
) -> Result<()> {
    let request = FeedbackRequest {
        actual_duration: actual,
        predicted_duration: predicted,
    };

    let response: FeedbackResponse = client.post("feedback", &request).await?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            print_success(&format!(
                "Feedback recorded, running MAE is now {:.1} minutes",
                response.new_mae
            ));
        }
    }

    Ok(())
}
