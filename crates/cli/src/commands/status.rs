//! Service status CLI command

use anyhow::Result;
use tabled::Tabled;

use crate::client::{ApiClient, ServiceBanner, ServiceHealth};
use crate::output::{color_status, print_info, print_success, print_warning, OutputFormat};

/// Row for the component health table
#[derive(Tabled)]
struct ComponentRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Last Check")]
    last_check: String,
}

/// Show the service banner and per-component health
pub async fn show_status(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let banner: ServiceBanner = client.get("").await?;
    let health = client.get::<ServiceHealth>("healthz").await;

    match format {
        OutputFormat::Json => {
            let combined = match &health {
                Ok(health) => serde_json::json!({ "service": banner, "health": health }),
                Err(_) => serde_json::json!({ "service": banner }),
            };
            println!("{}", serde_json::to_string_pretty(&combined)?);
        }
        OutputFormat::Table => {
            print_success(&banner.status);

            match health {
                Ok(health) => {
                    println!("Overall: {}", color_status(&health.status));
                    println!();

                    let mut rows: Vec<ComponentRow> = health
                        .components
                        .iter()
                        .map(|(name, component)| ComponentRow {
                            component: name.clone(),
                            status: color_status(&component.status),
                            message: component.message.clone().unwrap_or_default(),
                            last_check: format_timestamp(component.last_check_timestamp),
                        })
                        .collect();
                    rows.sort_by(|a, b| a.component.cmp(&b.component));

                    let table = tabled::Table::new(rows)
                        .with(tabled::settings::Style::rounded())
                        .to_string();
                    println!("{}", table);
                }
                Err(err) => {
                    print_warning("Could not retrieve component health");
                    print_info(&format!("{:#}", err));
                }
            }
        }
    }

    Ok(())
}

/// Format an epoch-seconds timestamp for display
fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}
