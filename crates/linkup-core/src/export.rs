use chrono::{Local, NaiveDate};
use linkup_schema::{Connection, Event};
use serde::Serialize;

use crate::qr::extract_username;

/// The two serialized projections of one day's connections. Pure strings;
/// handing them to a clipboard or file-save mechanism is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportBundle {
    pub text: String,
    pub csv: String,
}

const CSV_HEADER: &str = "Username,Notes,Date,Status";

/// Project the connections scanned on `target_date` (the viewer's local
/// calendar date, no timezone normalization) into text and CSV. Never
/// mutates anything; identical inputs yield identical outputs.
pub fn build_export(event: &Event, target_date: NaiveDate) -> ExportBundle {
    let filtered: Vec<&Connection> = event
        .connections
        .iter()
        .filter(|c| c.timestamp.with_timezone(&Local).date_naive() == target_date)
        .collect();

    let text = filtered
        .iter()
        .map(|c| format!("@{} - {}", display_name(c), c.notes))
        .collect::<Vec<_>>()
        .join("\n");

    let mut lines = Vec::with_capacity(filtered.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for c in &filtered {
        let date = c.timestamp.with_timezone(&Local).format("%m/%d/%Y");
        lines.push(
            [
                csv_field(display_name(c)),
                csv_field(&c.notes),
                csv_field(&date.to_string()),
                csv_field(c.status.as_str()),
            ]
            .join(","),
        );
    }
    let csv = lines.join("\n");

    ExportBundle { text, csv }
}

fn display_name(connection: &Connection) -> &str {
    extract_username(&connection.user_link).unwrap_or(&connection.user_link)
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
