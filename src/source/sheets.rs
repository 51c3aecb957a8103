use super::ScheduleSource;
use crate::errors::{AppError, AppResult};
use crate::models::RawRow;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// First 9 columns, header plus 24 lab rows.
pub const SHEET_RANGE: &str = "A1:I25";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

/// One worksheet per section in a shared curriculum spreadsheet,
/// read through the Sheets values API.
pub struct SheetsSource {
    spreadsheet_id: String,
    api_key: String,
    client: Client,
}

impl SheetsSource {
    pub fn new(spreadsheet_id: &str, api_key: &str) -> AppResult<Self> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            spreadsheet_id: spreadsheet_id.trim().to_string(),
            api_key: api_key.trim().to_string(),
            client,
        })
    }

    fn url(&self, section: &str) -> String {
        let range = format!("'{}'!{}", section.replace('\'', "''"), SHEET_RANGE);
        format!(
            "{}/{}/values/{}",
            API_BASE,
            urlencoding::encode(&self.spreadsheet_id),
            urlencoding::encode(&range)
        )
    }
}

impl ScheduleSource for SheetsSource {
    fn describe(&self) -> String {
        "Google Sheets".to_string()
    }

    fn fetch(&self, section: &str) -> AppResult<Vec<RawRow>> {
        let response = self
            .client
            .get(self.url(section))
            .query(&[("key", self.api_key.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AppError::Remote(format!(
                "worksheet '{section}' returned {status}: {}",
                body.trim()
            )));
        }

        let range: ValueRange = response.json()?;
        Ok(rows_from_values(&range.values))
    }
}

/// Turn a values grid (first row = header) into raw rows.
/// The API omits trailing empty cells, so short rows are padded.
pub fn rows_from_values(values: &[Vec<Value>]) -> Vec<RawRow> {
    let Some((header, body)) = values.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header.iter().map(cell_text).collect();

    body.iter()
        .map(|line| {
            let mut cells: Vec<String> = line.iter().map(cell_text).collect();
            cells.resize(headers.len(), String::new());
            RawRow::from_cells(&headers, &cells)
        })
        .collect()
}

fn cell_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_escaped_in_the_range_segment() {
        let source = SheetsSource::new(" sheet-id_1 ", "key").unwrap();
        assert_eq!(
            source.url("Mon/Wed Section's 1A"),
            format!(
                "{API_BASE}/sheet-id_1/values/%27Mon%2FWed%20Section%27%27s%201A%27%21A1%3AI25"
            )
        );
    }
}
