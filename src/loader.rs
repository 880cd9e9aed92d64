use std::path::Path;

use crate::models::FeedbackRecord;

const REQUIRED_COLUMNS: [&str; 5] = ["Clinic", "Physician", "Comment", "class", "sentiment"];

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read feedback data: {0}")]
    Read(#[from] csv::Error),
    #[error("feedback data is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Reads the feedback spreadsheet export into memory. Rows without a
/// clinic are dropped; all other text fields fall back to empty.
pub fn load(path: &Path) -> Result<Vec<FeedbackRecord>, LoadError> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        #[serde(rename = "Clinic")]
        clinic: Option<String>,
        #[serde(rename = "Physician")]
        physician: Option<String>,
        #[serde(rename = "Comment")]
        comment: Option<String>,
        class: Option<String>,
        sentiment: Option<String>,
        #[serde(default)]
        sentiment_score: Option<f64>,
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let clinic = normalize(row.clinic);
        if clinic.is_empty() {
            dropped += 1;
            continue;
        }

        records.push(FeedbackRecord {
            clinic,
            physician: normalize(row.physician),
            comment: normalize(row.comment),
            class: normalize(row.class),
            sentiment: normalize(row.sentiment),
            sentiment_score: row.sentiment_score,
        });
    }

    log::debug!(
        "loaded {} feedback rows from {} ({dropped} dropped without a clinic)",
        records.len(),
        path.display()
    );

    Ok(records)
}

// Spreadsheet exports serialize missing cells as "nan".
fn normalize(value: Option<String>) -> String {
    let value = value.unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("nan") {
        String::new()
    } else {
        trimmed.to_string()
    }
}
