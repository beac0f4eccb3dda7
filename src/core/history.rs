//! Local search history: every successful lookup appends a record, queries
//! return the most recent entries first, and the whole log can be exported
//! as CSV.

use serde::{Deserialize, Serialize};

use crate::domain::model::SearchRecord;
use crate::utils::error::Result;

pub const DEFAULT_HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchHistory {
    records: Vec<SearchRecord>,
}

impl SearchHistory {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    pub fn push(&mut self, record: SearchRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent `limit` records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<&SearchRecord> {
        let mut sorted: Vec<&SearchRecord> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        sorted.truncate(limit);
        sorted
    }

    /// Renders the full log as CSV, newest first. Recommendations are left
    /// out, matching what the history listing shows.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["location", "temperature", "conditions", "created_at"])?;

        for record in self.recent(self.records.len()) {
            writer.write_record([
                record.location.clone(),
                format!("{:.1}", record.temperature),
                record.conditions.clone(),
                record.created_at.to_rfc3339(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()).into())
    }
}
