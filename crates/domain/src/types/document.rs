//! Whole-document persistence unit

use serde::{Deserialize, Serialize};

use super::{HourLog, Project};

/// The entire tracker state, persisted and replaced as one unit
///
/// `total_hours` is maintained alongside the log so projections and level
/// lookups read one number instead of re-summing every entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerDocument {
    #[serde(default)]
    pub logs: Vec<HourLog>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub total_hours: f64,
}

/// Export envelope: the document plus a suggested download name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub file_name: String,
    pub document: TrackerDocument,
}
