//! Deadline projects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A self-imposed deadline the user counts down against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub deadline: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Whether the practice timer currently runs against this project.
    /// Documents written before the timer existed omit the field.
    #[serde(default)]
    pub is_active: bool,
}
