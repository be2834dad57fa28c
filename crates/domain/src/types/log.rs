//! Hour log entries

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged practice session
///
/// `date` carries day precision only. The pace estimator treats several
/// entries on the same calendar day as a single day of practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourLog {
    pub date: NaiveDate,
    pub hours: f64,
}
