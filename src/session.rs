use serde::{Deserialize, Serialize};

use crate::utils::{format_time, utc_to_hhmm};

/// One wheel session as recorded by the pedometer.
///
/// `start` and `end` are epoch seconds; `end` stays `0` while the session is running.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SessionSlot {
    pub start: i64,
    pub end: i64,
    pub steps: i64,
    pub times: Vec<f64>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub started_at: String,
    pub duration: String,
    pub steps: i64,
}

impl SessionSlot {
    pub fn is_running(&self) -> bool {
        self.end == 0
    }

    pub fn elapsed_seconds(&self) -> u64 {
        if self.is_running() {
            return 0;
        }

        self.end.saturating_sub(self.start).max(0) as u64
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            started_at: utc_to_hhmm(self.start),
            duration: format_time(self.elapsed_seconds()),
            steps: self.steps,
        }
    }
}
