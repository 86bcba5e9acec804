use chrono::Utc;
use serde::Serialize;

/// Outcome of the most recent seed load.
///
/// A failed load leaves the board as it was and can be retried.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SeedStatus {
    #[default]
    Pending,
    Loaded {
        count: usize,
        loaded_at: String,
    },
    Failed {
        error: String,
        failed_at: String,
    },
}

impl SeedStatus {
    pub fn loaded(count: usize) -> Self {
        SeedStatus::Loaded {
            count,
            loaded_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        SeedStatus::Failed {
            error: error.into(),
            failed_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SeedStatus::Failed { .. })
    }
}
