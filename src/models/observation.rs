use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EpiError;

/// One reported day: a date plus the cumulative case count, if known.
///
/// A `None` count means the day is inside the reporting window but has no
/// published number yet (a future day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Reporting date
    pub date: NaiveDate,
    /// Cumulative case count, `None` if not yet reported
    pub count: Option<u64>,
}

impl Observation {
    /// Create an observation from an ISO `YYYY-MM-DD` date string.
    pub fn parse(date: &str, count: Option<u64>) -> Result<Self, EpiError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| EpiError::ParseError(format!("invalid date '{date}': {e}")))?;
        Ok(Self { date, count })
    }

    /// ISO `YYYY-MM-DD` label.
    pub fn label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short `DD.MM` label used on plot axes.
    pub fn short_label(&self) -> String {
        self.date.format("%d.%m").to_string()
    }

    /// Whether the count has been reported.
    pub fn is_reported(&self) -> bool {
        self.count.is_some()
    }
}
