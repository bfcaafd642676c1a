use serde::Serialize;

use super::{check_closed, resolution_rate, DataError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Agency {
    pub code: String,
    pub name: String,
    pub count: u64,
    pub closed: u64,
    pub median_hours: f64,
    pub resolution_rate: f64,
}

/// How an agency's median response compares with the day-scale targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseBand {
    Fast,
    Typical,
    Slow,
}

impl ResponseBand {
    pub fn of(median_hours: f64) -> Self {
        if median_hours < 10.0 {
            ResponseBand::Fast
        } else if median_hours > 40.0 {
            ResponseBand::Slow
        } else {
            ResponseBand::Typical
        }
    }
}

impl Agency {
    pub fn new(
        code: &str,
        name: &str,
        count: u64,
        closed: u64,
        median_hours: f64,
    ) -> Result<Self, DataError> {
        check_closed("agency", code, closed, count)?;
        Ok(Self {
            code: code.to_string(),
            name: name.to_string(),
            count,
            closed,
            median_hours,
            resolution_rate: resolution_rate(closed, count),
        })
    }

    pub fn response_band(&self) -> ResponseBand {
        ResponseBand::of(self.median_hours)
    }
}

pub fn sorted_by_count_ascending(rows: &[Agency]) -> Vec<&Agency> {
    let mut sorted: Vec<&Agency> = rows.iter().collect();
    sorted.sort_by_key(|a| a.count);
    sorted
}
