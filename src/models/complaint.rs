use serde::Serialize;

use super::{check_closed, resolution_rate, DataError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplaintType {
    pub name: String,
    pub count: u64,
    pub closed: u64,
    pub open: u64,
    pub resolution_rate: f64,
}

impl ComplaintType {
    pub fn new(name: &str, count: u64, closed: u64) -> Result<Self, DataError> {
        check_closed("complaint", name, closed, count)?;
        Ok(Self {
            name: name.to_string(),
            count,
            closed,
            open: count - closed,
            resolution_rate: resolution_rate(closed, count),
        })
    }
}

/// The `n` largest complaint types, returned smallest first so a horizontal
/// bar chart draws the largest at the top.
pub fn top_ascending(rows: &[ComplaintType], n: usize) -> Vec<&ComplaintType> {
    let mut sorted: Vec<&ComplaintType> = rows.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));
    sorted.truncate(n);
    sorted.reverse();
    sorted
}

pub fn lowest_resolution(rows: &[ComplaintType]) -> Option<&ComplaintType> {
    rows.iter()
        .min_by(|a, b| a.resolution_rate.total_cmp(&b.resolution_rate))
}
