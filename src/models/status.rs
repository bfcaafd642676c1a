use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

impl StatusCount {
    pub fn new(status: &str, count: u64) -> Self {
        Self { status: status.to_string(), count }
    }
}

pub fn total(rows: &[StatusCount]) -> u64 {
    rows.iter().map(|s| s.count).sum()
}

pub fn closed(rows: &[StatusCount]) -> u64 {
    rows.iter()
        .filter(|s| s.status.eq_ignore_ascii_case("closed"))
        .map(|s| s.count)
        .sum()
}
