//! Arithmetic cross-checks over the embedded tables.
//!
//! Each check records a [`ConsistencyIssue`] instead of stopping, so one
//! report lists everything that disagrees.

use serde::Serialize;

use super::{borough, resolution_rate, Dataset};

const SHARE_TOLERANCE: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyIssue {
    pub table: &'static str,
    pub row: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsistencyReport {
    pub grand_total: u64,
    pub daily_total: u64,
    pub borough_total: u64,
    pub agency_total: u64,
    /// Requests the borough table does not attribute to any listed borough.
    pub unattributed_borough: u64,
    /// Requests handled by agencies outside the top-N agency table.
    pub unattributed_agency: u64,
    pub channel_share_sum: f64,
    pub issues: Vec<ConsistencyIssue>,
}

impl ConsistencyReport {
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

struct Issues(Vec<ConsistencyIssue>);

impl Issues {
    fn push(&mut self, table: &'static str, row: &str, message: String) {
        self.0.push(ConsistencyIssue { table, row: row.to_string(), message });
    }

    fn check_rate(&mut self, table: &'static str, row: &str, closed: u64, total: u64, rate: f64) {
        if closed > total {
            self.push(table, row, format!("closed {closed} exceeds total {total}"));
        }
        let expected = resolution_rate(closed, total);
        if (rate - expected).abs() > f64::EPSILON {
            self.push(table, row, format!("resolution rate {rate} != {expected}"));
        }
        if !(0.0..=100.0).contains(&rate) {
            self.push(table, row, format!("resolution rate {rate} out of range"));
        }
    }
}

pub fn check(data: &Dataset) -> ConsistencyReport {
    let mut issues = Issues(Vec::new());
    let grand_total = data.grand_total;

    for c in &data.complaints {
        if c.closed + c.open != c.count {
            issues.push(
                "complaint",
                &c.name,
                format!("closed {} + open {} != total {}", c.closed, c.open, c.count),
            );
        }
        issues.check_rate("complaint", &c.name, c.closed, c.count, c.resolution_rate);
    }
    for a in &data.agencies {
        issues.check_rate("agency", &a.code, a.closed, a.count, a.resolution_rate);
    }
    for b in &data.boroughs {
        issues.check_rate("borough", &b.name, b.closed, b.count, b.resolution_rate);
    }

    let daily_total: u64 = data.daily.iter().map(|d| d.count).sum();
    if daily_total != grand_total {
        issues.push("daily", "all", format!("daily sum {daily_total} != {grand_total}"));
    }

    let channel_total: u64 = data.channels.iter().map(|c| c.count).sum();
    if channel_total != grand_total {
        issues.push("channel", "all", format!("channel sum {channel_total} != {grand_total}"));
    }
    let channel_share_sum: f64 = data.channels.iter().map(|c| c.share_pct).sum();
    if (channel_share_sum - 100.0).abs() > SHARE_TOLERANCE {
        issues.push("channel", "all", format!("shares sum to {channel_share_sum:.2}"));
    }

    let status_total: u64 = data.statuses.iter().map(|s| s.count).sum();
    if status_total != grand_total {
        issues.push("status", "all", format!("status sum {status_total} != {grand_total}"));
    }

    // Borough and agency tables list the top rows only.
    let borough_total: u64 = data.boroughs.iter().map(|b| b.count).sum();
    if borough_total > grand_total {
        issues.push("borough", "all", format!("borough sum {borough_total} > {grand_total}"));
    }
    let agency_total: u64 = data.agencies.iter().map(|a| a.count).sum();
    if agency_total > grand_total {
        issues.push("agency", "all", format!("agency sum {agency_total} > {grand_total}"));
    }

    for cell in &data.borough_complaints {
        match data.boroughs.iter().find(|b| b.name == cell.borough) {
            Some(b) if cell.count > b.count => issues.push(
                "borough_complaint",
                &format!("{} / {}", cell.borough, cell.complaint),
                format!("count {} exceeds borough total {}", cell.count, b.count),
            ),
            Some(_) => {}
            None => issues.push(
                "borough_complaint",
                &cell.borough,
                "unknown borough".to_string(),
            ),
        }
    }

    for top in &data.borough_top_issues {
        match data.boroughs.iter().find(|b| b.name == top.borough) {
            Some(b) if top.count > b.count => issues.push(
                "borough_top_issue",
                &top.borough,
                format!("count {} exceeds borough total {}", top.count, b.count),
            ),
            Some(_) => {}
            None => issues.push("borough_top_issue", &top.borough, "unknown borough".to_string()),
        }
        if let Some(largest) = borough::largest_complaint(&data.borough_complaints, &top.borough) {
            if largest.complaint != top.issue || largest.count != top.count {
                issues.push(
                    "borough_top_issue",
                    &top.borough,
                    format!(
                        "top issue {} ({}) disagrees with cross-tab {} ({})",
                        top.issue, top.count, largest.complaint, largest.count
                    ),
                );
            }
        }
    }

    ConsistencyReport {
        grand_total,
        daily_total,
        borough_total,
        agency_total,
        unattributed_borough: grand_total.saturating_sub(borough_total),
        unattributed_agency: grand_total.saturating_sub(agency_total),
        channel_share_sum,
        issues: issues.0,
    }
}
