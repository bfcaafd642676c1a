use askama::Template;

use super::PageContext;
use crate::models::insights::{InsightSection, Note};

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub heading: String,
    pub month_label: String,
    pub total_display: String,
    pub metrics: Vec<MetricCard>,
    pub statuses: Vec<StatusRow>,
    pub notes: Vec<Note>,
    pub borough_rows: Vec<BoroughResponseRow>,
    pub insights: Vec<InsightSection>,
    pub period_label: String,
    /// `[{id, figure}, ...]`, already escaped for a `<script>` block.
    pub figures_json: String,
}

/// A headline number with an optional change indicator and a caption.
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: Option<String>,
    pub delta_up: bool,
    pub caption: String,
}

impl MetricCard {
    pub fn has_delta(&self) -> bool {
        self.delta.is_some()
    }

    pub fn delta_text(&self) -> &str {
        self.delta.as_deref().unwrap_or("")
    }
}

pub struct StatusRow {
    pub status: String,
    pub count: String,
}

pub struct BoroughResponseRow {
    pub name: String,
    pub median: String,
    pub resolution: String,
    /// The quickest borough is shown in bold.
    pub fastest: bool,
}
