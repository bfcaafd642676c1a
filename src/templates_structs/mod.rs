// Template context structures for Askama templates and JSON response bodies.

use crate::config::AppConfig;

/// Common context shared by every rendered page.
/// Templates access these as `ctx.app_name`, `ctx.plotly_src`, etc.
pub struct PageContext {
    pub app_name: String,
    pub page_title: String,
    pub plotly_src: String,
}

impl PageContext {
    pub fn new(config: &AppConfig, page_title: &str) -> Self {
        Self {
            app_name: "NYC 311 Dashboard".to_string(),
            page_title: page_title.to_string(),
            plotly_src: config.plotly_src.clone(),
        }
    }
}

mod api;
mod dashboard;

pub use self::api::ApiErrorResponse;
pub use self::dashboard::{BoroughResponseRow, DashboardTemplate, MetricCard, StatusRow};
