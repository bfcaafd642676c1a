use actix_web::{web, HttpResponse};

use crate::charts;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::format;
use crate::models::summary::{DayCallout, HeadlineMetrics};
use crate::models::{borough, insights, Dataset};
use crate::templates_structs::{
    BoroughResponseRow, DashboardTemplate, MetricCard, PageContext, StatusRow,
};

const HEADING: &str = "NYC 311 Service Requests";

fn day_card(label: &str, day: Option<&DayCallout>) -> MetricCard {
    match day {
        Some(d) => MetricCard {
            label: label.to_string(),
            value: format::month_day(d.date),
            delta: Some(format::signed_percent(d.delta_pct)),
            delta_up: d.delta_pct >= 0.0,
            caption: format!("{} requests", format::thousands(d.count)),
        },
        None => MetricCard {
            label: label.to_string(),
            value: "n/a".to_string(),
            delta: None,
            delta_up: true,
            caption: String::new(),
        },
    }
}

fn metric_cards(m: &HeadlineMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Total Requests".to_string(),
            value: format::thousands(m.total),
            delta: None,
            delta_up: true,
            caption: format!("{} daily avg", format::thousands_f64(m.daily_average)),
        },
        MetricCard {
            label: "Resolution Rate".to_string(),
            value: format::percent(m.resolution_rate, 1),
            delta: None,
            delta_up: true,
            caption: format!("{} closed", format::thousands(m.closed)),
        },
        MetricCard {
            label: "Median Response".to_string(),
            value: format::hours(m.median_response_hours),
            delta: None,
            delta_up: true,
            caption: "Varies by agency".to_string(),
        },
        day_card("Peak Day", m.peak.as_ref()),
        day_card("Low Day", m.low.as_ref()),
    ]
}

fn borough_rows(data: &Dataset) -> Vec<BoroughResponseRow> {
    borough::sorted_by_response(&data.boroughs)
        .into_iter()
        .enumerate()
        .map(|(i, b)| BoroughResponseRow {
            name: b.name.clone(),
            median: format::hours(b.median_hours),
            resolution: format::percent(b.resolution_rate, 1),
            fastest: i == 0,
        })
        .collect()
}

fn period_label(data: &Dataset) -> String {
    let first = data.daily.first().map(|d| d.date);
    let last = data.daily.last().map(|d| d.date);
    match (first, last) {
        (Some(a), Some(b)) => format!("{} {}-{}", a.format("%B"), a.format("%-d"), b.format("%-d, %Y")),
        _ => data.month_label(),
    }
}

pub async fn index(config: web::Data<AppConfig>) -> Result<HttpResponse, AppError> {
    // Tables are rebuilt on every render; nothing is shared between requests.
    let data = Dataset::load()?;
    let metrics = HeadlineMetrics::compute(&data);
    let figures = charts::build_all(&data);
    let figures_json = format::script_safe_json(&serde_json::to_string(&figures)?);

    let tmpl = DashboardTemplate {
        ctx: PageContext::new(&config, "NYC 311 Dashboard - Dec 2025"),
        heading: HEADING.to_string(),
        month_label: data.month_label(),
        total_display: format::thousands(data.grand_total),
        metrics: metric_cards(&metrics),
        statuses: data
            .statuses
            .iter()
            .map(|s| StatusRow { status: s.status.clone(), count: format::thousands(s.count) })
            .collect(),
        notes: insights::notable_patterns(&data),
        borough_rows: borough_rows(&data),
        insights: insights::geographic_insights(&data),
        period_label: period_label(&data),
        figures_json,
    };
    render(tmpl)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_metric_cards() {
        let data = Dataset::load().unwrap();
        let cards = metric_cards(&HeadlineMetrics::compute(&data));
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["332,102", "90.7%", "3.5 hrs", "Dec 15", "Dec 25"]);
        assert_eq!(cards[0].caption, "10,713 daily avg");
        assert_eq!(cards[1].caption, "301,350 closed");
        assert_eq!(cards[3].delta.as_deref(), Some("+53%"));
        assert!(cards[3].delta_up);
        assert_eq!(cards[4].delta.as_deref(), Some("-42%"));
        assert!(!cards[4].delta_up);
        assert_eq!(cards[4].caption, "6,216 requests");
    }

    #[test]
    fn borough_table_fastest_first() {
        let data = Dataset::load().unwrap();
        let rows = borough_rows(&data);
        assert_eq!(rows[0].name, "Brooklyn");
        assert!(rows[0].fastest);
        assert_eq!(rows[0].median, "2.9 hrs");
        assert_eq!(rows[0].resolution, "92.0%");
        assert_eq!(rows[4].name, "Staten Island");
        assert!(!rows[4].fastest);
    }

    #[test]
    fn period() {
        let data = Dataset::load().unwrap();
        assert_eq!(period_label(&data), "December 1-31, 2025");
    }
}
