//! Chart builders: each maps a table (or slice of one) to a plotly figure
//! carrying the shared minimal theme.

pub mod complaints;
pub mod figure;
pub mod geography;
pub mod performance;
pub mod sparkline;
pub mod temporal;
pub mod theme;

use std::str::FromStr;

use serde::Serialize;

use crate::models::Dataset;
pub use figure::Figure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureId {
    DailyTrend,
    Complaints,
    Channels,
    Agencies,
    Boroughs,
    WeeklyHeatmap,
    WeekdayAverage,
    BoroughTopIssue,
}

impl FigureId {
    /// Page order.
    pub const ALL: [FigureId; 8] = [
        FigureId::DailyTrend,
        FigureId::Complaints,
        FigureId::Channels,
        FigureId::Agencies,
        FigureId::Boroughs,
        FigureId::WeeklyHeatmap,
        FigureId::WeekdayAverage,
        FigureId::BoroughTopIssue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FigureId::DailyTrend => "daily-trend",
            FigureId::Complaints => "complaints",
            FigureId::Channels => "channels",
            FigureId::Agencies => "agencies",
            FigureId::Boroughs => "boroughs",
            FigureId::WeeklyHeatmap => "weekly-heatmap",
            FigureId::WeekdayAverage => "weekday-average",
            FigureId::BoroughTopIssue => "borough-top-issue",
        }
    }

    pub fn build(self, data: &Dataset) -> Figure {
        match self {
            FigureId::DailyTrend => temporal::daily_trend(&data.daily),
            FigureId::Complaints => complaints::complaint_breakdown(&data.complaints),
            FigureId::Channels => complaints::channel_share(&data.channels),
            FigureId::Agencies => performance::agency_performance(&data.agencies),
            FigureId::Boroughs => performance::borough_volume(&data.boroughs),
            FigureId::WeeklyHeatmap => temporal::weekly_heatmap(&data.daily),
            FigureId::WeekdayAverage => temporal::weekday_average(&data.daily),
            FigureId::BoroughTopIssue => geography::borough_top_issue(&data.borough_top_issues),
        }
    }
}

impl FromStr for FigureId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FigureId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedFigure {
    pub id: &'static str,
    pub figure: Figure,
}

pub fn build_all(data: &Dataset) -> Vec<NamedFigure> {
    FigureId::ALL
        .iter()
        .map(|&id| NamedFigure { id: id.as_str(), figure: id.build(data) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for id in FigureId::ALL {
            assert_eq!(id.as_str().parse::<FigureId>(), Ok(id));
        }
        assert!("pie-chart".parse::<FigureId>().is_err());
    }

    #[test]
    fn every_figure_has_data_and_white_background() {
        let data = Dataset::load().unwrap();
        let figures = build_all(&data);
        assert_eq!(figures.len(), FigureId::ALL.len());
        for named in &figures {
            assert!(!named.figure.data.is_empty(), "{} has no traces", named.id);
            assert_eq!(named.figure.layout.paper_bgcolor.as_deref(), Some("white"));
            assert_eq!(named.figure.layout.showlegend, Some(false));
        }
    }
}
