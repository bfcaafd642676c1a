use super::figure::{Annotation, Axis, Bar, Figure, Font, Margin, Marker, Values};
use super::theme;
use crate::format;
use crate::models::channel::Channel;
use crate::models::complaint::{self, ComplaintType};

pub const TOP_COMPLAINTS: usize = 12;

/// Open segments narrower than this are left unlabelled.
const OPEN_LABEL_MIN: u64 = 500;
const RATE_LABEL_GAP: f64 = 1000.0;
const WELL_RESOLVED_PCT: f64 = 95.0;

/// Stacked closed/open bars for the largest complaint types, each labelled
/// with its resolution rate.
pub fn complaint_breakdown(rows: &[ComplaintType]) -> Figure {
    let top = complaint::top_ascending(rows, TOP_COMPLAINTS);
    let names = Values::labels(top.iter().map(|c| c.name.as_str()));
    let white = || Font::sized(10.0, "white");

    let mut closed = Bar::horizontal(Values::counts(top.iter().map(|c| &c.closed)), names.clone());
    closed.marker = Some(Marker::color(theme::PRIMARY));
    closed.text = Some(top.iter().map(|c| format::thousands(c.closed)).collect::<Vec<_>>().into());
    closed.textposition = Some("inside".to_string());
    closed.textfont = Some(white());
    closed.hovertemplate = Some("%{y}<br>Closed: %{x:,.0f}<extra></extra>".to_string());

    let mut open = Bar::horizontal(Values::counts(top.iter().map(|c| &c.open)), names);
    open.marker = Some(Marker::color(theme::ACCENT));
    open.text = Some(
        top.iter()
            .map(|c| {
                if c.open > OPEN_LABEL_MIN {
                    format::thousands(c.open)
                } else {
                    String::new()
                }
            })
            .collect::<Vec<_>>()
            .into(),
    );
    open.textposition = Some("inside".to_string());
    open.textfont = Some(white());
    open.hovertemplate = Some("%{y}<br>Open: %{x:,.0f}<extra></extra>".to_string());

    let mut fig = Figure::new().with_trace(closed).with_trace(open);
    fig.layout.barmode = Some("stack".to_string());
    fig.layout.xaxis = Some(Axis::titled("Requests"));
    fig.layout.annotations = top
        .iter()
        .map(|c| {
            let color = if c.resolution_rate >= WELL_RESOLVED_PCT {
                theme::SUCCESS
            } else {
                theme::ACCENT
            };
            let mut a = Annotation::text_at(
                c.count as f64 + RATE_LABEL_GAP,
                c.name.as_str(),
                format::percent(c.resolution_rate, 0),
            );
            a.xanchor = Some("left".to_string());
            a.font = Some(Font::sized(10.0, color));
            a
        })
        .collect();

    theme::apply_minimal_layout(fig, Some("Top 12 Complaint Types (with resolution %)"), 400)
}

/// Single 100% bar split by submission channel.
pub fn channel_share(channels: &[Channel]) -> Figure {
    let palette = [theme::PRIMARY, theme::SLATE, theme::PEWTER, theme::LIGHT];
    let mut fig = Figure::new();
    for (i, ch) in channels.iter().enumerate() {
        let color = palette[i.min(palette.len() - 1)];
        // The lightest segment needs dark text.
        let text_color = if i < palette.len() - 1 { "white" } else { theme::TEXT };
        let mut bar = Bar::horizontal(Values::numbers([ch.share_pct]), Values::labels([""]));
        bar.marker = Some(Marker::color(color));
        bar.text = Some(format!("{}<br>{}", ch.name, format::percent(ch.share_pct, 0)).into());
        bar.textposition = Some("inside".to_string());
        bar.textfont = Some(Font::sized(10.0, text_color));
        bar.hovertemplate = Some(format!(
            "{}: {} ({})<extra></extra>",
            ch.name,
            format::thousands(ch.count),
            format::percent(ch.share_pct, 1)
        ));
        fig.push(bar);
    }
    fig.layout.barmode = Some("stack".to_string());
    theme::apply_bare_layout(fig, 80, Margin::uniform(0))
}
