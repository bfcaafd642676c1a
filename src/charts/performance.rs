use super::figure::{Annotation, Axis, Bar, Figure, Font, Line, Marker, Scatter, Shape, Values};
use super::theme;
use crate::format;
use crate::models::agency::{self, Agency, ResponseBand};
use crate::models::borough::{self, Borough};

const PANEL_GAP: f64 = 0.15;
const VOLUME_PANEL_SHARE: f64 = 0.6;
const REFERENCE_HOURS: f64 = 24.0;

fn band_color(band: ResponseBand) -> &'static str {
    match band {
        ResponseBand::Fast => theme::SUCCESS,
        ResponseBand::Slow => theme::ACCENT,
        ResponseBand::Typical => theme::SECONDARY,
    }
}

/// Side-by-side panels: request volume per agency and its median response,
/// with a dotted one-day reference line on the response panel.
pub fn agency_performance(rows: &[Agency]) -> Figure {
    let sorted = agency::sorted_by_count_ascending(rows);
    let names = Values::labels(sorted.iter().map(|a| a.name.as_str()));

    let mut volume = Bar::horizontal(Values::counts(sorted.iter().map(|a| &a.count)), names.clone());
    volume.marker = Some(Marker::color(theme::PRIMARY));
    volume.text = Some(sorted.iter().map(|a| format::thousands(a.count)).collect::<Vec<_>>().into());
    volume.textposition = Some("outside".to_string());
    volume.textfont = Some(Font::size(9.0));
    volume.hovertemplate = Some("%{y}: %{x:,.0f} requests<extra></extra>".to_string());

    let mut response = Scatter::new(names, "markers+text");
    response.x = Some(Values::numbers(sorted.iter().map(|a| a.median_hours)));
    response.marker = Some(Marker {
        color: Some(
            sorted
                .iter()
                .map(|a| band_color(a.response_band()).to_string())
                .collect::<Vec<_>>()
                .into(),
        ),
        size: Some(12.0),
    });
    response.text = Some(
        sorted
            .iter()
            .map(|a| format!("{:.1}", a.median_hours))
            .collect::<Vec<_>>()
            .into(),
    );
    response.textposition = Some("middle right".into());
    response.textfont = Some(Font::size(9.0));
    response.hovertemplate = Some("%{y}: %{x:.1f} hrs median<extra></extra>".to_string());
    response.xaxis = Some("x2".to_string());
    response.yaxis = Some("y2".to_string());

    let mut fig = Figure::new().with_trace(volume).with_trace(response);

    let usable = 1.0 - PANEL_GAP;
    let left = [0.0, usable * VOLUME_PANEL_SHARE];
    let right = [left[1] + PANEL_GAP, 1.0];
    fig.layout.xaxis = Some(Axis { domain: Some(left), anchor: Some("y".to_string()), ..Default::default() });
    fig.layout.yaxis = Some(Axis { anchor: Some("x".to_string()), ..Default::default() });
    fig.layout.xaxis2 = Some(Axis { domain: Some(right), anchor: Some("y2".to_string()), ..Default::default() });
    fig.layout.yaxis2 = Some(Axis { anchor: Some("x2".to_string()), ..Default::default() });

    for (text, domain) in [("Request Volume", left), ("Median Response (hrs)", right)] {
        let mut a = Annotation::text_at((domain[0] + domain[1]) / 2.0, 1.0, text);
        a.xref = Some("paper".to_string());
        a.yref = Some("paper".to_string());
        a.xanchor = Some("center".to_string());
        a.yanchor = Some("bottom".to_string());
        a.font = Some(Font::size(12.0));
        fig.layout.annotations.push(a);
    }

    let mut reference = Shape::vertical(
        REFERENCE_HOURS,
        "x2",
        Line { color: Some(theme::RULE.to_string()), width: None, dash: Some("dot".to_string()) },
    );
    reference.yref = "y2 domain".to_string();
    fig.layout.shapes.push(reference);

    // Sits just above the last category row.
    let mut label = Annotation::text_at(REFERENCE_HOURS, sorted.len() as f64 - 0.5, "24h");
    label.xref = Some("x2".to_string());
    label.yref = Some("y2".to_string());
    label.font = Some(Font::sized(8.0, "#999"));
    fig.layout.annotations.push(label);

    theme::apply_minimal_layout(fig, Some("Agency Performance"), 350)
}

/// One bar per borough, smallest first, with resolution and median
/// response in the hover text.
pub fn borough_volume(rows: &[Borough]) -> Figure {
    let mut fig = Figure::new();
    for b in borough::sorted_by_count_ascending(rows) {
        let mut bar = Bar::horizontal(Values::counts([&b.count]), Values::labels([b.name.as_str()]));
        bar.marker = Some(Marker::color(theme::PRIMARY));
        bar.opacity = Some(0.8);
        bar.text = Some(format::thousands(b.count).into());
        bar.textposition = Some("outside".to_string());
        bar.textfont = Some(Font::size(9.0));
        bar.hovertemplate = Some(format!(
            "{}<br>Requests: {}<br>Resolution: {}<br>Median: {:.1}hrs<extra></extra>",
            b.name,
            format::thousands(b.count),
            format::percent(b.resolution_rate, 1),
            b.median_hours
        ));
        fig.push(bar);
    }
    theme::apply_minimal_layout(fig, Some("Borough Volume"), 250)
}
