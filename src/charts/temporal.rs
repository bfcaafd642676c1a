use super::figure::{Annotation, Bar, Figure, Font, Heatmap, Line, Marker, Shape, Values};
use super::sparkline::sparkline;
use super::theme;
use crate::format;
use crate::models::daily::{self, DailyVolume};

pub fn daily_trend(days: &[DailyVolume]) -> Figure {
    let counts: Vec<f64> = days.iter().map(|d| d.count as f64).collect();
    sparkline(&counts, 60, theme::PRIMARY)
}

/// Week rows by weekday columns; darker cells carry more requests.
pub fn weekly_heatmap(days: &[DailyVolume]) -> Figure {
    let rows = daily::week_matrix(days);
    let z: Vec<Vec<Option<f64>>> = rows
        .iter()
        .map(|r| r.cells.iter().map(|c| c.map(|v| v as f64)).collect())
        .collect();
    let text: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            r.cells
                .iter()
                .map(|c| c.map(format::thousands).unwrap_or_default())
                .collect()
        })
        .collect();

    let heatmap = Heatmap {
        z,
        x: daily::WEEKDAYS.iter().map(|&w| daily::short_name(w).to_string()).collect(),
        y: rows.iter().map(|r| r.label.clone()).collect(),
        colorscale: vec![
            (0.0, "#f7f7f7".to_string()),
            (0.5, "#a8c4db".to_string()),
            (1.0, theme::PRIMARY.to_string()),
        ],
        showscale: false,
        text,
        texttemplate: "%{text}".to_string(),
        textfont: Some(Font::size(10.0)),
        hovertemplate: Some("%{y}, %{x}<br>%{z:,.0f} requests<extra></extra>".to_string()),
    };

    theme::apply_minimal_layout(
        Figure::new().with_trace(heatmap),
        Some("Daily Volume by Week (darker = more requests)"),
        220,
    )
}

/// Mean volume per weekday, weekends muted, with the overall mean drawn
/// as a dotted rule.
pub fn weekday_average(days: &[DailyVolume]) -> Figure {
    let averages = daily::weekday_averages(days);

    let mut bar = Bar::new(
        Values::labels(averages.iter().map(|a| daily::short_name(a.weekday))),
        Values::numbers(averages.iter().map(|a| a.average)),
    );
    bar.marker = Some(Marker::color(
        averages
            .iter()
            .map(|a| {
                let color = if daily::is_weekend(a.weekday) {
                    theme::SECONDARY
                } else {
                    theme::PRIMARY
                };
                color.to_string()
            })
            .collect::<Vec<_>>(),
    ));
    bar.text = Some(
        averages
            .iter()
            .map(|a| format::thousands_f64(a.average))
            .collect::<Vec<_>>()
            .into(),
    );
    bar.textposition = Some("outside".to_string());
    bar.textfont = Some(Font::size(9.0));
    bar.hovertemplate = Some("%{x}: %{y:,.0f} avg<extra></extra>".to_string());

    let mut fig = Figure::new().with_trace(bar);

    if !averages.is_empty() {
        let mean = averages.iter().map(|a| a.average).sum::<f64>() / averages.len() as f64;
        fig.layout.shapes.push(Shape::horizontal(
            mean,
            "y",
            Line { color: Some("#ccc".to_string()), width: None, dash: Some("dot".to_string()) },
        ));
        let mut label = Annotation::text_at(1.0, mean, format!("avg: {}", format::thousands_f64(mean)));
        label.xref = Some("paper".to_string());
        label.yref = Some("y".to_string());
        label.xanchor = Some("left".to_string());
        fig.layout.annotations.push(label);
    }

    theme::apply_minimal_layout(fig, Some("Avg Volume by Day"), 220)
}
