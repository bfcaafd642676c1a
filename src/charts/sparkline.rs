//! Word-sized line chart with the extreme points marked and labelled.

use super::figure::{Figure, Font, Line, Margin, Marker, Scatter, Values};
use super::theme;
use crate::format;

pub fn sparkline(values: &[f64], height: u32, color: &str) -> Figure {
    let mut line = Scatter::new(Values::numbers(values.iter().copied()), "lines");
    line.line = Some(Line {
        color: Some(color.to_string()),
        width: Some(1.5),
        dash: None,
    });
    line.hoverinfo = Some("skip".to_string());

    let mut fig = Figure::new().with_trace(line);

    if let (Some(min_idx), Some(max_idx)) = (argmin(values), argmax(values)) {
        let (min, max) = (values[min_idx], values[max_idx]);
        let mut marks = Scatter::new(Values::numbers([min, max]), "markers+text");
        marks.x = Some(Values::numbers([min_idx as f64, max_idx as f64]));
        marks.marker = Some(Marker {
            color: Some(vec![theme::ACCENT.to_string(), theme::SUCCESS.to_string()].into()),
            size: Some(6.0),
        });
        marks.text = Some(vec![format::thousands_f64(min), format::thousands_f64(max)].into());
        marks.textposition = Some(vec!["bottom center".to_string(), "top center".to_string()].into());
        marks.textfont = Some(Font::size(9.0));
        marks.hoverinfo = Some("skip".to_string());
        fig.push(marks);
    }

    theme::apply_bare_layout(fig, height, Margin::uniform(5))
}

/// Index of the first minimum.
fn argmin(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b <= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}

/// Index of the first maximum.
fn argmax(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(i, _)| i)
}
