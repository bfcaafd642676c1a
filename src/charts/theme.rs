//! Shared minimal styling: no background fill, no legend, light gridlines,
//! serif type. Applied to every dashboard figure.

use super::figure::{Axis, Figure, Font, Margin, Title};

pub const PRIMARY: &str = "#2c3e50";
pub const SECONDARY: &str = "#7f8c8d";
pub const ACCENT: &str = "#c0392b";
pub const SUCCESS: &str = "#27ae60";
pub const LIGHT: &str = "#ecf0f1";
pub const TEXT: &str = "#333333";

/// Intermediate greys for multi-segment bars.
pub const SLATE: &str = "#5d6d7e";
pub const PEWTER: &str = "#85929e";

pub const RULE: &str = "#ddd";
pub const GRID: &str = "#f5f5f5";
pub const FONT_FAMILY: &str = "Georgia, serif";

pub fn apply_minimal_layout(mut fig: Figure, title: Option<&str>, height: u32) -> Figure {
    let layout = &mut fig.layout;
    layout.title = title.map(|text| Title {
        text: text.to_string(),
        font: Some(Font::sized(14.0, TEXT)),
        x: Some(0.0),
    });
    layout.paper_bgcolor = Some("white".to_string());
    layout.plot_bgcolor = Some("white".to_string());
    layout.font = Some(Font {
        family: Some(FONT_FAMILY.to_string()),
        size: Some(11.0),
        color: Some(TEXT.into()),
    });
    layout.margin = Some(Margin {
        l: 40,
        r: 20,
        t: if title.is_some() { 40 } else { 20 },
        b: 40,
    });
    layout.height = Some(height);
    layout.showlegend = Some(false);
    layout.hovermode = Some("x unified".to_string());

    style_x(layout.xaxis.get_or_insert_with(Axis::default));
    style_y(layout.yaxis.get_or_insert_with(Axis::default));
    if let Some(axis) = layout.xaxis2.as_mut() {
        style_x(axis);
    }
    if let Some(axis) = layout.yaxis2.as_mut() {
        style_y(axis);
    }
    fig
}

/// The bare frame used by figures that hide both axes.
pub fn apply_bare_layout(mut fig: Figure, height: u32, margin: Margin) -> Figure {
    let layout = &mut fig.layout;
    layout.paper_bgcolor = Some("white".to_string());
    layout.plot_bgcolor = Some("white".to_string());
    layout.margin = Some(margin);
    layout.height = Some(height);
    layout.showlegend = Some(false);
    layout.xaxis = Some(Axis::hidden());
    layout.yaxis = Some(Axis::hidden());
    fig
}

fn style_x(axis: &mut Axis) {
    axis.showgrid = Some(false);
    axis.showline = Some(true);
    axis.linewidth = Some(1.0);
    axis.linecolor = Some(RULE.to_string());
    axis.tickfont = Some(Font::size(10.0));
}

fn style_y(axis: &mut Axis) {
    axis.showgrid = Some(true);
    axis.gridwidth = Some(1.0);
    axis.gridcolor = Some(GRID.to_string());
    axis.showline = Some(false);
    axis.tickfont = Some(Font::size(10.0));
}
