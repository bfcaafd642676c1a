use super::figure::{Bar, Figure, Font, Marker, Values};
use super::theme;
use crate::format;
use crate::models::borough::BoroughTopIssue;

const HIGHLIGHT_ISSUE: &str = "Noise-Residential";

/// One bar per borough sized by its top complaint, labelled with the
/// complaint and its share of the borough.
pub fn borough_top_issue(rows: &[BoroughTopIssue]) -> Figure {
    let mut fig = Figure::new();
    for row in rows {
        let color = if row.issue == HIGHLIGHT_ISSUE { theme::ACCENT } else { theme::PRIMARY };
        let mut bar = Bar::horizontal(Values::counts([&row.count]), Values::labels([row.borough.as_str()]));
        bar.marker = Some(Marker::color(color));
        bar.text = Some(format!("{} ({})", row.issue, format::percent(row.share_pct, 0)).into());
        bar.textposition = Some("inside".to_string());
        bar.textfont = Some(Font::sized(10.0, "white"));
        bar.hovertemplate = Some(format!(
            "{}<br>{}: {}<extra></extra>",
            row.borough,
            row.issue,
            format::thousands(row.count)
        ));
        fig.push(bar);
    }
    theme::apply_minimal_layout(fig, None, 220)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dataset;

    #[test]
    fn labels_and_highlight() {
        let data = Dataset::load().unwrap();
        let v = serde_json::to_value(borough_top_issue(&data.borough_top_issues)).unwrap();
        assert_eq!(v["data"][0]["text"], "Noise-Residential (39%)");
        assert_eq!(v["data"][0]["marker"]["color"], theme::ACCENT);
        assert_eq!(v["data"][4]["text"], "Illegal Parking (12%)");
        assert_eq!(v["data"][4]["marker"]["color"], theme::PRIMARY);
        assert!(v["layout"].get("title").is_none());
    }
}
