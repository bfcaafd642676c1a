//! Short written observations placed beside the charts. Figures in the
//! text are taken from the tables where the tables carry them; the rest
//! come from the wider December extract and are fixed text.

use super::{borough, complaint, share_pct, summary, Dataset};
use crate::format;

/// A bullet with a bold lead phrase.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub emphasis: String,
    pub text: String,
}

impl Note {
    fn new(emphasis: impl Into<String>, text: impl Into<String>) -> Self {
        Self { emphasis: emphasis.into(), text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InsightSection {
    pub headline: Note,
    pub bullets: Vec<String>,
}

pub fn notable_patterns(data: &Dataset) -> Vec<Note> {
    let mut notes = Vec::new();
    if let Some((name, share)) = summary::leading_complaint_share(data) {
        notes.push(Note::new(
            name,
            format!("dominates ({}), a typical winter pattern", format::percent(share, 0)),
        ));
    }
    notes.push(Note::new("Noise complaints", "resolve fastest (<2 hrs median)"));
    if let Some(worst) = complaint::lowest_resolution(&data.complaints) {
        notes.push(Note::new(
            worst.name.clone(),
            format!("has lowest resolution ({})", format::percent(worst.resolution_rate, 0)),
        ));
    }
    notes.push(Note::new("Helicopter Noise", "gets 0% resolution (routed to EDC)"));
    notes
}

/// The population share is a census figure for the Bronx alone.
fn volume_lead_text(borough: &str) -> &'static str {
    if borough == "Bronx" {
        "despite having ~17% of NYC population:"
    } else {
        "by request volume:"
    }
}

pub fn geographic_insights(data: &Dataset) -> Vec<InsightSection> {
    let mut sections = Vec::new();
    let by_response = borough::sorted_by_response(&data.boroughs);
    let fastest = by_response.first().copied();
    let busiest = data.boroughs.iter().max_by_key(|b| b.count);

    if let Some(b) = busiest {
        let mut bullets = vec![format!(
            "{} requests ({} of total)",
            format::thousands(b.count),
            format::percent(share_pct(b.count, data.grand_total), 0)
        )];
        if let Some(top) = data.borough_top_issues.iter().find(|t| t.borough == b.name) {
            bullets.push(format!(
                "{} dominates ({} of {} requests)",
                top.issue,
                format::percent(top.share_pct, 0),
                b.name
            ));
        }
        if let Some(f) = fastest.filter(|f| f.name != b.name) {
            bullets.push(format!(
                "Slower median response ({} vs {} in {})",
                format::hours(b.median_hours),
                format::hours(f.median_hours),
                f.name
            ));
        }
        sections.push(InsightSection {
            headline: Note::new(format!("{} leads in volume", b.name), volume_lead_text(&b.name)),
            bullets,
        });
    }

    if let Some(f) = fastest {
        let mut bullets = vec![format!(
            "High volume ({}) but efficient processing",
            format::thousands(f.count)
        )];
        if let Some(top) = data.borough_top_issues.iter().find(|t| t.borough == f.name) {
            bullets.push(format!("{} is top issue", top.issue));
        }
        sections.push(InsightSection {
            headline: Note::new(
                format!("{} has fastest response", f.name),
                format!("({:.1} hr median):", f.median_hours),
            ),
            bullets,
        });
    }

    sections.push(InsightSection {
        headline: Note::new("Manhattan encampment complaints", "are notable:"),
        bullets: vec![
            "2,135 encampment reports (highest of any borough)".to_string(),
            "Vendor enforcement also concentrated here (1,192)".to_string(),
        ],
    });
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_use_table_figures() {
        let notes = notable_patterns(&Dataset::load().unwrap());
        assert_eq!(notes.len(), 4);
        assert_eq!(notes[0].emphasis, "Heat/Hot Water");
        assert!(notes[0].text.contains("(19%)"));
        assert_eq!(notes[2].emphasis, "Unsanitary Condition");
        assert!(notes[2].text.contains("(58%)"));
    }

    #[test]
    fn geographic_sections() {
        let sections = geographic_insights(&Dataset::load().unwrap());
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].headline.emphasis, "Bronx leads in volume");
        assert_eq!(sections[0].bullets[0], "96,322 requests (29% of total)");
        assert!(sections[0].bullets[1].contains("(39% of Bronx requests)"));
        assert!(sections[0].bullets[2].contains("22.4 hrs vs 2.9 hrs in Brooklyn"));
        assert_eq!(sections[0].headline.text, "despite having ~17% of NYC population:");
        assert_eq!(sections[1].headline.emphasis, "Brooklyn has fastest response");
        assert_eq!(sections[1].bullets[1], "Illegal Parking is top issue");
    }

    #[test]
    fn population_note_stays_with_the_bronx() {
        let mut data = Dataset::load().unwrap();
        let brooklyn = data.boroughs.iter_mut().find(|b| b.name == "Brooklyn").unwrap();
        brooklyn.count = 200_000;
        let sections = geographic_insights(&data);
        assert_eq!(sections[0].headline.emphasis, "Brooklyn leads in volume");
        assert_eq!(sections[0].headline.text, "by request volume:");
        assert!(sections.iter().all(|s| !s.headline.text.contains("population")));
    }
}
