use serde::Serialize;

use super::{check_closed, resolution_rate, round1, share_pct, DataError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Borough {
    pub name: String,
    pub count: u64,
    pub closed: u64,
    pub median_hours: f64,
    pub resolution_rate: f64,
}

impl Borough {
    pub fn new(name: &str, count: u64, closed: u64, median_hours: f64) -> Result<Self, DataError> {
        check_closed("borough", name, closed, count)?;
        Ok(Self {
            name: name.to_string(),
            count,
            closed,
            median_hours,
            resolution_rate: resolution_rate(closed, count),
        })
    }
}

/// One cell of the sparse borough x complaint cross-tabulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoroughComplaint {
    pub borough: String,
    pub complaint: String,
    pub count: u64,
}

/// The most frequent complaint in a borough and its share of that
/// borough's requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoroughTopIssue {
    pub borough: String,
    pub issue: String,
    pub count: u64,
    pub share_pct: f64,
}

impl BoroughTopIssue {
    /// Share is taken against the matching borough's total; a borough with
    /// no volume row gets a share of 0.
    pub fn new(borough: &str, issue: &str, count: u64, boroughs: &[Borough]) -> Self {
        let total = boroughs
            .iter()
            .find(|b| b.name == borough)
            .map(|b| b.count)
            .unwrap_or(0);
        Self {
            borough: borough.to_string(),
            issue: issue.to_string(),
            count,
            share_pct: round1(share_pct(count, total)),
        }
    }
}

pub fn sorted_by_count_ascending(rows: &[Borough]) -> Vec<&Borough> {
    let mut sorted: Vec<&Borough> = rows.iter().collect();
    sorted.sort_by_key(|b| b.count);
    sorted
}

pub fn sorted_by_response(rows: &[Borough]) -> Vec<&Borough> {
    let mut sorted: Vec<&Borough> = rows.iter().collect();
    sorted.sort_by(|a, b| a.median_hours.total_cmp(&b.median_hours));
    sorted
}

/// Largest cross-tab entry for `borough`, if any were curated.
pub fn largest_complaint<'a>(
    cells: &'a [BoroughComplaint],
    borough: &str,
) -> Option<&'a BoroughComplaint> {
    cells
        .iter()
        .filter(|c| c.borough == borough)
        .max_by_key(|c| c.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boroughs() -> Vec<Borough> {
        vec![
            Borough::new("Bronx", 96322, 90309, 22.38).unwrap(),
            Borough::new("Brooklyn", 93503, 86062, 2.90).unwrap(),
            Borough::new("Staten Island", 11009, 10314, 22.77).unwrap(),
        ]
    }

    #[test]
    fn top_issue_share() {
        let b = boroughs();
        let bronx = BoroughTopIssue::new("Bronx", "Noise-Residential", 37472, &b);
        assert_eq!(bronx.share_pct, 38.9);
        let si = BoroughTopIssue::new("Staten Island", "Illegal Parking", 1331, &b);
        assert_eq!(si.share_pct, 12.1);
        let unknown = BoroughTopIssue::new("Atlantis", "Flooding", 5, &b);
        assert_eq!(unknown.share_pct, 0.0);
    }

    #[test]
    fn sorts_by_median_hours() {
        let b = boroughs();
        let names: Vec<&str> = sorted_by_response(&b).iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Brooklyn", "Bronx", "Staten Island"]);
    }

    #[test]
    fn largest_cross_tab_cell() {
        let cells = vec![
            BoroughComplaint { borough: "Bronx".into(), complaint: "Heat".into(), count: 3 },
            BoroughComplaint { borough: "Bronx".into(), complaint: "Noise".into(), count: 9 },
            BoroughComplaint { borough: "Queens".into(), complaint: "Parking".into(), count: 20 },
        ];
        assert_eq!(largest_complaint(&cells, "Bronx").unwrap().complaint, "Noise");
        assert!(largest_complaint(&cells, "Manhattan").is_none());
    }
}
