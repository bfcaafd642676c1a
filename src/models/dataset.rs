use chrono::NaiveDate;

use super::agency::Agency;
use super::borough::{Borough, BoroughComplaint, BoroughTopIssue};
use super::channel::{self, Channel};
use super::complaint::ComplaintType;
use super::daily::{self, DailyVolume};
use super::embedded;
use super::status::StatusCount;
use super::DataError;

/// Every table shown on the dashboard.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub month_start: NaiveDate,
    pub grand_total: u64,
    pub median_response_hours: f64,
    pub daily: Vec<DailyVolume>,
    pub complaints: Vec<ComplaintType>,
    pub agencies: Vec<Agency>,
    pub boroughs: Vec<Borough>,
    pub borough_complaints: Vec<BoroughComplaint>,
    pub borough_top_issues: Vec<BoroughTopIssue>,
    pub channels: Vec<Channel>,
    pub statuses: Vec<StatusCount>,
}

impl Dataset {
    /// Build the tables from the embedded literals, deriving every computed
    /// column. Fails only if a literal breaks a row invariant.
    pub fn load() -> Result<Self, DataError> {
        let month_start = month_start(embedded::MONTH_START)?;

        let daily = daily::from_counts(month_start, &embedded::DAILY_COUNTS)?;
        if daily.is_empty() {
            return Err(DataError::EmptyTable { table: "daily" });
        }

        let complaints = embedded::COMPLAINTS
            .iter()
            .map(|&(name, count, closed)| ComplaintType::new(name, count, closed))
            .collect::<Result<Vec<_>, _>>()?;

        let agencies = embedded::AGENCIES
            .iter()
            .map(|&(code, name, count, closed, hours)| Agency::new(code, name, count, closed, hours))
            .collect::<Result<Vec<_>, _>>()?;

        let boroughs = embedded::BOROUGHS
            .iter()
            .map(|&(name, count, closed, hours)| Borough::new(name, count, closed, hours))
            .collect::<Result<Vec<_>, _>>()?;

        let borough_complaints = embedded::BOROUGH_COMPLAINTS
            .iter()
            .map(|&(borough, complaint, count)| BoroughComplaint {
                borough: borough.to_string(),
                complaint: complaint.to_string(),
                count,
            })
            .collect();

        let borough_top_issues = embedded::BOROUGH_TOP_ISSUES
            .iter()
            .map(|&(borough, issue, count)| BoroughTopIssue::new(borough, issue, count, &boroughs))
            .collect();

        let statuses = embedded::STATUSES
            .iter()
            .map(|&(status, count)| StatusCount::new(status, count))
            .collect();

        Ok(Self {
            month_start,
            grand_total: embedded::GRAND_TOTAL,
            median_response_hours: embedded::MEDIAN_RESPONSE_HOURS,
            daily,
            complaints,
            agencies,
            boroughs,
            borough_complaints,
            borough_top_issues,
            channels: channel::with_shares(embedded::CHANNELS),
            statuses,
        })
    }

    /// `"December 2025"`.
    pub fn month_label(&self) -> String {
        self.month_start.format("%B %Y").to_string()
    }
}

fn month_start((year, month, day): (i32, u32, u32)) -> Result<NaiveDate, DataError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DataError::InvalidMonthStart { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_every_table() {
        let data = Dataset::load().unwrap();
        assert_eq!(data.daily.len(), 31);
        assert_eq!(data.complaints.len(), 15);
        assert_eq!(data.agencies.len(), 10);
        assert_eq!(data.boroughs.len(), 5);
        assert_eq!(data.borough_complaints.len(), 7);
        assert_eq!(data.borough_top_issues.len(), 5);
        assert_eq!(data.channels.len(), 4);
        assert_eq!(data.statuses.len(), 4);
        assert_eq!(data.month_label(), "December 2025");
    }

    #[test]
    fn invalid_month_start_is_its_own_error() {
        assert_eq!(
            month_start((2025, 2, 30)),
            Err(DataError::InvalidMonthStart { year: 2025, month: 2, day: 30 })
        );
        assert_eq!(month_start((2025, 12, 1)), Ok(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()));
    }

    #[test]
    fn reload_is_identical() {
        let a = Dataset::load().unwrap();
        let b = Dataset::load().unwrap();
        assert_eq!(a.complaints, b.complaints);
        assert_eq!(a.daily, b.daily);
    }
}
