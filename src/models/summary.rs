use chrono::NaiveDate;

use super::{daily, resolution_rate, share_pct, status, Dataset};

/// A day singled out in the metric row, with its deviation from the
/// daily average.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCallout {
    pub date: NaiveDate,
    pub count: u64,
    pub delta_pct: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlineMetrics {
    pub total: u64,
    pub daily_average: f64,
    pub closed: u64,
    pub resolution_rate: f64,
    pub median_response_hours: f64,
    pub peak: Option<DayCallout>,
    pub low: Option<DayCallout>,
}

impl HeadlineMetrics {
    pub fn compute(data: &Dataset) -> Self {
        let total = data.grand_total;
        let daily_average = if data.daily.is_empty() {
            0.0
        } else {
            total as f64 / data.daily.len() as f64
        };
        let closed = status::closed(&data.statuses);
        let callout = |d: &daily::DailyVolume| DayCallout {
            date: d.date,
            count: d.count,
            delta_pct: if daily_average > 0.0 {
                (d.count as f64 / daily_average - 1.0) * 100.0
            } else {
                0.0
            },
        };
        Self {
            total,
            daily_average,
            closed,
            resolution_rate: resolution_rate(closed, total),
            median_response_hours: data.median_response_hours,
            peak: daily::peak(&data.daily).map(callout),
            low: daily::low(&data.daily).map(callout),
        }
    }
}

/// Share of all requests taken by the largest complaint type.
pub fn leading_complaint_share(data: &Dataset) -> Option<(&str, f64)> {
    data.complaints
        .iter()
        .max_by_key(|c| c.count)
        .map(|c| (c.name.as_str(), share_pct(c.count, data.grand_total)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn headline_numbers() {
        let data = Dataset::load().unwrap();
        let m = HeadlineMetrics::compute(&data);
        assert_eq!(m.total, 332_102);
        assert_eq!(m.daily_average.round(), 10_713.0);
        assert_eq!(m.closed, 301_350);
        assert_eq!(m.resolution_rate, 90.7);
        assert_eq!(m.median_response_hours, 3.5);

        let peak = m.peak.unwrap();
        assert_eq!(peak.date.day(), 15);
        assert_eq!(peak.delta_pct.round(), 53.0);
        let low = m.low.unwrap();
        assert_eq!(low.date.day(), 25);
        assert_eq!(low.delta_pct.round(), -42.0);
    }

    #[test]
    fn heat_leads() {
        let data = Dataset::load().unwrap();
        let (name, share) = leading_complaint_share(&data).unwrap();
        assert_eq!(name, "Heat/Hot Water");
        assert_eq!(share.round(), 19.0);
    }
}
