use chrono::{Datelike, Days, NaiveDate, Weekday};

use super::DataError;

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Request volume for one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyVolume {
    pub date: NaiveDate,
    pub count: u64,
    pub weekday: Weekday,
    pub iso_year: i32,
    pub iso_week: u32,
}

impl DailyVolume {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        let iso = date.iso_week();
        Self {
            date,
            count,
            weekday: date.weekday(),
            iso_year: iso.year(),
            iso_week: iso.week(),
        }
    }
}

pub fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// Mean daily count for one weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayAverage {
    pub weekday: Weekday,
    pub average: f64,
    pub days: usize,
}

/// One ISO week of the month, Monday first. Days outside the month are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekRow {
    pub label: String,
    pub iso_year: i32,
    pub iso_week: u32,
    pub cells: [Option<u64>; 7],
}

/// Consecutive days starting at `start`, one per count.
pub fn from_counts(start: NaiveDate, counts: &[u64]) -> Result<Vec<DailyVolume>, DataError> {
    counts
        .iter()
        .enumerate()
        .map(|(offset, &count)| {
            start
                .checked_add_days(Days::new(offset as u64))
                .map(|date| DailyVolume::new(date, count))
                .ok_or(DataError::DateOutOfRange { offset })
        })
        .collect()
}

pub fn total(days: &[DailyVolume]) -> u64 {
    days.iter().map(|d| d.count).sum()
}

/// Busiest day; the earliest wins a tie.
pub fn peak(days: &[DailyVolume]) -> Option<&DailyVolume> {
    days.iter()
        .fold(None, |best: Option<&DailyVolume>, d| match best {
            Some(b) if b.count >= d.count => Some(b),
            _ => Some(d),
        })
}

/// Quietest day; the earliest wins a tie.
pub fn low(days: &[DailyVolume]) -> Option<&DailyVolume> {
    days.iter()
        .fold(None, |best: Option<&DailyVolume>, d| match best {
            Some(b) if b.count <= d.count => Some(b),
            _ => Some(d),
        })
}

/// Monday-to-Sunday averages. Weekdays with no data are omitted.
pub fn weekday_averages(days: &[DailyVolume]) -> Vec<WeekdayAverage> {
    WEEKDAYS
        .iter()
        .filter_map(|&weekday| {
            let counts: Vec<u64> = days
                .iter()
                .filter(|d| d.weekday == weekday)
                .map(|d| d.count)
                .collect();
            if counts.is_empty() {
                return None;
            }
            let sum: u64 = counts.iter().sum();
            Some(WeekdayAverage {
                weekday,
                average: sum as f64 / counts.len() as f64,
                days: counts.len(),
            })
        })
        .collect()
}

/// Week-by-weekday matrix ordered chronologically by (ISO year, ISO week),
/// so a month-end week that belongs to the next ISO year stays last.
pub fn week_matrix(days: &[DailyVolume]) -> Vec<WeekRow> {
    let mut rows: Vec<WeekRow> = Vec::new();
    for day in days {
        let key = (day.iso_year, day.iso_week);
        let idx = match rows.iter().position(|r| (r.iso_year, r.iso_week) == key) {
            Some(i) => i,
            None => {
                rows.push(WeekRow {
                    label: String::new(),
                    iso_year: day.iso_year,
                    iso_week: day.iso_week,
                    cells: [None; 7],
                });
                rows.len() - 1
            }
        };
        let col = day.weekday.num_days_from_monday() as usize;
        rows[idx].cells[col] = Some(day.count);
    }
    rows.sort_by_key(|r| (r.iso_year, r.iso_week));
    for (i, row) in rows.iter_mut().enumerate() {
        row.label = format!("Week {}", i + 1);
    }
    rows
}

/// Three-letter weekday label, `"Mon"`.
pub fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::embedded::DAILY_COUNTS;

    fn december() -> Vec<DailyVolume> {
        let start = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        from_counts(start, &DAILY_COUNTS).unwrap()
    }

    #[test]
    fn derives_weekday_and_iso_week() {
        let days = december();
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].weekday, Weekday::Mon);
        assert_eq!(days[0].iso_week, 49);
        assert_eq!(days[30].iso_year, 2026);
        assert_eq!(days[30].iso_week, 1);
        assert!(is_weekend(days[5].weekday));
        assert!(!is_weekend(days[4].weekday));
    }

    #[test]
    fn peak_and_low_days() {
        let days = december();
        let peak = peak(&days).unwrap();
        assert_eq!(peak.date.day(), 15);
        assert_eq!(peak.count, 16388);
        let low = low(&days).unwrap();
        assert_eq!(low.date.day(), 25);
        assert_eq!(low.count, 6216);
    }

    #[test]
    fn ties_resolve_to_first_day() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let days = from_counts(start, &[5, 9, 9, 1, 1]).unwrap();
        assert_eq!(peak(&days).unwrap().date.day(), 2);
        assert_eq!(low(&days).unwrap().date.day(), 4);
    }

    #[test]
    fn empty_series() {
        assert!(peak(&[]).is_none());
        assert!(weekday_averages(&[]).is_empty());
        assert!(week_matrix(&[]).is_empty());
    }

    #[test]
    fn monday_average() {
        let avgs = weekday_averages(&december());
        assert_eq!(avgs.len(), 7);
        let monday = &avgs[0];
        assert_eq!(monday.weekday, Weekday::Mon);
        assert_eq!(monday.days, 5);
        let expected = (12304 + 12547 + 16388 + 10007 + 9452) as f64 / 5.0;
        assert!((monday.average - expected).abs() < 1e-9);
    }

    #[test]
    fn week_matrix_is_chronological() {
        let rows = week_matrix(&december());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].label, "Week 1");
        assert_eq!(rows[0].iso_week, 49);
        assert_eq!(rows[0].cells[0], Some(12304));
        let last = &rows[4];
        assert_eq!((last.iso_year, last.iso_week), (2026, 1));
        assert_eq!(last.cells[0], Some(9452));
        assert_eq!(last.cells[2], Some(8761));
        assert_eq!(last.cells[3], None);
    }

    #[test]
    fn matrix_preserves_every_count() {
        let days = december();
        let sum: u64 = week_matrix(&days)
            .iter()
            .flat_map(|r| r.cells.iter().flatten())
            .sum();
        assert_eq!(sum, total(&days));
    }
}
