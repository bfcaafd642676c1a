use serde::Serialize;

use super::share_pct;

/// Submission channel and its share of all requests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub name: String,
    pub count: u64,
    pub share_pct: f64,
}

/// Shares are computed against the sum of the given rows.
pub fn with_shares(rows: &[(&str, u64)]) -> Vec<Channel> {
    let total: u64 = rows.iter().map(|(_, c)| c).sum();
    rows.iter()
        .map(|&(name, count)| Channel {
            name: name.to_string(),
            count,
            share_pct: share_pct(count, total),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shares_sum_to_one_hundred() {
        let channels = with_shares(&[("Online", 3), ("Phone", 1)]);
        assert_eq!(channels[0].share_pct, 75.0);
        let sum: f64 = channels.iter().map(|c| c.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_total_gives_zero_shares() {
        let channels = with_shares(&[("Online", 0)]);
        assert_eq!(channels[0].share_pct, 0.0);
    }
}
