use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::features::reports::models::{FloodHeight, FloodReport};

/// Summary statistics over a set of reports
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStatistics {
    pub total_reports: i64,
    /// Total divided by the number of distinct report dates, one decimal
    pub avg_per_day: f64,
    pub most_common_height: Option<(FloodHeight, i64)>,
    pub most_affected_area: Option<(String, i64)>,
}

/// Computes summary statistics over a collection of reports.
///
/// Window selection (today / month / all-time) happens before this point as a
/// date filter on the store query; the aggregation itself is shared. When
/// several categories tie for the maximum count, the first one seen in input
/// order wins, so the result is deterministic for a given ordering.
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn summarize(reports: &[FloodReport]) -> ReportStatistics {
        let total_reports = reports.len() as i64;

        let distinct_days: HashSet<_> = reports.iter().map(|r| r.report_date).collect();
        let avg_per_day = if distinct_days.is_empty() {
            0.0
        } else {
            let avg = total_reports as f64 / distinct_days.len() as f64;
            (avg * 10.0).round() / 10.0
        };

        let most_common_height = most_common(reports.iter().map(|r| r.flood_height));
        let most_affected_area = most_common(reports.iter().map(|r| r.address.clone()));

        ReportStatistics {
            total_reports,
            avg_per_day,
            most_common_height,
            most_affected_area,
        }
    }
}

/// Most frequent value with its count, first-seen-wins on ties
fn most_common<K: Eq + Hash + Clone>(keys: impl Iterator<Item = K>) -> Option<(K, i64)> {
    let mut counts: HashMap<K, i64> = HashMap::new();
    let mut first_seen: Vec<K> = Vec::new();

    for key in keys {
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push(key);
        }
        *count += 1;
    }

    let mut best: Option<(K, i64)> = None;
    for key in first_seen {
        let count = counts[&key];
        match &best {
            Some((_, best_count)) if *best_count >= count => {}
            _ => best = Some((key, count)),
        }
    }

    best
}
