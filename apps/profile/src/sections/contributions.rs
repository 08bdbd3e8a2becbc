//! Contribution grid: a fixed 52 × 7 calendar of per-day commit counts.
//!
//! The shape never depends on how much data arrived. An empty or failed event
//! fetch still yields 364 cells, all at level 0.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::format::plural;
use crate::models::github::EventRecord;

pub const WEEKS: usize = 52;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Serialize)]
pub struct ContributionCell {
    pub date: NaiveDate,
    pub count: u64,
    /// Intensity bucket 0–4 used for coloring.
    pub level: u8,
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContributionGrid {
    pub weeks: Vec<ContributionWeek>,
    pub total_commits: u64,
}

/// Builds the grid ending with the Sunday-first week that contains `today`.
/// Only push events contribute; each adds its commit count to its UTC day.
pub fn build_grid(events: &[EventRecord], today: NaiveDate) -> ContributionGrid {
    let mut per_day: HashMap<NaiveDate, u64> = HashMap::new();
    for event in events.iter().filter(|e| e.event_type == "PushEvent") {
        *per_day.entry(event.created_at.date_naive()).or_default() += event.commit_count();
    }

    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    let first_day = week_start - Duration::weeks(WEEKS as i64 - 1);

    let mut total_commits = 0;
    let weeks: Vec<ContributionWeek> = (0..WEEKS)
        .map(|w| ContributionWeek {
            days: (0..DAYS_PER_WEEK)
                .map(|d| {
                    let date = first_day + Duration::days((w * DAYS_PER_WEEK + d) as i64);
                    let count = per_day.get(&date).copied().unwrap_or(0);
                    total_commits += count;
                    ContributionCell {
                        date,
                        count,
                        level: level_for(count),
                        title: format!(
                            "{} on {}",
                            plural(count, "commit"),
                            date.format("%Y-%m-%d")
                        ),
                    }
                })
                .collect(),
        })
        .collect();

    ContributionGrid {
        weeks,
        total_commits,
    }
}

pub fn level_for(count: u64) -> u8 {
    match count {
        0 => 0,
        1..=2 => 1,
        3..=5 => 2,
        6..=9 => 3,
        _ => 4,
    }
}
