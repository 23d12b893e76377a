//! Availability sources for plan generation.
//!
//! The planner only needs a list of [`TimeBlock`]s; where they come from is
//! behind the [`AvailabilitySource`] seam. The shipped implementation is a
//! synthetic weekday/weekend rule standing in for a real calendar feed.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};

use crate::config::{ConfigError, PlannerConfig};
use crate::models::TimeBlock;

/// Anything that can produce free time blocks for a date range.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// Availability over the inclusive range `[start, end]`, in date order.
    /// A reversed range yields an empty list.
    async fn availability(&self, start: NaiveDate, end: NaiveDate) -> Vec<TimeBlock>;
}

/// Fake calendar: one fixed block per day.
///
/// Weekdays get an evening slot, weekends an afternoon slot. Slot times come
/// from [`PlannerConfig`].
#[derive(Debug, Clone)]
pub struct SyntheticCalendar {
    weekday: (NaiveTime, NaiveTime),
    weekend: (NaiveTime, NaiveTime),
}

impl SyntheticCalendar {
    pub fn from_config(config: &PlannerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            weekday: config.weekday_slot()?,
            weekend: config.weekend_slot()?,
        })
    }
}

#[async_trait]
impl AvailabilitySource for SyntheticCalendar {
    async fn availability(&self, start: NaiveDate, end: NaiveDate) -> Vec<TimeBlock> {
        start
            .iter_days()
            .take_while(|d| *d <= end)
            .map(|d| {
                let (slot_start, slot_end) = if is_weekend(d) {
                    self.weekend
                } else {
                    self.weekday
                };
                TimeBlock::new(d, slot_start, slot_end)
            })
            .collect()
    }
}

fn is_weekend(d: NaiveDate) -> bool {
    matches!(d.weekday(), Weekday::Sat | Weekday::Sun)
}
