//! Periodic mutation of the demo dashboard's numeric labels.

use super::metrics::{parse_leading_number, replace_leading_number, MetricRange, Occupancy};
use crate::enums::TableStatus;
use crate::shared::config::MetricsConfig;
use crate::shared::surface::PageSurface;
use rand::Rng;

pub const OCCUPANCY_ID: &str = "occupied-count";
pub const AVG_TIME_ID: &str = "avg-time";
pub const TABLE_SELECTOR: &str = ".demo-table";
pub const TABLE_TIME_SELECTOR: &str = ".table-time";
pub const ORDER_TIME_SELECTOR: &str = ".order-time";

/// Ranges and step sizes used by [`MockDataUpdater::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricPolicy {
    pub occupancy: MetricRange,
    pub avg_time: MetricRange,
    pub elapsed: MetricRange,
    pub walk_step: u32,
    pub growth_step: u32,
}

impl From<&MetricsConfig> for MetricPolicy {
    fn from(config: &MetricsConfig) -> Self {
        Self {
            occupancy: config.occupancy,
            avg_time: config.avg_time,
            elapsed: config.elapsed,
            walk_step: config.walk_step,
            growth_step: config.growth_step,
        }
    }
}

/// What one tick touched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tables: usize,
    pub orders: usize,
    pub occupancy: Option<u32>,
    pub avg_time: Option<u32>,
}

#[derive(Clone)]
pub struct MockDataUpdater<S: PageSurface> {
    surface: S,
    policy: MetricPolicy,
}

impl<S: PageSurface> MockDataUpdater<S> {
    pub fn new(surface: S, policy: MetricPolicy) -> Self {
        Self { surface, policy }
    }

    pub fn policy(&self) -> &MetricPolicy {
        &self.policy
    }

    /// Advance every mock metric once. Missing elements are skipped.
    pub fn tick<R: Rng + ?Sized>(&self, rng: &mut R) -> TickReport {
        let report = TickReport {
            tables: self.grow_table_times(rng),
            orders: self.grow_order_times(rng),
            occupancy: self.walk_occupancy(rng),
            avg_time: self.walk_avg_time(rng),
        };
        log::debug!("mock tick: {:?}", report);
        report
    }

    fn grow_label<R: Rng + ?Sized>(&self, label: &S::Element, rng: &mut R) -> bool {
        let text = self.surface.text(label);
        let Some(current) = parse_leading_number(&text) else {
            return false;
        };
        let step = rng.gen_range(0..=self.policy.growth_step);
        let next = self.policy.elapsed.grow(current, step);
        match replace_leading_number(&text, next) {
            Some(updated) => {
                self.surface.set_text(label, &updated);
                true
            }
            None => false,
        }
    }

    fn grow_table_times<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let occupied = format!("{}.{}", TABLE_SELECTOR, TableStatus::OCCUPIED_CLASS);
        self.surface
            .query_all(&occupied)
            .iter()
            .filter_map(|table| self.surface.query_within(table, TABLE_TIME_SELECTOR))
            .filter(|label| self.grow_label(label, rng))
            .count()
    }

    fn grow_order_times<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.surface
            .query_all(ORDER_TIME_SELECTOR)
            .iter()
            .filter(|label| self.grow_label(label, rng))
            .count()
    }

    fn random_delta<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let step = i64::from(self.policy.walk_step);
        rng.gen_range(-step..=step)
    }

    fn walk_occupancy<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u32> {
        let label = self.surface.by_id(OCCUPANCY_ID)?;
        let mut occupancy = Occupancy::parse(&self.surface.text(&label))?;
        let delta = self.random_delta(rng);
        occupancy.occupied = self.policy.occupancy.walk(occupancy.occupied, delta);
        self.surface.set_text(&label, &occupancy.label());
        Some(occupancy.occupied)
    }

    fn walk_avg_time<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<u32> {
        let label = self.surface.by_id(AVG_TIME_ID)?;
        let text = self.surface.text(&label);
        let current = parse_leading_number(&text)?;
        let delta = self.random_delta(rng);
        let next = self.policy.avg_time.walk(current, delta);
        self.surface.set_text(&label, &replace_leading_number(&text, next)?);
        Some(next)
    }

    /// Shift the occupancy counter by one table, clamped to its range
    pub fn nudge_occupancy(&self, delta: i32) -> Option<u32> {
        let label = self.surface.by_id(OCCUPANCY_ID)?;
        let mut occupancy = Occupancy::parse(&self.surface.text(&label))?;
        occupancy.occupied = self.policy.occupancy.walk(occupancy.occupied, i64::from(delta));
        self.surface.set_text(&label, &occupancy.label());
        Some(occupancy.occupied)
    }
}
