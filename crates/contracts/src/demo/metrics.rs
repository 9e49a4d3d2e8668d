//! Mock metrics shown on the demo dashboard and the helpers that read and
//! rewrite their labels.
//!
//! Every metric has a range and every update is clamped into it. Growth
//! updates (elapsed minutes) never lower a value, so a label that already
//! sits at or beyond its ceiling keeps its value.

use serde::Deserialize;

/// Inclusive valid range of a mock metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MetricRange {
    pub min: u32,
    pub max: u32,
}

impl MetricRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn clamp(&self, value: i64) -> u32 {
        value.clamp(self.min as i64, self.max as i64) as u32
    }

    /// Random-walk update: `current + delta`, clamped into the range
    pub fn walk(&self, current: u32, delta: i64) -> u32 {
        self.clamp(i64::from(current).saturating_add(delta))
    }

    /// Growth update: adds `step` up to the ceiling, never decreases
    pub fn grow(&self, current: u32, step: u32) -> u32 {
        if current >= self.max {
            current
        } else {
            current.saturating_add(step).min(self.max).max(self.min)
        }
    }
}

/// Leading unsigned integer of a label: `"12 min"` -> `12`, `"Livre"` -> `None`
pub fn parse_leading_number(label: &str) -> Option<u32> {
    let trimmed = label.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

/// Replace the leading number of a label, keeping its suffix.
/// Returns `None` when the label has no leading number.
pub fn replace_leading_number(label: &str, value: u32) -> Option<String> {
    let trimmed = label.trim_start();
    let digits = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    Some(format!("{}{}", value, &trimmed[digits..]))
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{} min", minutes)
}

/// Occupancy counter rendered as `"occupied/total"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub occupied: u32,
    pub total: u32,
}

impl Occupancy {
    pub fn parse(label: &str) -> Option<Self> {
        let (occupied, total) = label.trim().split_once('/')?;
        Some(Self {
            occupied: occupied.trim().parse().ok()?,
            total: total.trim().parse().ok()?,
        })
    }

    pub fn label(&self) -> String {
        format!("{}/{}", self.occupied, self.total)
    }
}
