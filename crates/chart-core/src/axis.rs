// File: crates/chart-core/src/axis.rs
// Summary: Status levels and the fixed status-to-y axis mapping.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three discrete status values a reading can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    High,
    Medium,
    Low,
}

impl StatusLevel {
    /// All levels, top of the chart first.
    pub const ALL: [StatusLevel; 3] = [StatusLevel::High, StatusLevel::Medium, StatusLevel::Low];

    /// Parse a wire label. Only the exact lowercase labels are recognized.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    /// Capitalized form shown in the label gutter.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Fraction of the plot height at which this level is drawn.
    pub const fn fraction(&self) -> f64 {
        match self {
            Self::High => 0.1,
            Self::Medium => 0.5,
            Self::Low => 0.9,
        }
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical axis: maps status levels to pixel offsets for a given plot height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatusAxis {
    pub height: f64,
}

impl StatusAxis {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    #[inline]
    pub fn y_for(&self, level: StatusLevel) -> f64 {
        self.height * level.fraction()
    }

    /// Offset for a raw label; anything unrecognized sits on the `low` line.
    pub fn y_for_label(&self, label: &str) -> f64 {
        self.y_for(StatusLevel::parse(label).unwrap_or(StatusLevel::Low))
    }

    /// Levels with their offsets, top first.
    pub fn levels(&self) -> impl Iterator<Item = (StatusLevel, f64)> + '_ {
        StatusLevel::ALL.into_iter().map(move |l| (l, self.y_for(l)))
    }
}
