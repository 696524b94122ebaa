//! Breakpoint tokens and their minimum-width thresholds.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// A viewport breakpoint, ordered from narrowest to widest.
///
/// [`Breakpoint::All`] is the default and never produces a media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "bp:all")]
    All,
    #[serde(rename = "bp:xs:1")]
    Xs1,
    #[serde(rename = "bp:sm:1")]
    Sm1,
    #[serde(rename = "bp:sm:2")]
    Sm2,
    #[serde(rename = "bp:md:1")]
    Md1,
    #[serde(rename = "bp:md:2")]
    Md2,
    #[serde(rename = "bp:lg:1")]
    Lg1,
    #[serde(rename = "bp:lg:2")]
    Lg2,
    #[serde(rename = "bp:xl:1")]
    Xl1,
    #[serde(rename = "bp:xl:2")]
    Xl2,
}

impl Breakpoint {
    /// Every breakpoint, in ascending order.
    pub const ALL: [Breakpoint; 10] = [
        Breakpoint::All,
        Breakpoint::Xs1,
        Breakpoint::Sm1,
        Breakpoint::Sm2,
        Breakpoint::Md1,
        Breakpoint::Md2,
        Breakpoint::Lg1,
        Breakpoint::Lg2,
        Breakpoint::Xl1,
        Breakpoint::Xl2,
    ];

    /// Token text as it appears in keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::All => "bp:all",
            Breakpoint::Xs1 => "bp:xs:1",
            Breakpoint::Sm1 => "bp:sm:1",
            Breakpoint::Sm2 => "bp:sm:2",
            Breakpoint::Md1 => "bp:md:1",
            Breakpoint::Md2 => "bp:md:2",
            Breakpoint::Lg1 => "bp:lg:1",
            Breakpoint::Lg2 => "bp:lg:2",
            Breakpoint::Xl1 => "bp:xl:1",
            Breakpoint::Xl2 => "bp:xl:2",
        }
    }

    /// Class-name suffix used once the breakpoint moves into a media query,
    /// e.g. `lg1` for `bp:lg:1`.
    pub fn short_suffix(&self) -> String {
        self.as_str()
            .trim_start_matches("bp:")
            .chars()
            .filter(|c| *c != ':')
            .collect()
    }

    /// Default minimum width in pixels; `None` for [`Breakpoint::All`].
    pub fn default_min_width(&self) -> Option<u32> {
        match self {
            Breakpoint::All => None,
            Breakpoint::Xs1 => Some(360),
            Breakpoint::Sm1 => Some(480),
            Breakpoint::Sm2 => Some(600),
            Breakpoint::Md1 => Some(768),
            Breakpoint::Md2 => Some(904),
            Breakpoint::Lg1 => Some(1024),
            Breakpoint::Lg2 => Some(1280),
            Breakpoint::Xl1 => Some(1440),
            Breakpoint::Xl2 => Some(1920),
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Breakpoint::All)
    }

    /// Exact vocabulary lookup.
    pub fn lookup(text: &str) -> Option<Breakpoint> {
        Self::ALL.into_iter().find(|bp| bp.as_str() == text)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown breakpoint token: {}", s))
    }
}

/// Pixel thresholds for every non-default breakpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    thresholds: IndexMap<Breakpoint, u32>,
}

impl Default for BreakpointTable {
    fn default() -> Self {
        let thresholds = Breakpoint::ALL
            .into_iter()
            .filter_map(|bp| bp.default_min_width().map(|px| (bp, px)))
            .collect();
        Self { thresholds }
    }
}

impl BreakpointTable {
    /// Table with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies threshold overrides on top of the defaults.
    ///
    /// The result must still increase strictly with breakpoint order, and
    /// `bp:all` cannot be given a threshold.
    pub fn with_overrides(overrides: &IndexMap<Breakpoint, u32>) -> Result<Self, LoadError> {
        let mut table = Self::default();
        for (bp, px) in overrides {
            if bp.is_default() {
                return Err(LoadError::DefaultBreakpointThreshold);
            }
            table.thresholds.insert(*bp, *px);
        }
        table.thresholds.sort_keys();

        let mut previous: Option<(Breakpoint, u32)> = None;
        for (bp, px) in &table.thresholds {
            if let Some((prev_bp, prev_px)) = previous {
                if *px <= prev_px {
                    return Err(LoadError::BreakpointOrder {
                        token: bp.to_string(),
                        px: *px,
                        previous: prev_bp.to_string(),
                        previous_px: prev_px,
                    });
                }
            }
            previous = Some((*bp, *px));
        }
        Ok(table)
    }

    /// Minimum width of a breakpoint; `None` for the default breakpoint.
    pub fn min_width(&self, bp: Breakpoint) -> Option<u32> {
        self.thresholds.get(&bp).copied()
    }
}
