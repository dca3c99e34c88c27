use crate::error::BreakpointParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod signal;

pub use signal::BreakpointSignal;

/// Named responsive breakpoints, matching `max-width` media queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "max-sm")]
    MaxSm,
    #[serde(rename = "max-md")]
    MaxMd,
    #[serde(rename = "max-lg")]
    MaxLg,
    #[serde(rename = "max-xl")]
    MaxXl,
    #[serde(rename = "max-2xl")]
    Max2xl,
}

impl Breakpoint {
    /// Every breakpoint, `Default` first, then most specific to least specific.
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Default,
        Breakpoint::MaxSm,
        Breakpoint::MaxMd,
        Breakpoint::MaxLg,
        Breakpoint::MaxXl,
        Breakpoint::Max2xl,
    ];

    /// Threshold breakpoints in matching order (most specific first).
    pub const THRESHOLDS: [Breakpoint; 5] = [
        Breakpoint::MaxSm,
        Breakpoint::MaxMd,
        Breakpoint::MaxLg,
        Breakpoint::MaxXl,
        Breakpoint::Max2xl,
    ];

    /// The inclusive maximum viewport width in pixels. `None` for `Default`.
    pub fn max_width(self) -> Option<u32> {
        match self {
            Breakpoint::Default => None,
            Breakpoint::MaxSm => Some(639),
            Breakpoint::MaxMd => Some(767),
            Breakpoint::MaxLg => Some(1023),
            Breakpoint::MaxXl => Some(1279),
            Breakpoint::Max2xl => Some(1535),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Default => "default",
            Breakpoint::MaxSm => "max-sm",
            Breakpoint::MaxMd => "max-md",
            Breakpoint::MaxLg => "max-lg",
            Breakpoint::MaxXl => "max-xl",
            Breakpoint::Max2xl => "max-2xl",
        }
    }

    /// The CSS media query prelude for this breakpoint, e.g. `@media (max-width: 639px)`.
    pub fn media_query(self) -> Option<String> {
        self.max_width()
            .map(|px| format!("@media (max-width: {}px)", px))
    }

    /// True for the smallest breakpoint, where split layouts stack.
    pub fn is_mobile(self) -> bool {
        self == Breakpoint::MaxSm
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str() == s)
            .ok_or_else(|| BreakpointParseError(s.to_string()))
    }
}

/// Maps a viewport width, or an explicit override, to a single breakpoint.
pub struct BreakpointResolver;

impl BreakpointResolver {
    /// Resolves the current breakpoint.
    ///
    /// An override is returned verbatim without looking at the width. Otherwise the
    /// thresholds are scanned from `max-sm` upwards and the first one that fits the
    /// width wins. Widths above every threshold, or no width at all, resolve to
    /// `Default`.
    pub fn resolve(width: Option<u32>, override_bp: Option<Breakpoint>) -> Breakpoint {
        if let Some(bp) = override_bp {
            return bp;
        }
        let Some(width) = width else {
            return Breakpoint::Default;
        };
        Breakpoint::THRESHOLDS
            .into_iter()
            .find(|bp| bp.max_width().is_some_and(|max| width <= max))
            .unwrap_or(Breakpoint::Default)
    }
}
