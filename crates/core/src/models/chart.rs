use serde::{Deserialize, Serialize};

/// One sample of a historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub price: f64,
}

/// Requested chart window: a whole number of days, or the asset's full history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartDays {
    Days(u32),
    Max,
}

impl ChartDays {
    /// Parse a query value. Unrecognized input degrades to the 7-day default
    /// rather than erroring — the chart window is presentation state, not a
    /// validity gate.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("max") {
            return ChartDays::Max;
        }
        match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => ChartDays::Days(n),
            _ => ChartDays::default(),
        }
    }

    /// Window length in days for synthesizing a series; `Max` is treated
    /// as one year.
    #[must_use]
    pub fn span_days(self) -> u32 {
        match self {
            ChartDays::Days(n) => n,
            ChartDays::Max => 365,
        }
    }
}

impl Default for ChartDays {
    fn default() -> Self {
        ChartDays::Days(7)
    }
}

impl std::fmt::Display for ChartDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartDays::Days(n) => write!(f, "{n}"),
            ChartDays::Max => write!(f, "max"),
        }
    }
}
