//! Presentation formatting: pure functions turning raw market numbers and
//! timestamps into display strings. No locale machinery — fixed en-US style
//! output, USD only.

use chrono::{DateTime, Utc};

use crate::models::chart::ChartPoint;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Fixed two-decimal USD string with thousands grouping.
/// Missing or non-finite input renders as `"$0.00"`.
#[must_use]
pub fn format_currency(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => usd(v),
        _ => "$0.00".to_string(),
    }
}

/// Abbreviated USD string: T/B/M/K at the 1e12/1e9/1e6/1e3 thresholds, two
/// decimals; smaller values fall through to [`format_currency`].
#[must_use]
pub fn format_large_number(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return "$0.00".to_string(),
    };
    if v >= 1e12 {
        format!("${:.2}T", v / 1e12)
    } else if v >= 1e9 {
        format!("${:.2}B", v / 1e9)
    } else if v >= 1e6 {
        format!("${:.2}M", v / 1e6)
    } else if v >= 1e3 {
        format!("${:.2}K", v / 1e3)
    } else {
        format_currency(Some(v))
    }
}

/// Signed percentage with an explicit leading `+` for non-negative values.
/// Missing or non-finite input renders as `"N/A"`.
#[must_use]
pub fn format_percentage(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => {
            let sign = if v >= 0.0 { "+" } else { "" };
            format!("{sign}{v:.2}%")
        }
        _ => "N/A".to_string(),
    }
}

/// Axis label for a chart timestamp, bucketed by the selected time range.
///
/// The buckets are the fixed literals offered by the range selector, not a
/// function of the numeric span: intraday ranges get hour:minute, week-to-
/// quarter ranges get month/day, and anything unrecognized falls through to
/// the coarsest month/year form.
#[must_use]
pub fn format_chart_label(timestamp_ms: i64, range: &str) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp_millis(timestamp_ms) else {
        return String::new();
    };
    match range {
        "0.04" | "1" | "1H" | "1D" => dt.format("%H:%M").to_string(),
        "3" | "7" | "30" | "90" | "3D" | "1W" | "1M" | "3M" => {
            dt.format("%b %-d").to_string()
        }
        _ => dt.format("%b %y").to_string(),
    }
}

/// "Jan 5, 2026"-style date.
#[must_use]
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Lowercased, hyphen-separated slug: non-alphanumeric runs collapse to a
/// single `-`, with no leading or trailing hyphen.
#[must_use]
pub fn generate_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Evenly-stepped tick timestamps for chart axes: daily for week ranges,
/// 5-day for month ranges, 12-hour for 3-day ranges. Ranges without a fixed
/// step (or an empty series) get `None` — the chart picks its own ticks.
#[must_use]
pub fn axis_ticks(data: &[ChartPoint], range: &str) -> Option<Vec<i64>> {
    if data.is_empty() {
        return None;
    }
    let min = data.iter().map(|p| p.timestamp).min()?;
    let max = data.iter().map(|p| p.timestamp).max()?;

    let step = match range {
        "7" | "1W" => MS_PER_DAY,
        "30" | "1M" => 5 * MS_PER_DAY,
        "3" | "3D" => 12 * MS_PER_HOUR,
        _ => return None,
    };

    let mut ticks = Vec::new();
    let mut t = min;
    while t <= max {
        ticks.push(t);
        t += step;
    }
    Some(ticks)
}

/// Group a two-decimal rendering into comma-separated thousands.
fn usd(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}
