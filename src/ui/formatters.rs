use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Round to `places` decimals with ties going away from zero.
/// `format!` alone rounds exact ties to even.
fn round_half_away(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Fraction to percentage with one decimal, e.g. 0.4567 -> "45.7%".
pub fn percentage(value: f64) -> String {
    format!("{:.1}%", round_half_away(value * 100.0, 1))
}

pub fn fixed1(value: f64) -> String {
    format!("{:.1}", round_half_away(value, 1))
}

pub fn fixed2(value: f64) -> String {
    format!("{:.2}", round_half_away(value, 2))
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    // Flask serializes datetimes as RFC 2822
    DateTime::parse_from_rfc2822(raw).ok().map(|dt| dt.date_naive())
}

/// Render an ISO date with the configured pattern. Unparseable input is
/// returned unchanged.
pub fn local_date(iso: &str, pattern: &str) -> String {
    match parse_calendar_date(iso) {
        Some(date) => date.format(pattern).to_string(),
        None => iso.to_string(),
    }
}

/// Day number of an ISO date, used as the trend chart's x coordinate.
pub fn date_ordinal(iso: &str) -> Option<f64> {
    parse_calendar_date(iso).map(|d| d.num_days_from_ce() as f64)
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len && max_len > 3 {
        let end = s
            .char_indices()
            .nth(max_len - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..end])
    } else {
        s.to_string()
    }
}
