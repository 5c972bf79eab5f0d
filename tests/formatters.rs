use market_mood::ui::formatters::*;

// --- percentage ---

#[test]
fn test_percentage_one_decimal() {
    assert_eq!(percentage(0.457), "45.7%");
    assert_eq!(percentage(0.4567), "45.7%");
}

#[test]
fn test_percentage_bounds() {
    assert_eq!(percentage(0.0), "0.0%");
    assert_eq!(percentage(1.0), "100.0%");
}

#[test]
fn test_percentage_negative_sentiment() {
    assert_eq!(percentage(-0.25), "-25.0%");
}

#[test]
fn test_percentage_tie_rounds_away_from_zero() {
    assert_eq!(percentage(0.0125), "1.3%");
}

// --- fixed1 / fixed2 ---

#[test]
fn test_fixed1_tie_rounds_away_from_zero() {
    assert_eq!(fixed1(14.25), "14.3");
    assert_eq!(fixed1(0.25), "0.3");
    assert_eq!(fixed1(-14.25), "-14.3");
}

#[test]
fn test_fixed2_tie_rounds_away_from_zero() {
    assert_eq!(fixed2(1.125), "1.13");
}

#[test]
fn test_fixed1_rounds_up_across_integer() {
    assert_eq!(fixed1(19.96), "20.0");
}

#[test]
fn test_fixed1_vix() {
    assert_eq!(fixed1(14.3), "14.3");
    assert_eq!(fixed1(0.0), "0.0");
}

#[test]
fn test_fixed2_truncates_to_two_places() {
    assert_eq!(fixed2(19.964), "19.96");
}

#[test]
fn test_fixed2_pads() {
    assert_eq!(fixed2(7.0), "7.00");
}

// --- local_date ---

#[test]
fn test_local_date_iso() {
    assert_eq!(local_date("2025-02-14", DEFAULT_DATE_FORMAT), "14/02/2025");
}

#[test]
fn test_local_date_with_time_component() {
    assert_eq!(local_date("2025-02-14T09:30:00", DEFAULT_DATE_FORMAT), "14/02/2025");
    assert_eq!(local_date("2025-02-14 09:30:00", DEFAULT_DATE_FORMAT), "14/02/2025");
}

#[test]
fn test_local_date_rfc2822() {
    assert_eq!(
        local_date("Fri, 14 Feb 2025 00:00:00 GMT", DEFAULT_DATE_FORMAT),
        "14/02/2025"
    );
}

#[test]
fn test_local_date_custom_pattern() {
    assert_eq!(local_date("2025-02-14", "%Y/%m/%d"), "2025/02/14");
}

#[test]
fn test_local_date_garbage_passes_through() {
    assert_eq!(local_date("not a date", DEFAULT_DATE_FORMAT), "not a date");
}

// --- truncate_str ---

#[test]
fn test_truncate_str_short_unchanged() {
    assert_eq!(truncate_str("AAPL", 10), "AAPL");
}

#[test]
fn test_truncate_str_long() {
    assert_eq!(truncate_str("Amazon.com Inc.", 10), "Amazon....");
}
