use market_mood::api::{FetchError, parse_composite_scores, parse_historical_scores};
use market_mood::api::mood::service_message;

#[test]
fn test_composite_scores_with_date() {
    let body = r#"{
        "date": "2025-02-14",
        "scores": [
            {"stock": "AAPL", "composite_score": 91.2, "sentiment": 0.62, "vix": 14.3},
            {"stock": "MSFT", "composite_score": 55.0, "sentiment": -0.1, "vix": 14.3}
        ]
    }"#;
    let parsed = parse_composite_scores(body).unwrap();
    assert_eq!(parsed.as_of.as_deref(), Some("2025-02-14"));
    assert_eq!(parsed.scores.len(), 2);
    assert_eq!(parsed.scores[0].symbol.as_str(), "AAPL");
    assert_eq!(parsed.scores[0].composite_score, 91.2);
    assert_eq!(parsed.scores[1].sentiment, -0.1);
}

#[test]
fn test_composite_scores_without_date() {
    let body = r#"{"scores": []}"#;
    let parsed = parse_composite_scores(body).unwrap();
    assert!(parsed.as_of.is_none());
    assert!(parsed.scores.is_empty());
}

#[test]
fn test_rows_without_symbol_are_skipped() {
    let body = r#"{"scores": [
        {"stock": "  ", "composite_score": 10.0, "sentiment": 0.0, "vix": 20.0},
        {"stock": "", "composite_score": 12.0, "sentiment": 0.0, "vix": 20.0},
        {"stock": "NVDA", "composite_score": 80.0, "sentiment": 0.3, "vix": 20.0}
    ]}"#;
    let parsed = parse_composite_scores(body).unwrap();
    assert_eq!(parsed.scores.len(), 1);
    assert_eq!(parsed.scores[0].symbol.as_str(), "NVDA");
}

#[test]
fn test_historical_keeps_service_order() {
    let body = r#"{"stock": "AAPL", "scores": [
        {"date": "2025-02-12", "composite_score": 70.0, "sentiment": 0.2, "vix": 15.1},
        {"date": "2025-02-10", "composite_score": 65.5, "sentiment": 0.1, "vix": 16.0}
    ]}"#;
    let points = parse_historical_scores(body).unwrap();
    let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2025-02-12", "2025-02-10"]);
    assert_eq!(points[1].vix, 16.0);
}

#[test]
fn test_malformed_body_is_a_decode_error() {
    let err = parse_composite_scores("<html>oops</html>").unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));

    let err = parse_historical_scores(r#"{"scores": [{"date": "2025-02-10"}]}"#).unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[test]
fn test_service_message_prefers_error_field() {
    assert_eq!(
        service_message(r#"{"error": "No historical data found"}"#).as_deref(),
        Some("No historical data found")
    );
    assert_eq!(
        service_message(r#"{"message": "No composite scores available for today"}"#).as_deref(),
        Some("No composite scores available for today")
    );
}

#[test]
fn test_service_message_ignores_blank_and_non_json() {
    assert!(service_message(r#"{"error": "  "}"#).is_none());
    assert!(service_message("Internal Server Error").is_none());
}
