use market_mood::mood::{Category, Severity, StockSymbol, basket, categorize, company_name};

#[test]
fn test_lower_bounds_are_inclusive() {
    assert_eq!(categorize(88.0), Category::StrongBuy);
    assert_eq!(categorize(76.0), Category::Buy);
    assert_eq!(categorize(64.0), Category::Neutral);
    assert_eq!(categorize(52.0), Category::Sell);
}

#[test]
fn test_just_below_a_bound_drops_a_category() {
    assert_eq!(categorize(87.999), Category::Buy);
    assert_eq!(categorize(75.99), Category::Neutral);
    assert_eq!(categorize(63.5), Category::Sell);
    assert_eq!(categorize(51.9), Category::StrongSell);
}

#[test]
fn test_out_of_range_scores_are_not_clamped() {
    assert_eq!(categorize(0.0), Category::StrongSell);
    assert_eq!(categorize(-5.0), Category::StrongSell);
    assert_eq!(categorize(150.0), Category::StrongBuy);
    assert_eq!(categorize(f64::INFINITY), Category::StrongBuy);
    assert_eq!(categorize(f64::NEG_INFINITY), Category::StrongSell);
}

#[test]
fn test_labels_and_color_tokens() {
    let cases = [
        (95.0, "Strong Buy", "strong-positive", "#2e6930"),
        (80.0, "Buy", "positive", "#2d9d92"),
        (70.0, "Neutral", "neutral", "#528aae"),
        (55.0, "Sell", "negative", "#b3446c"),
        (10.0, "Strong Sell", "strong-negative", "#cd1c18"),
    ];
    for (score, label, token, hex) in cases {
        let category = categorize(score);
        assert_eq!(category.label(), label);
        assert_eq!(category.severity().token(), token);
        assert_eq!(category.severity().hex(), hex);
    }
}

#[test]
fn test_rgb_matches_hex() {
    let severity = Severity::Neutral;
    let (r, g, b) = severity.rgb();
    assert_eq!(format!("#{:02x}{:02x}{:02x}", r, g, b), severity.hex());
}

#[test]
fn test_basket_is_the_magnificent_seven_in_order() {
    let symbols: Vec<String> = basket().iter().map(|s| s.to_string()).collect();
    assert_eq!(
        symbols,
        vec!["AAPL", "MSFT", "NVDA", "META", "TSLA", "AMZN", "GOOG"]
    );
}

#[test]
fn test_company_names_fall_back_to_symbol() {
    assert_eq!(company_name(&StockSymbol::new("AAPL").unwrap()), "Apple Inc.");
    assert_eq!(company_name(&StockSymbol::new("IBM").unwrap()), "IBM");
}

#[test]
fn test_symbol_is_trimmed_and_kept_verbatim() {
    let symbol = StockSymbol::new("  Msft ").unwrap();
    assert_eq!(symbol.as_str(), "Msft");
    assert_eq!(symbol.lookup_key(), "msft");
}
