mod common;

use common::{make_point, make_score, service_down, single_request, symbol, test_app};
use market_mood::api::CompositeScores;
use market_mood::app::{App, FetchOutcome, Route};
use market_mood::ui;
use market_mood::ui::cards::score_card;
use ratatui::{Terminal, backend::TestBackend};

fn screen_text(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .chunks(usize::from(buffer.area.width))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn loaded_analysis() -> App {
    let mut app = test_app(Route::Analysis);
    let request = single_request(&mut app);
    app.apply(FetchOutcome::CompositeScores {
        ticket: request.ticket(),
        result: Ok(CompositeScores {
            as_of: Some("2025-02-14".to_string()),
            scores: vec![make_score("AAPL", 91.2, 0.62, 14.3)],
        }),
    });
    app
}

#[test]
fn test_analysis_card_shows_formatted_values() {
    let text = screen_text(&loaded_analysis());
    assert!(text.contains(" AAPL "));
    assert!(text.contains("Sentiment: 62.0%"));
    assert!(text.contains("VIX: 14.3"));
    assert!(text.contains("91.2"));
    assert!(text.contains("Strong Buy"));
    assert!(text.contains("as of 14/02/2025"));
    assert!(!text.contains("Loading..."));
}

#[test]
fn test_score_card_model() {
    let card = score_card(&make_score("AAPL", 91.2, 0.62, 14.3));
    assert_eq!(card.title, "AAPL");
    assert_eq!(card.field("Sentiment"), Some("62.0%"));
    assert_eq!(card.field("VIX"), Some("14.3"));
    let gauge = card.gauge.unwrap();
    assert_eq!(gauge.text, "91.2");
    assert_eq!(gauge.category.label(), "Strong Buy");
    assert_eq!(card.target, Some(Route::Historical(symbol("AAPL"))));
}

#[test]
fn test_score_card_ties_round_away_from_zero() {
    let card = score_card(&make_score("AAPL", 80.25, 0.0125, 14.25));
    assert_eq!(card.field("VIX"), Some("14.3"));
    assert_eq!(card.field("Sentiment"), Some("1.3%"));
    assert_eq!(card.gauge.unwrap().text, "80.3");
}

#[test]
fn test_out_of_range_gauge_clamps_fill_only() {
    let card = score_card(&make_score("TSLA", 150.0, 0.0, 20.0));
    let gauge = card.gauge.unwrap();
    assert_eq!(gauge.fill_ratio(), 1.0);
    assert_eq!(gauge.text, "150.0");
    assert_eq!(gauge.category.label(), "Strong Buy");

    let card = score_card(&make_score("TSLA", -5.0, 0.0, 20.0));
    assert_eq!(card.gauge.unwrap().fill_ratio(), 0.0);
}

#[test]
fn test_pending_fetch_shows_loading_overlay() {
    let mut app = test_app(Route::Analysis);
    app.take_requests();
    let text = screen_text(&app);
    assert!(text.contains("Loading..."));
    assert!(!text.contains("Failed to load scores"));
}

#[test]
fn test_analysis_failure_panel() {
    let mut app = test_app(Route::Analysis);
    let request = single_request(&mut app);
    app.apply(FetchOutcome::CompositeScores {
        ticket: request.ticket(),
        result: Err(service_down()),
    });
    let text = screen_text(&app);
    assert!(text.contains("Failed to load scores"));
    assert!(text.contains("Internal server error"));
    assert!(!text.contains("No scores available"));
}

#[test]
fn test_analysis_empty_panel() {
    let mut app = test_app(Route::Analysis);
    let request = single_request(&mut app);
    app.apply(FetchOutcome::CompositeScores {
        ticket: request.ticket(),
        result: Ok(CompositeScores::default()),
    });
    let text = screen_text(&app);
    assert!(text.contains("No scores available"));
    assert!(!text.contains("Failed to load scores"));
}

#[test]
fn test_dashboard_lists_basket_and_call_to_action() {
    let mut app = test_app(Route::Dashboard);
    let text = screen_text(&app);
    assert!(text.contains("Market Mood Detector"));
    assert!(text.contains("Apple Inc."));
    assert!(text.contains(" GOOG "));
    assert!(text.contains("Run Full Analysis"));

    app.run_analysis();
    assert!(screen_text(&app).contains("Analysing..."));
}

#[test]
fn test_dashboard_shows_trigger_failure() {
    let mut app = test_app(Route::Dashboard);
    app.run_analysis();
    let request = single_request(&mut app);
    app.apply(FetchOutcome::AnalysisFinished {
        ticket: request.ticket(),
        result: Err(service_down()),
    });
    let text = screen_text(&app);
    assert!(text.contains("Analysis failed"));
    assert!(text.contains("Run Full Analysis"));
}

#[test]
fn test_historical_screen_shows_chart_and_cards() {
    let mut app = test_app(Route::Historical(symbol("MSFT")));
    let request = single_request(&mut app);
    app.apply(FetchOutcome::HistoricalSeries {
        ticket: request.ticket(),
        symbol: symbol("MSFT"),
        result: Ok(vec![
            make_point("2025-02-10", 70.0, 0.2, 15.0),
            make_point("2025-02-11", 72.456, 0.25, 14.0),
        ]),
    });
    let text = screen_text(&app);
    assert!(text.contains("MSFT Historical Data"));
    assert!(text.contains("Composite Score Trend"));
    assert!(text.contains(" 10/02/2025 "));
    assert!(text.contains("Score: 70.00"));
    assert!(text.contains("Score: 72.46"));
    assert!(text.contains("Sentiment: 25.0%"));
}

#[test]
fn test_historical_failure_panel() {
    let mut app = test_app(Route::Historical(symbol("MSFT")));
    let request = single_request(&mut app);
    app.apply(FetchOutcome::HistoricalSeries {
        ticket: request.ticket(),
        symbol: symbol("MSFT"),
        result: Err(service_down()),
    });
    let text = screen_text(&app);
    assert!(text.contains("Failed to load historical data"));
    assert!(!text.contains("Composite Score Trend"));
}

#[test]
fn test_help_overlay_lists_symbol_keys() {
    let mut app = test_app(Route::Dashboard);
    app.show_help();
    assert!(screen_text(&app).contains("Previous / next stock"));
}
