#![allow(dead_code)]

use market_mood::api::{CompositeScore, FetchError, HistoricalPoint};
use market_mood::app::{App, FetchRequest, Route};
use market_mood::config::Config;
use market_mood::mood::StockSymbol;

pub fn symbol(s: &str) -> StockSymbol {
    StockSymbol::new(s).unwrap()
}

pub fn make_score(sym: &str, composite: f64, sentiment: f64, vix: f64) -> CompositeScore {
    CompositeScore {
        symbol: symbol(sym),
        composite_score: composite,
        sentiment,
        vix,
    }
}

pub fn make_point(date: &str, composite: f64, sentiment: f64, vix: f64) -> HistoricalPoint {
    HistoricalPoint {
        date: date.to_string(),
        composite_score: composite,
        sentiment,
        vix,
    }
}

pub fn service_down() -> FetchError {
    FetchError::Status {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        message: Some("Internal server error".to_string()),
    }
}

// App mounted on `route` with default config (no file or network I/O).
pub fn test_app(route: Route) -> App {
    App::new(Config::default(), route)
}

/// Drain the app's queue, expecting exactly one request.
pub fn single_request(app: &mut App) -> FetchRequest {
    let mut requests = app.take_requests();
    assert_eq!(requests.len(), 1, "expected one request, got {:?}", requests);
    requests.remove(0)
}
