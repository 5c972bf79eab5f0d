//! Display-ready card models. Everything here is plain data derived from
//! gateway records, so it can be checked without a terminal.

use super::formatters::{fixed1, fixed2, local_date, percentage};
use crate::api::{CompositeScore, HistoricalPoint};
use crate::app::Route;
use crate::mood::{self, Category, StockSymbol};

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeView {
    pub score: f64,
    pub text: String,
    pub category: Category,
}

impl GaugeView {
    pub fn new(score: f64) -> Self {
        Self {
            score,
            text: fixed1(score),
            category: mood::categorize(score),
        }
    }

    /// Fill fraction for the bar. Only the drawing is clamped; `text` and
    /// `category` keep the raw score.
    pub fn fill_ratio(&self) -> f64 {
        if self.score.is_nan() {
            0.0
        } else {
            (self.score / 100.0).clamp(0.0, 1.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub gauge: Option<GaugeView>,
    pub fields: Vec<(&'static str, String)>,
    /// Where selecting the card leads, if anywhere.
    pub target: Option<Route>,
}

impl Card {
    /// Rows needed including borders.
    pub fn height(&self) -> u16 {
        let body = self.fields.len()
            + usize::from(self.subtitle.is_some())
            + if self.gauge.is_some() { 2 } else { 0 };
        body as u16 + 2
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

pub fn score_card(score: &CompositeScore) -> Card {
    Card {
        title: score.symbol.to_string(),
        subtitle: None,
        gauge: Some(GaugeView::new(score.composite_score)),
        fields: vec![
            ("Sentiment", percentage(score.sentiment)),
            ("VIX", fixed1(score.vix)),
        ],
        target: Some(Route::Historical(score.symbol.clone())),
    }
}

pub fn analysis_cards(scores: &[CompositeScore]) -> Vec<Card> {
    scores.iter().map(score_card).collect()
}

pub fn historical_card(point: &HistoricalPoint, date_format: &str) -> Card {
    Card {
        title: local_date(&point.date, date_format),
        subtitle: None,
        gauge: None,
        fields: vec![
            ("Score", fixed2(point.composite_score)),
            ("Sentiment", percentage(point.sentiment)),
            ("VIX", fixed1(point.vix)),
        ],
        target: None,
    }
}

pub fn historical_cards(points: &[HistoricalPoint], date_format: &str) -> Vec<Card> {
    points
        .iter()
        .map(|p| historical_card(p, date_format))
        .collect()
}

pub fn basket_cards(symbols: &[StockSymbol]) -> Vec<Card> {
    symbols
        .iter()
        .map(|symbol| Card {
            title: symbol.to_string(),
            subtitle: Some(mood::company_name(symbol)),
            gauge: None,
            fields: Vec::new(),
            target: None,
        })
        .collect()
}
