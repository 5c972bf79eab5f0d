use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;
use crate::mood::StockSymbol;

const RUN_ANALYSIS_PATH: &str = "/run-analysis";
const COMPOSITE_SCORE_PATH: &str = "/composite-score";
const HISTORICAL_SCORES_PATH: &str = "/historical-scores";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service returned {status}{}", message_suffix(.message))]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

/// Latest composite score for one symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeScore {
    pub symbol: StockSymbol,
    pub composite_score: f64,
    pub sentiment: f64,
    pub vix: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompositeScores {
    /// Day the scores were computed for, when the service reports it.
    pub as_of: Option<String>,
    pub scores: Vec<CompositeScore>,
}

/// One day of a symbol's stored series.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: String,
    pub composite_score: f64,
    pub sentiment: f64,
    pub vix: f64,
}

#[derive(Debug, Serialize)]
struct RunAnalysisRequest<'a> {
    stocks: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ScoresEnvelope<T> {
    #[serde(default)]
    date: Option<String>,
    scores: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct ScoreRow {
    stock: String,
    composite_score: f64,
    sentiment: f64,
    vix: f64,
}

#[derive(Debug, Deserialize)]
struct HistoricalRow {
    date: String,
    composite_score: f64,
    sentiment: f64,
    vix: f64,
}

#[derive(Debug, Deserialize)]
struct ServiceMessage {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub fn parse_composite_scores(body: &str) -> Result<CompositeScores, FetchError> {
    let envelope: ScoresEnvelope<ScoreRow> = serde_json::from_str(body)?;
    let received = envelope.scores.len();
    let scores: Vec<CompositeScore> = envelope
        .scores
        .into_iter()
        .filter_map(|row| {
            let symbol = StockSymbol::new(&row.stock)?;
            Some(CompositeScore {
                symbol,
                composite_score: row.composite_score,
                sentiment: row.sentiment,
                vix: row.vix,
            })
        })
        .collect();
    if scores.len() < received {
        warn!(
            received,
            skipped = received - scores.len(),
            "skipping score rows without a stock symbol"
        );
    }
    Ok(CompositeScores {
        as_of: envelope.date,
        scores,
    })
}

/// Points keep the service's order.
pub fn parse_historical_scores(body: &str) -> Result<Vec<HistoricalPoint>, FetchError> {
    let envelope: ScoresEnvelope<HistoricalRow> = serde_json::from_str(body)?;
    Ok(envelope
        .scores
        .into_iter()
        .map(|row| HistoricalPoint {
            date: row.date,
            composite_score: row.composite_score,
            sentiment: row.sentiment,
            vix: row.vix,
        })
        .collect())
}

/// Pull the `error` or `message` field out of a failure body, if any.
pub fn service_message(body: &str) -> Option<String> {
    let parsed: ServiceMessage = serde_json::from_str(body).ok()?;
    parsed
        .error
        .or(parsed.message)
        .filter(|m| !m.trim().is_empty())
}

pub struct MoodClient {
    client: Client,
    config: Config,
}

impl MoodClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.api_base
    }

    async fn read_body(response: reqwest::Response) -> Result<String, FetchError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                message: service_message(&body),
            });
        }
        Ok(body)
    }

    /// Ask the service to recompute scores for `symbols`.
    pub async fn run_analysis(&self, symbols: &[StockSymbol]) -> Result<(), FetchError> {
        let url = self.config.endpoint(RUN_ANALYSIS_PATH);
        debug!(%url, count = symbols.len(), "POST run-analysis");
        let payload = RunAnalysisRequest {
            stocks: symbols.iter().map(StockSymbol::as_str).collect(),
        };
        let response = self.client.post(&url).json(&payload).send().await?;
        Self::read_body(response).await?;
        Ok(())
    }

    pub async fn composite_scores(&self) -> Result<CompositeScores, FetchError> {
        let url = self.config.endpoint(COMPOSITE_SCORE_PATH);
        debug!(%url, "GET composite-score");
        let response = self.client.get(&url).send().await?;
        let body = Self::read_body(response).await?;
        parse_composite_scores(&body)
    }

    pub async fn historical_scores(
        &self,
        symbol: &StockSymbol,
    ) -> Result<Vec<HistoricalPoint>, FetchError> {
        let url = self.config.endpoint(HISTORICAL_SCORES_PATH);
        debug!(%url, %symbol, days = self.config.lookback_days, "GET historical-scores");
        let days = self.config.lookback_days.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[("stock", symbol.as_str()), ("days", days.as_str())])
            .send()
            .await?;
        let body = Self::read_body(response).await?;
        parse_historical_scores(&body)
    }
}
