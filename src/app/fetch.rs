use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

use super::view_state::Ticket;
use crate::api::{CompositeScores, FetchError, HistoricalPoint, MoodClient};
use crate::mood::StockSymbol;

/// A gateway call the event loop should run.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchRequest {
    RunAnalysis {
        ticket: Ticket,
        symbols: Vec<StockSymbol>,
    },
    CompositeScores {
        ticket: Ticket,
    },
    HistoricalSeries {
        ticket: Ticket,
        symbol: StockSymbol,
    },
}

impl FetchRequest {
    pub fn ticket(&self) -> Ticket {
        match self {
            FetchRequest::RunAnalysis { ticket, .. }
            | FetchRequest::CompositeScores { ticket }
            | FetchRequest::HistoricalSeries { ticket, .. } => *ticket,
        }
    }
}

/// The result of a [`FetchRequest`], tagged with the request's ticket.
#[derive(Debug)]
pub enum FetchOutcome {
    AnalysisFinished {
        ticket: Ticket,
        result: Result<(), FetchError>,
    },
    CompositeScores {
        ticket: Ticket,
        result: Result<CompositeScores, FetchError>,
    },
    HistoricalSeries {
        ticket: Ticket,
        symbol: StockSymbol,
        result: Result<Vec<HistoricalPoint>, FetchError>,
    },
}

pub async fn execute(client: &MoodClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::RunAnalysis { ticket, symbols } => FetchOutcome::AnalysisFinished {
            ticket,
            result: client.run_analysis(&symbols).await,
        },
        FetchRequest::CompositeScores { ticket } => FetchOutcome::CompositeScores {
            ticket,
            result: client.composite_scores().await,
        },
        FetchRequest::HistoricalSeries { ticket, symbol } => {
            let result = client.historical_scores(&symbol).await;
            FetchOutcome::HistoricalSeries {
                ticket,
                symbol,
                result,
            }
        }
    }
}

/// Run `request` on the runtime and post the outcome back to the event loop.
/// Nothing is cancelled; stale outcomes are filtered by ticket on arrival.
pub fn spawn_request(
    client: Arc<MoodClient>,
    request: FetchRequest,
    sender: UnboundedSender<FetchOutcome>,
) {
    debug!(?request, "dispatching");
    tokio::spawn(async move {
        let outcome = execute(&client, request).await;
        if sender.send(outcome).is_err() {
            warn!("event loop gone, dropping fetch outcome");
        }
    });
}
