use tracing::{debug, info, warn};

use super::{App, FetchRequest, Route, Ticket};
use crate::api::FetchError;

impl App {
    /// Trigger analysis of the whole basket. Ignored off the dashboard or
    /// while a trigger is already pending. Returns whether a request was queued.
    pub fn run_analysis(&mut self) -> bool {
        if *self.route() != Route::Dashboard || self.analysing {
            return false;
        }
        let ticket = self.issue_ticket();
        self.analysing = true;
        self.analysis_ticket = Some(ticket);
        self.status_message = None;
        let symbols = self.basket.clone();
        info!(count = symbols.len(), "running analysis");
        self.queue(FetchRequest::RunAnalysis { ticket, symbols });
        true
    }

    pub(super) fn finish_analysis(&mut self, ticket: Ticket, result: Result<(), FetchError>) {
        if self.analysis_ticket != Some(ticket) {
            debug!(?ticket, "discarding stale analysis result");
            return;
        }
        self.analysing = false;
        self.analysis_ticket = None;
        match result {
            Ok(()) => {
                info!("analysis complete");
                self.navigate(Route::Analysis);
            }
            Err(e) => {
                warn!(error = %e, "analysis failed");
                self.status_message = Some(format!("Analysis failed: {}", e));
            }
        }
    }
}
