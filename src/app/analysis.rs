use tracing::{debug, info, warn};

use super::{App, Route, Ticket};
use crate::api::{CompositeScore, CompositeScores, FetchError};

impl App {
    pub fn selected_score(&self) -> Option<&CompositeScore> {
        match self.route() {
            Route::Analysis => self.analysis.data().get(self.selected_index),
            _ => None,
        }
    }

    /// Drill into the selected card's history.
    pub fn open_selected(&mut self) {
        let Some(symbol) = self.selected_score().map(|s| s.symbol.clone()) else {
            return;
        };
        self.navigate(Route::Historical(symbol));
    }

    pub(super) fn receive_composite_scores(
        &mut self,
        ticket: Ticket,
        result: Result<CompositeScores, FetchError>,
    ) {
        if let Err(e) = &result {
            warn!(error = %e, "failed to load scores");
        }
        let (as_of, result) = match result {
            Ok(CompositeScores { as_of, scores }) => (as_of, Ok(scores)),
            Err(e) => (None, Err(e)),
        };
        if self.analysis.resolve(ticket, result) {
            info!(count = self.analysis.data().len(), "scores loaded");
            self.analysis_as_of = as_of;
        } else {
            debug!(?ticket, "discarding stale scores");
        }
    }
}
