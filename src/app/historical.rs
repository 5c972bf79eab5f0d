use tracing::{debug, info, warn};

use super::{App, Route, Ticket};
use crate::api::{FetchError, HistoricalPoint};
use crate::mood::StockSymbol;

impl App {
    pub fn historical_symbol(&self) -> Option<&StockSymbol> {
        match self.route() {
            Route::Historical(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Step the detail screen through the basket. A symbol outside the
    /// basket steps to its first or last entry.
    fn step_symbol(&mut self, forward: bool) {
        let Some(current) = self.historical_symbol() else {
            return;
        };
        let len = self.basket.len();
        if len == 0 {
            return;
        }
        let position = self
            .basket
            .iter()
            .position(|s| s.as_str().eq_ignore_ascii_case(current.as_str()));
        let next = match (position, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        let symbol = self.basket[next].clone();
        self.replace(Route::Historical(symbol));
    }

    pub fn next_symbol(&mut self) {
        self.step_symbol(true);
    }

    pub fn prev_symbol(&mut self) {
        self.step_symbol(false);
    }

    pub(super) fn receive_historical_series(
        &mut self,
        ticket: Ticket,
        symbol: &StockSymbol,
        result: Result<Vec<HistoricalPoint>, FetchError>,
    ) {
        if let Err(e) = &result {
            warn!(%symbol, error = %e, "failed to load historical data");
        }
        if self.history.resolve(ticket, result) {
            info!(%symbol, points = self.history.data().len(), "history loaded");
        } else {
            debug!(%symbol, ?ticket, "discarding stale history");
        }
    }
}
