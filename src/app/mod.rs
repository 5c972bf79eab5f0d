mod analysis;
mod dashboard;
pub mod fetch;
mod historical;
mod route;
mod view_state;

pub use fetch::{FetchOutcome, FetchRequest};
pub use route::{Navigator, Route};
pub use view_state::{LoadState, Ticket, ViewState};

use crate::api::{CompositeScore, HistoricalPoint};
use crate::config::Config;
use crate::mood::{self, StockSymbol};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Goto,
    Help,
}

pub struct App {
    pub config: Config,
    pub navigator: Navigator,
    pub basket: Vec<StockSymbol>,
    /// Dashboard trigger in flight.
    pub analysing: bool,
    analysis_ticket: Option<Ticket>,
    pub analysis: ViewState<CompositeScore>,
    pub analysis_as_of: Option<String>,
    pub history: ViewState<HistoricalPoint>,
    pub selected_index: usize,
    pub grid_columns: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub tick: u64,
    next_ticket: u64,
    outbox: Vec<FetchRequest>,
}

impl App {
    /// Build the app on `initial` and mount it. Any fetch the first screen
    /// needs is queued for [`App::take_requests`].
    pub fn new(config: Config, initial: Route) -> Self {
        let mut app = Self {
            config,
            navigator: Navigator::new(initial),
            basket: mood::basket(),
            analysing: false,
            analysis_ticket: None,
            analysis: ViewState::default(),
            analysis_as_of: None,
            history: ViewState::default(),
            selected_index: 0,
            grid_columns: 1,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            tick: 0,
            next_ticket: 0,
            outbox: Vec::new(),
        };
        app.mount();
        app
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    /// Requests queued since the last call, in issue order.
    pub fn take_requests(&mut self) -> Vec<FetchRequest> {
        std::mem::take(&mut self.outbox)
    }

    fn issue_ticket(&mut self) -> Ticket {
        self.next_ticket += 1;
        Ticket(self.next_ticket)
    }

    fn queue(&mut self, request: FetchRequest) {
        self.outbox.push(request);
    }

    pub fn navigate(&mut self, route: Route) {
        if *self.route() == route {
            return;
        }
        info!(from = %self.route().path(), to = %route.path(), "navigate");
        let left = self.navigator.navigate(route);
        self.unmount(&left);
        self.mount();
    }

    /// Change screen without adding a history entry.
    pub fn replace(&mut self, route: Route) {
        if *self.route() == route {
            return;
        }
        info!(from = %self.route().path(), to = %route.path(), "replace");
        let left = self.navigator.replace(route);
        self.unmount(&left);
        self.mount();
    }

    pub fn back(&mut self) {
        if *self.route() == Route::Dashboard && self.navigator.depth() == 0 {
            return;
        }
        let left = self.navigator.back();
        info!(from = %left.path(), to = %self.route().path(), "back");
        self.unmount(&left);
        self.mount();
    }

    pub fn go_home(&mut self) {
        self.navigate(Route::Dashboard);
    }

    /// Tear down and remount the current screen as a fresh lifecycle.
    /// The dashboard has nothing to reload.
    pub fn reload(&mut self) {
        if *self.route() == Route::Dashboard {
            return;
        }
        let current = self.route().clone();
        self.unmount(&current);
        self.mount();
    }

    fn unmount(&mut self, route: &Route) {
        match route {
            Route::Dashboard => {
                self.analysing = false;
                self.analysis_ticket = None;
            }
            Route::Analysis => {
                self.analysis.reset();
                self.analysis_as_of = None;
            }
            Route::Historical(_) => self.history.reset(),
        }
        self.status_message = None;
    }

    fn mount(&mut self) {
        self.selected_index = 0;
        match self.route().clone() {
            Route::Dashboard => {}
            Route::Analysis => {
                let ticket = self.issue_ticket();
                self.analysis.begin(ticket);
                self.queue(FetchRequest::CompositeScores { ticket });
            }
            Route::Historical(symbol) => {
                let ticket = self.issue_ticket();
                self.history.begin(ticket);
                self.queue(FetchRequest::HistoricalSeries { ticket, symbol });
            }
        }
    }

    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::AnalysisFinished { ticket, result } => {
                self.finish_analysis(ticket, result)
            }
            FetchOutcome::CompositeScores { ticket, result } => {
                self.receive_composite_scores(ticket, result)
            }
            FetchOutcome::HistoricalSeries {
                ticket,
                symbol,
                result,
            } => self.receive_historical_series(ticket, &symbol, result),
        }
    }

    /// True while the current screen shows the blocking loading overlay.
    pub fn overlay_visible(&self) -> bool {
        match self.route() {
            Route::Dashboard => false,
            Route::Analysis => self.analysis.loading(),
            Route::Historical(_) => self.history.loading(),
        }
    }

    fn item_count(&self) -> usize {
        match self.route() {
            Route::Dashboard => 0,
            Route::Analysis => self.analysis.data().len(),
            Route::Historical(_) => self.history.data().len(),
        }
    }

    pub fn move_left(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        let len = self.item_count();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_up(&mut self) {
        let step = self.grid_columns.max(1);
        if self.selected_index >= step {
            self.selected_index -= step;
        }
    }

    pub fn move_down(&mut self) {
        let step = self.grid_columns.max(1);
        let len = self.item_count();
        if self.selected_index + step < len {
            self.selected_index += step;
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn start_goto(&mut self) {
        self.input_mode = InputMode::Goto;
        self.input_buffer = self.route().path();
    }

    pub fn confirm_goto(&mut self) {
        let route = Route::parse(&self.input_buffer);
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.navigate(route);
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
