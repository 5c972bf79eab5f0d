use crate::api::FetchError;

/// Identifies one screen lifecycle (or one trigger). Results carrying a
/// ticket other than the active one are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(pub u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ViewState<T> {
    state: LoadState<T>,
    ticket: Option<Ticket>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            state: LoadState::Idle,
            ticket: None,
        }
    }
}

impl<T> ViewState<T> {
    pub fn begin(&mut self, ticket: Ticket) {
        self.ticket = Some(ticket);
        self.state = LoadState::Loading;
    }

    /// Apply a gateway result if `ticket` is still the active one.
    /// Returns false when the result was discarded.
    pub fn resolve(&mut self, ticket: Ticket, result: Result<Vec<T>, FetchError>) -> bool {
        if self.ticket != Some(ticket) || !self.loading() {
            return false;
        }
        self.state = match result {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    /// Drop data and invalidate any request in flight.
    pub fn reset(&mut self) {
        self.ticket = None;
        self.state = LoadState::Idle;
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn ticket(&self) -> Option<Ticket> {
        self.ticket
    }

    pub fn loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn data(&self) -> &[T] {
        match &self.state {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn error_occurred(&self) -> bool {
        matches!(self.state, LoadState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded successfully but nothing came back.
    pub fn is_empty_success(&self) -> bool {
        matches!(&self.state, LoadState::Loaded(items) if items.is_empty())
    }
}
