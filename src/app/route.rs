use crate::mood::StockSymbol;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Analysis,
    Historical(StockSymbol),
}

impl Route {
    /// Resolve a path. Page names match in any case; the stock parameter is
    /// kept as typed. Anything unrecognised lands on the dashboard.
    pub fn parse(path: &str) -> Route {
        let path = path.trim();
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [page] if page.eq_ignore_ascii_case("analyse") => Route::Analysis,
            [page, stock] if page.eq_ignore_ascii_case("historical") => {
                StockSymbol::new(stock)
                    .map(Route::Historical)
                    .unwrap_or(Route::Dashboard)
            }
            _ => Route::Dashboard,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/".to_string(),
            Route::Analysis => "/analyse".to_string(),
            Route::Historical(symbol) => format!("/historical/{}", symbol),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Dashboard => "Dashboard".to_string(),
            Route::Analysis => "Analysis Results".to_string(),
            Route::Historical(symbol) => format!("{} Historical Data", symbol),
        }
    }
}

/// Current route plus the history stack behind it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self {
            current: initial,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Push `route`, returning the route that was left.
    pub fn navigate(&mut self, route: Route) -> Route {
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous.clone());
        previous
    }

    /// Swap the current route without growing history.
    pub fn replace(&mut self, route: Route) -> Route {
        std::mem::replace(&mut self.current, route)
    }

    /// Pop to the previous route, or the dashboard when history is empty.
    /// Returns the route that was left.
    pub fn back(&mut self) -> Route {
        let target = self.history.pop().unwrap_or(Route::Dashboard);
        std::mem::replace(&mut self.current, target)
    }
}
