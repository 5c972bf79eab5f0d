use std::fmt;

/// Ticker identifier as given by the user or the service, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StockSymbol(String);

impl StockSymbol {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-case form used for asset lookups.
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for StockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The Magnificent 7, in dashboard order.
pub const BASKET: [&str; 7] = ["AAPL", "MSFT", "NVDA", "META", "TSLA", "AMZN", "GOOG"];

pub fn basket() -> Vec<StockSymbol> {
    BASKET.iter().filter_map(|s| StockSymbol::new(s)).collect()
}

pub fn company_name(symbol: &StockSymbol) -> String {
    let name = match symbol.lookup_key().as_str() {
        "aapl" => "Apple Inc.",
        "msft" => "Microsoft Corp.",
        "nvda" => "NVIDIA Corp.",
        "meta" => "Meta Platforms",
        "tsla" => "Tesla Inc.",
        "amzn" => "Amazon.com Inc.",
        "goog" => "Alphabet Inc.",
        _ => return symbol.to_string(),
    };
    name.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    StrongPositive,
    Positive,
    Neutral,
    Negative,
    StrongNegative,
}

impl Severity {
    pub fn token(&self) -> &'static str {
        match self {
            Severity::StrongPositive => "strong-positive",
            Severity::Positive => "positive",
            Severity::Neutral => "neutral",
            Severity::Negative => "negative",
            Severity::StrongNegative => "strong-negative",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Severity::StrongPositive => "#2e6930",
            Severity::Positive => "#2d9d92",
            Severity::Neutral => "#528aae",
            Severity::Negative => "#b3446c",
            Severity::StrongNegative => "#cd1c18",
        }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Severity::StrongPositive => (0x2e, 0x69, 0x30),
            Severity::Positive => (0x2d, 0x9d, 0x92),
            Severity::Neutral => (0x52, 0x8a, 0xae),
            Severity::Negative => (0xb3, 0x44, 0x6c),
            Severity::StrongNegative => (0xcd, 0x1c, 0x18),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::StrongBuy => "Strong Buy",
            Category::Buy => "Buy",
            Category::Neutral => "Neutral",
            Category::Sell => "Sell",
            Category::StrongSell => "Strong Sell",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Category::StrongBuy => Severity::StrongPositive,
            Category::Buy => Severity::Positive,
            Category::Neutral => Severity::Neutral,
            Category::Sell => Severity::Negative,
            Category::StrongSell => Severity::StrongNegative,
        }
    }
}

/// Inclusive lower bounds, checked highest first.
const THRESHOLDS: [(f64, Category); 4] = [
    (88.0, Category::StrongBuy),
    (76.0, Category::Buy),
    (64.0, Category::Neutral),
    (52.0, Category::Sell),
];

/// Map a composite score to its category. Out-of-range scores are not
/// clamped; NaN falls through to Strong Sell.
pub fn categorize(score: f64) -> Category {
    THRESHOLDS
        .iter()
        .find(|(bound, _)| score >= *bound)
        .map(|(_, category)| *category)
        .unwrap_or(Category::StrongSell)
}
