pub mod mood;

pub use mood::{
    CompositeScore, CompositeScores, FetchError, HistoricalPoint, MoodClient,
    parse_composite_scores, parse_historical_scores,
};
