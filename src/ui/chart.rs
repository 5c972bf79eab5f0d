use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use super::formatters::{date_ordinal, fixed1, local_date};
use crate::api::HistoricalPoint;

const TREND_COLOR: Color = Color::Rgb(0x88, 0x84, 0xd8);

/// Chart coordinates for a series. Points are plotted by calendar day when
/// every date parses, otherwise by position. Order is left as given.
pub fn trend_points(points: &[HistoricalPoint]) -> Vec<(f64, f64)> {
    let days: Option<Vec<f64>> = points.iter().map(|p| date_ordinal(&p.date)).collect();
    match days {
        Some(days) => days
            .into_iter()
            .zip(points)
            .map(|(x, p)| (x, p.composite_score))
            .collect(),
        None => points
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.composite_score))
            .collect(),
    }
}

/// Axis bounds: y always covers 0..100 and widens for outliers.
pub fn trend_bounds(data: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let (x_min, x_max, y_min, y_max) = data.iter().fold(
        (f64::MAX, f64::MIN, 0.0_f64, 100.0_f64),
        |(x0, x1, y0, y1), &(x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
    );
    let x = if data.is_empty() {
        [0.0, 1.0]
    } else if x_min == x_max {
        [x_min - 1.0, x_max + 1.0]
    } else {
        [x_min, x_max]
    };
    (x, [y_min, y_max])
}

pub fn draw_trend(frame: &mut Frame, area: Rect, points: &[HistoricalPoint], date_format: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Composite Score Trend ");

    let data = trend_points(points);
    if data.is_empty() {
        let empty = Paragraph::new("No data to plot")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let (x_bounds, y_bounds) = trend_bounds(&data);

    // Label the x axis with the earliest and latest dates as plotted
    let first = data
        .iter()
        .zip(points)
        .min_by(|a, b| a.0.0.total_cmp(&b.0.0))
        .map(|(_, p)| local_date(&p.date, date_format))
        .unwrap_or_default();
    let last = data
        .iter()
        .zip(points)
        .max_by(|a, b| a.0.0.total_cmp(&b.0.0))
        .map(|(_, p)| local_date(&p.date, date_format))
        .unwrap_or_default();

    let datasets = vec![
        Dataset::default()
            .name("composite_score")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(TREND_COLOR))
            .data(&data),
    ];

    let x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds)
        .labels(vec![Span::raw(first), Span::raw(last)]);

    let y_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(y_bounds)
        .labels(vec![
            Span::raw(fixed1(y_bounds[0])),
            Span::raw(fixed1((y_bounds[0] + y_bounds[1]) / 2.0)),
            Span::raw(fixed1(y_bounds[1])),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);
    frame.render_widget(chart, area);
}
