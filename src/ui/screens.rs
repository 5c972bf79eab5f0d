use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::cards::{analysis_cards, basket_cards, historical_cards};
use super::chart::draw_trend;
use super::formatters::local_date;
use super::grid::draw_grid;
use crate::app::{App, LoadState};
use crate::mood::StockSymbol;

const ACCENT: Color = Color::Rgb(0x3e, 0x3b, 0x79);

fn draw_title(frame: &mut Frame, area: Rect, title: &str, note: Option<String>) {
    let mut spans = vec![
        Span::styled("← ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(note) = note {
        spans.push(Span::styled(
            format!("  {}", note),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_notice(frame: &mut Frame, area: Rect, heading: &str, detail: &str, color: Color) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Retry  [Esc] Back",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(panel, area);
}

pub fn draw_dashboard(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Market Mood Detector",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Track and analyse the performance of the top tech giants.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(intro, chunks[0]);

    draw_grid(frame, chunks[1], &basket_cards(&app.basket), None);
    draw_call_to_action(frame, chunks[2], app);
}

fn draw_call_to_action(frame: &mut Frame, area: Rect, app: &App) {
    let button = if app.analysing {
        Span::styled(
            "  Analysing...  ",
            Style::default().fg(Color::Gray).bg(Color::DarkGray),
        )
    } else {
        Span::styled(
            "  Run Full Analysis  ",
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Ready for a deeper dive?",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Generate a full analysis of all Magnificent 7 stocks with one click.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("────────", Style::default().fg(Color::DarkGray))),
        Line::from(button),
    ];
    if let Some(msg) = &app.status_message {
        lines.push(Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let card = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(ACCENT)),
        );
    frame.render_widget(card, area);
}

pub fn draw_analysis(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let as_of = app
        .analysis_as_of
        .as_deref()
        .map(|d| format!("as of {}", local_date(d, &app.config.date_format)));
    draw_title(frame, chunks[0], "Analysis Results", as_of);

    match app.analysis.state() {
        LoadState::Idle | LoadState::Loading => {}
        LoadState::Failed(message) => draw_notice(
            frame,
            chunks[1],
            "Failed to load scores",
            message,
            Color::Red,
        ),
        LoadState::Loaded(scores) if scores.is_empty() => draw_notice(
            frame,
            chunks[1],
            "No scores available",
            "Run an analysis from the dashboard to compute today's scores.",
            Color::Yellow,
        ),
        LoadState::Loaded(scores) => draw_grid(
            frame,
            chunks[1],
            &analysis_cards(scores),
            Some(app.selected_index),
        ),
    }
}

pub fn draw_historical(frame: &mut Frame, area: Rect, app: &App, symbol: &StockSymbol) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(12),
            Constraint::Min(3),
        ])
        .split(area);

    let lookback = format!("last {} days", app.config.lookback_days);
    draw_title(
        frame,
        chunks[0],
        &format!("{} Historical Data", symbol),
        Some(lookback),
    );

    let date_format = &app.config.date_format;
    match app.history.state() {
        LoadState::Idle | LoadState::Loading => {}
        LoadState::Failed(message) => {
            let body = chunks[1].union(chunks[2]);
            draw_notice(frame, body, "Failed to load historical data", message, Color::Red);
        }
        LoadState::Loaded(points) if points.is_empty() => {
            let body = chunks[1].union(chunks[2]);
            draw_notice(
                frame,
                body,
                "No historical data",
                &format!("The service has no stored scores for {}.", symbol),
                Color::Yellow,
            );
        }
        LoadState::Loaded(points) => {
            draw_trend(frame, chunks[1], points, date_format);
            draw_grid(
                frame,
                chunks[2],
                &historical_cards(points, date_format),
                Some(app.selected_index),
            );
        }
    }
}
