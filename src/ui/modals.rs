use super::centered_rect;
use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Blank out `area` and show a spinner over it.
pub fn draw_loading_overlay(frame: &mut Frame, area: Rect, app: &App) {
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Rgb(20, 20, 28))),
        area,
    );

    let frame_idx = (app.tick as usize) % SPINNER.len();
    let popup = centered_rect(30, 20, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  Loading...", SPINNER[frame_idx]),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];
    let spinner = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(spinner, popup);
}

pub fn draw_help(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let key = |k: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {:<14}", k), Style::default().fg(Color::Yellow)),
            Span::raw(desc.to_string()),
        ])
    };
    let section = |title: &str| {
        Line::from(Span::styled(
            format!("─── {} ───", title),
            Style::default().fg(Color::Cyan),
        ))
    };

    let content = vec![
        section("Global"),
        key("q", "Quit"),
        key("Esc / Bksp", "Back"),
        key("H", "Home (dashboard)"),
        key("r", "Reload current screen"),
        key(":", "Go to route, e.g. /historical/AAPL"),
        key("?", "Toggle help"),
        Line::from(""),
        section("Dashboard"),
        key("Enter / a", "Run full analysis"),
        Line::from(""),
        section("Analysis Results"),
        key("↑↓←→ / hjkl", "Move selection"),
        key("Enter", "Open historical detail"),
        Line::from(""),
        section("Historical Data"),
        key("[ / ]", "Previous / next stock"),
        key("↑↓←→ / hjkl", "Move selection"),
        Line::from(""),
        Line::from(Span::styled(
            "  [?/Enter/Esc] Close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(content).block(
        Block::default()
            .title(" Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );
    frame.render_widget(help, area);
}
