pub mod cards;
pub mod chart;
pub mod formatters;
pub mod grid;
mod modals;
mod screens;

pub use grid::grid_columns;

use crate::app::{App, InputMode, Route};
use crate::mood::Severity;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub(crate) fn severity_color(severity: Severity) -> Color {
    let (r, g, b) = severity.rgb();
    Color::Rgb(r, g, b)
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Width available to the card grid for a terminal of `width` columns.
pub fn content_width(width: u16) -> u16 {
    width.saturating_sub(2)
}

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], app);

    let body = Block::default().borders(Borders::LEFT | Borders::RIGHT);
    let content = body.inner(chunks[1]);
    frame.render_widget(body, chunks[1]);

    match app.route() {
        Route::Dashboard => screens::draw_dashboard(frame, content, app),
        Route::Analysis => screens::draw_analysis(frame, content, app),
        Route::Historical(symbol) => screens::draw_historical(frame, content, app, symbol),
    }

    if app.overlay_visible() {
        modals::draw_loading_overlay(frame, chunks[1], app);
    }

    draw_footer(frame, chunks[2], app);

    if app.input_mode == InputMode::Help {
        modals::draw_help(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let current_time = chrono::Local::now().format("%H:%M:%S").to_string();
    let busy = app.overlay_visible() || app.analysing;
    let status = if busy {
        "[Loading...]".to_string()
    } else {
        format!("[{}]", current_time)
    };

    let route = app.route();
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Market Mood ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("| ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            route.title(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", route.path()), Style::default().fg(Color::DarkGray)),
        Span::styled(status, Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Normal => {
            let help = if app.overlay_visible() {
                " [Esc] Back [q] Quit "
            } else {
                match app.route() {
                    Route::Dashboard => " [Enter] Run Full Analysis [:] Go to [?] Help [q] Quit ",
                    Route::Analysis => {
                        " [Enter] History [↑↓←→] Nav [r] Reload [Esc] Back [H] Home [?] Help "
                    }
                    Route::Historical(_) => {
                        " [[/]] Prev/Next stock [↑↓←→] Nav [r] Reload [Esc] Back [H] Home [?] Help "
                    }
                }
            };
            match (&app.status_message, app.route()) {
                (Some(msg), route) if *route != Route::Dashboard => Line::from(vec![
                    Span::styled(msg, Style::default().fg(Color::Yellow)),
                    Span::raw(" | "),
                    Span::styled(help, Style::default().fg(Color::DarkGray)),
                ]),
                _ => Line::from(Span::styled(help, Style::default().fg(Color::DarkGray))),
            }
        }
        InputMode::Goto => Line::from(vec![
            Span::raw(" Go to: "),
            Span::styled(&app.input_buffer, Style::default().fg(Color::Cyan)),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::raw(" | [Enter] Go | [Esc] Cancel"),
        ]),
        InputMode::Help => Line::from(Span::styled(
            " [?/Enter/Esc] Close help ",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
