use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use super::cards::{Card, GaugeView};
use super::formatters::truncate_str;
use super::severity_color;

pub const CARD_WIDTH: u16 = 30;

/// Columns that fit in `width`, never less than one.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

pub fn draw_grid(frame: &mut Frame, area: Rect, cards: &[Card], selected: Option<usize>) {
    if cards.is_empty() || area.width == 0 || area.height == 0 {
        return;
    }
    let columns = grid_columns(area.width);
    let card_height = cards.iter().map(Card::height).max().unwrap_or(3);
    let visible_rows = usize::from((area.height / card_height).max(1));
    let selected_row = selected.map(|i| i / columns).unwrap_or(0);
    let first_row = (selected_row + 1).saturating_sub(visible_rows);
    let col_width = area.width / columns as u16;

    for (i, card) in cards
        .iter()
        .enumerate()
        .skip(first_row * columns)
        .take(visible_rows * columns)
    {
        let row = (i / columns - first_row) as u16;
        let col = (i % columns) as u16;
        let rect = Rect {
            x: area.x + col * col_width,
            y: area.y + row * card_height,
            width: col_width,
            height: card_height,
        }
        .intersection(area);
        if rect.is_empty() {
            continue;
        }
        draw_card(frame, rect, card, selected == Some(i));
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool) {
    let border_style = if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = Vec::new();
    if card.subtitle.is_some() {
        constraints.push(Constraint::Length(1));
    }
    if card.gauge.is_some() {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    constraints.extend(card.fields.iter().map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut next = 0;

    if let Some(subtitle) = &card.subtitle {
        let line = Paragraph::new(Line::from(Span::styled(
            truncate_str(subtitle, usize::from(inner.width)),
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(line, rows[next]);
        next += 1;
    }

    if let Some(gauge) = &card.gauge {
        draw_gauge(frame, rows[next], rows[next + 1], gauge);
        next += 2;
    }

    for (key, value) in &card.fields {
        let line = Paragraph::new(Line::from(vec![
            Span::styled(format!("{}: ", key), Style::default().fg(Color::DarkGray)),
            Span::raw(value.clone()),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(line, rows[next]);
        next += 1;
    }
}

fn draw_gauge(frame: &mut Frame, bar: Rect, caption: Rect, gauge: &GaugeView) {
    let color = severity_color(gauge.category.severity());
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Rgb(0x30, 0x30, 0x30)))
        .ratio(gauge.fill_ratio())
        .label(Span::styled(
            gauge.text.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(widget, bar);

    let label = Paragraph::new(Line::from(Span::styled(
        gauge.category.label(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(label, caption);
}
