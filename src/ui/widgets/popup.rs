use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use ratatui::Frame;

use crate::app::App;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Vertical)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
            ratatui::layout::Constraint::Percentage(percent_y),
            ratatui::layout::Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
            ratatui::layout::Constraint::Percentage(percent_x),
            ratatui::layout::Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}

const TOOLTIP_WIDTH: u16 = 30;
const TOOLTIP_HEIGHT: u16 = 7;

/// Country detail popup next to the pointer. Shown only while a bubble
/// is hovered; flips to the other side of the pointer near the edges.
pub fn render_tooltip(app: &App, f: &mut Frame<'_>) {
    let Some(bubble) = app.hovered_bubble() else {
        return;
    };
    let Some((column, row)) = app.mouse_position else {
        return;
    };

    let area = tooltip_area(f.area(), column, row);
    if area.width < 4 || area.height < 4 {
        return;
    }

    f.render_widget(ClearWidget, area);

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::Red);
    let lines = vec![
        TextLine::from(vec![
            Span::styled("Country: ", label_style),
            Span::styled(bubble.key.clone(), value_style.add_modifier(Modifier::BOLD)),
        ]),
        TextLine::from(vec![
            Span::styled("Continent: ", label_style),
            Span::styled(bubble.continent.label(), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Life Expectancy: ", label_style),
            Span::styled(format!("{:.2}", bubble.life_exp), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("GDP Per Capita: ", label_style),
            Span::styled(format_currency(bubble.income), value_style),
        ]),
        TextLine::from(vec![
            Span::styled("Population: ", label_style),
            Span::styled(format_grouped(bubble.population), value_style),
        ]),
    ];

    let paragraph = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

fn tooltip_area(frame: Rect, column: u16, row: u16) -> Rect {
    let width = TOOLTIP_WIDTH.min(frame.width);
    let height = TOOLTIP_HEIGHT.min(frame.height);

    let mut x = column.saturating_add(2);
    if x + width > frame.x + frame.width {
        x = column.saturating_sub(width + 1);
    }

    let mut y = row.saturating_add(1);
    if y + height > frame.y + frame.height {
        y = row.saturating_sub(height);
    }

    Rect {
        x: x.max(frame.x),
        y: y.max(frame.y),
        width,
        height,
    }
}

/// Currency with grouped digits and no decimals, `$1,234`.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_digits(value))
}

/// Grouped integer, `1,234,567`.
pub fn format_grouped(value: f64) -> String {
    group_digits(value)
}

#[allow(clippy::cast_possible_truncation)]
fn group_digits(value: f64) -> String {
    let rounded = value.round().abs() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value.round() < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
