use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::widgets::bubbles::render_bubble_chart;
use crate::ui::widgets::popup::{centered_rect, render_tooltip, ClearWidget};

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let layout = build_main_layout(app, f);

    if app.show_help {
        render_help_popup(f, layout[0]);
        return;
    }

    render_title_section(app, f, layout[0]);
    render_bubble_chart(app, f, layout[1]);
    render_status_section(app, f, layout[2]);
    render_shortcuts(app, f, layout[3]);

    render_tooltip(app, f);
}

fn build_main_layout(app: &App, f: &Frame<'_>) -> Vec<Rect> {
    if app.show_help {
        return Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100)])
            .split(f.area().inner(Margin::new(2, 1)))
            .to_vec();
    }

    main_layout_chunks(f.area())
}

fn main_layout_chunks(total: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title area
            Constraint::Min(10),   // Chart area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(total.inner(Margin::new(2, 1)))
        .to_vec()
}

/// The cells the chart canvas actually paints into, derived from the full
/// frame area. Input-side hit testing uses the same math as the renderer.
pub fn chart_plot_area(total: Rect) -> Rect {
    let chunks = main_layout_chunks(total);
    chunks[1].inner(Margin::new(1, 1))
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(title_block, area);

    let inner = area.inner(Margin::new(1, 1));
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Gapminder ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "GDP vs Life Expectancy",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(title, chunks[0]);

    let year_text = app.scene.year().map_or_else(
        || "no data".to_string(),
        |year| format!("{} | {}", app.playback.control_label(), year),
    );
    let playback = Paragraph::new(TextLine::from(Span::styled(
        year_text,
        Style::default().fg(Color::Yellow),
    )))
    .alignment(Alignment::Right);
    f.render_widget(playback, chunks[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        let hint = if app.playback.playing {
            "Playing - Space pauses"
        } else {
            "Stopped - Space plays, hover a bubble for details"
        };
        Text::from(Span::styled(hint, Style::default().fg(Color::Gray)))
    } else {
        Text::from(Span::styled(
            &app.status_message,
            Style::default().fg(Color::Green),
        ))
    };

    let paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("Space", key_style),
        Span::styled(format!(": {} | ", app.playback.control_label()), label_style),
        Span::styled("r", key_style),
        Span::styled(": Reset | ", label_style),
        Span::styled("?", key_style),
        Span::styled(": Help | ", label_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", label_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(70, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Gapminder bubble chart",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Each bubble is one country: GDP per capita on a log x-axis, life expectancy on the y-axis, bubble size by population, color by continent.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from("  Space - Play / pause the year-by-year animation"),
        TextLine::from("  r     - Reset to the first year"),
        TextLine::from("  ?     - Toggle this help popup"),
        TextLine::from("  q     - Quit"),
        TextLine::from(""),
        TextLine::from("Hover a bubble with the mouse for country details."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::render_main;
    use crate::app::App;

    fn rendered_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| render_main(app, f)).unwrap();
        format!("{:?}", terminal.backend().buffer())
    }

    #[test]
    fn status_section_shows_the_message_or_a_playback_hint() {
        let mut app = App::new();
        assert!(rendered_text(&app).contains("Stopped - Space plays"));

        app.status_message = "Rewound to the first year".to_string();
        assert!(rendered_text(&app).contains("Rewound to the first year"));
    }

    #[test]
    fn help_popup_replaces_the_main_screen() {
        let mut app = App::new();
        app.show_help = true;

        let text = rendered_text(&app);
        assert!(text.contains("Help & Keyboard Shortcuts"));
        assert!(!text.contains("Status"));
    }
}
