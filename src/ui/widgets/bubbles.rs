use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::App;
use crate::chart::{continent_color, ChartScales};
use crate::domain::Continent;

const X_TICKS: [f64; 3] = [400.0, 4000.0, 40_000.0];
const Y_TICKS: [f64; 4] = [0.0, 30.0, 60.0, 90.0];

pub fn render_bubble_chart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Life Expectancy (Years) ")
        .title_bottom(" GDP Per Capita ($) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 4 {
        return;
    }

    if app.dataset.is_none() {
        let paragraph = Paragraph::new("No data loaded")
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let width = app.scales.width();
    let height = app.scales.height();

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                // Axis lines and ticks first, bubbles on top.
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: width,
                    y2: 0.0,
                    color: Color::DarkGray,
                });
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: 0.0,
                    y2: height,
                    color: Color::DarkGray,
                });

                for tick in X_TICKS {
                    let x = app.scales.x(tick);
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: 4.0,
                        color: Color::DarkGray,
                    });
                    ctx.print(
                        x - 8.0,
                        6.0,
                        TextLine::styled(format!("${tick}"), Style::default().fg(Color::Gray)),
                    );
                }

                for tick in Y_TICKS {
                    let y = height - app.scales.y(tick);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: y,
                        x2: 5.0,
                        y2: y,
                        color: Color::DarkGray,
                    });
                    ctx.print(
                        7.0,
                        y,
                        TextLine::styled(format!("{tick}"), Style::default().fg(Color::Gray)),
                    );
                }

                // Continent legend, lower right like the year label.
                let mut legend_y = 78.0;
                for continent in Continent::ALL {
                    ctx.print(
                        width - 70.0,
                        legend_y,
                        TextLine::styled(
                            format!("\u{25a0} {}", continent.label()),
                            Style::default().fg(continent_color(continent)),
                        ),
                    );
                    legend_y -= 12.0;
                }

                if let Some(year) = app.scene.year() {
                    ctx.print(
                        width - 40.0,
                        14.0,
                        TextLine::styled(
                            year.to_string(),
                            Style::default()
                                .fg(Color::White)
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }

                let hovered = app.hovered.as_deref();
                for bubble in app.scene.bubbles() {
                    ctx.draw(&Circle {
                        x: bubble.x(),
                        y: height - bubble.y(),
                        radius: bubble.radius(),
                        color: bubble.color,
                    });

                    if hovered == Some(bubble.key.as_str()) {
                        ctx.draw(&Circle {
                            x: bubble.x(),
                            y: height - bubble.y(),
                            radius: bubble.radius() + 2.0,
                            color: Color::White,
                        });
                    }
                }
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        inner,
    );
}

/// Map a terminal cell inside the plot area onto chart coordinates
/// (x rightward, y downward from the chart top, matching the scene).
/// Returns `None` for cells outside the plot.
pub fn data_coords(plot: Rect, column: u16, row: u16, scales: &ChartScales) -> Option<(f64, f64)> {
    if plot.width == 0 || plot.height == 0 {
        return None;
    }
    if column < plot.x || column >= plot.x + plot.width {
        return None;
    }
    if row < plot.y || row >= plot.y + plot.height {
        return None;
    }

    let fx = (f64::from(column - plot.x) + 0.5) / f64::from(plot.width);
    let fy = (f64::from(row - plot.y) + 0.5) / f64::from(plot.height);

    Some((fx * scales.width(), fy * scales.height()))
}

/// Chart units covered by one terminal cell. Used as the minimum pick
/// size so small bubbles remain hoverable.
pub fn cell_pick_size(plot: Rect, scales: &ChartScales) -> (f64, f64) {
    if plot.width == 0 || plot.height == 0 {
        return (1.0, 1.0);
    }
    (
        scales.width() / f64::from(plot.width),
        scales.height() / f64::from(plot.height),
    )
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{cell_pick_size, data_coords};
    use crate::chart::ChartScales;

    #[test]
    fn corners_of_the_plot_map_to_chart_extremes() {
        let scales = ChartScales::new(490.0, 240.0);
        let plot = Rect::new(10, 5, 49, 24);

        // Top-left cell center lands near the chart origin (top edge).
        let (x, y) = data_coords(plot, 10, 5, &scales).unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 5.0).abs() < 1e-9);

        // Bottom-right cell center is near (width, height).
        let (x, y) = data_coords(plot, 58, 28, &scales).unwrap();
        assert!((x - 485.0).abs() < 1e-9);
        assert!((y - 235.0).abs() < 1e-9);
    }

    #[test]
    fn cells_outside_the_plot_do_not_map() {
        let scales = ChartScales::default();
        let plot = Rect::new(10, 5, 49, 24);

        assert!(data_coords(plot, 9, 5, &scales).is_none());
        assert!(data_coords(plot, 59, 5, &scales).is_none());
        assert!(data_coords(plot, 10, 4, &scales).is_none());
        assert!(data_coords(plot, 10, 29, &scales).is_none());
    }

    #[test]
    fn pick_size_is_one_cell_in_chart_units() {
        let scales = ChartScales::new(490.0, 240.0);
        let plot = Rect::new(0, 0, 49, 24);

        let (rx, ry) = cell_pick_size(plot, &scales);
        assert!((rx - 10.0).abs() < 1e-9);
        assert!((ry - 10.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_plot_area_is_handled() {
        let scales = ChartScales::default();
        let plot = Rect::new(0, 0, 0, 0);

        assert!(data_coords(plot, 0, 0, &scales).is_none());
        assert_eq!(cell_pick_size(plot, &scales), (1.0, 1.0));
    }
}
