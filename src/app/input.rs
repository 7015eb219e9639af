use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::state::App;
use crate::ui::screens::main::chart_plot_area;
use crate::ui::widgets::bubbles::{cell_pick_size, data_coords};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }

    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => app.show_help = false,
            KeyCode::Char('q') => app.running = false,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(' ') => {
            app.toggle_playback();
            app.status_message.clear();
        }
        KeyCode::Char('r') => {
            app.reset();
            app.status_message = "Rewound to the first year".to_string();
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('q') => app.running = false,
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: &MouseEvent) {
    if mouse.kind != MouseEventKind::Moved {
        return;
    }

    app.mouse_position = Some((mouse.column, mouse.row));
    let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
    update_hover(app, Rect::new(0, 0, width, height), mouse.column, mouse.row);
}

/// Map a pointer cell into chart space and hit-test the scene. Shares the
/// layout math with the renderer so hover and drawing agree.
fn update_hover(app: &mut App, frame_area: Rect, column: u16, row: u16) {
    let plot = chart_plot_area(frame_area);

    let Some((x, y)) = data_coords(plot, column, row, &app.scales) else {
        app.hovered = None;
        return;
    };

    let (min_rx, min_ry) = cell_pick_size(plot, &app.scales);
    app.hovered = app
        .scene
        .hit_test(x, y, min_rx, min_ry)
        .map(|bubble| bubble.key.clone());
}
