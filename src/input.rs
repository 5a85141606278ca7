//! Terminal input: maps crossterm events onto game inputs.

use crate::core::constants::{CELL_HEIGHT_PX, CELL_WIDTH_PX};
use crate::sim::{Bounds, InputEvent};
use crate::ui::play_area_for;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use ratatui::layout::Rect;

/// What the main loop should do with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    Game(InputEvent),
    Quit,
    Ignore,
}

/// Logical screen size for a terminal of `cols` x `rows`.
pub fn bounds_for_terminal(cols: u16, rows: u16) -> Bounds {
    let area = play_area_for(Rect::new(0, 0, cols, rows));
    Bounds::new(
        area.width as f64 * CELL_WIDTH_PX,
        area.height as f64 * CELL_HEIGHT_PX,
    )
}

pub fn resize_event(cols: u16, rows: u16) -> InputEvent {
    let bounds = bounds_for_terminal(cols, rows);
    InputEvent::Resize {
        width: bounds.width,
        height: bounds.height,
    }
}

pub fn map_key(key: KeyEvent) -> InputAction {
    if key.kind == KeyEventKind::Release {
        return InputAction::Ignore;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => InputAction::Game(InputEvent::Flap),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        _ => InputAction::Ignore,
    }
}

pub fn map_event(event: Event) -> InputAction {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => InputAction::Game(InputEvent::Flap),
            _ => InputAction::Ignore,
        },
        Event::Resize(cols, rows) => InputAction::Game(resize_event(cols, rows)),
        _ => InputAction::Ignore,
    }
}
