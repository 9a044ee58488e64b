//! Keyboard and pointer routing. Every navigation path goes through the
//! same `App` entry points, so the animation lock applies uniformly.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

use crate::ui::app::App;
use crate::ui::carousel::{CardOffset, Direction};
use crate::ui::todo::{TodoFocus, TodoIntent};

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Arrow keys drive the carousel whatever has focus, overlay included.
    let arrow = match key.code {
        KeyCode::Left => Some(Direction::Prev),
        KeyCode::Right => Some(Direction::Next),
        _ => None,
    };
    if let Some(direction) = arrow {
        app.advance(direction, now);
        return;
    }

    if app.carousel().is_overlay_open() {
        handle_overlay_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('h') => app.advance(Direction::Prev, now),
        KeyCode::Char('l') => app.advance(Direction::Next, now),
        KeyCode::Enter => app.open_current(),
        KeyCode::Char('p') => app.toggle_pause(now),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            app.jump_to(index, now);
        }
        _ => {}
    }
}

fn handle_overlay_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.close_overlay();
        return;
    }

    let Some(todo) = app.todo() else {
        if key.code == KeyCode::Char('q') {
            app.close_overlay();
        }
        return;
    };

    if key.code == KeyCode::Tab || key.code == KeyCode::BackTab {
        app.dispatch_todo(TodoIntent::FocusNext);
        return;
    }

    let intent = match todo.focus() {
        TodoFocus::Input => match key.code {
            KeyCode::Enter => Some(TodoIntent::Add),
            KeyCode::Backspace => Some(TodoIntent::Backspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(TodoIntent::InsertChar(ch))
            }
            _ => None,
        },
        TodoFocus::List => {
            let position = todo.cursor();
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => Some(TodoIntent::CursorUp),
                KeyCode::Down | KeyCode::Char('j') => Some(TodoIntent::CursorDown),
                KeyCode::Enter | KeyCode::Char(' ') => Some(TodoIntent::Toggle { position }),
                KeyCode::Delete | KeyCode::Char('d') => Some(TodoIntent::Remove { position }),
                KeyCode::Char('D') => Some(TodoIntent::ClearAll),
                _ => None,
            }
        }
    };

    if let Some(intent) = intent {
        app.dispatch_todo(intent);
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    let position = Position::new(mouse.column, mouse.row);

    if app.carousel().is_overlay_open() {
        handle_overlay_mouse(app, mouse.kind, position, now);
        return;
    }

    let layout = app.gallery_layout();
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.set_paused(layout.carousel.contains(position), now);
            let hovered = if layout.card(CardOffset::Center).contains(position) {
                app.center_id()
            } else {
                None
            };
            app.set_hovered(hovered);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.card(CardOffset::Center).contains(position) {
                app.open_current();
            } else if layout.prev_button.contains(position) {
                app.advance(Direction::Prev, now);
            } else if layout.next_button.contains(position) {
                app.advance(Direction::Next, now);
            } else if let Some(index) = hit_index(&layout.indicators, position) {
                app.jump_to(index, now);
            }
        }
        MouseEventKind::ScrollUp => app.advance(Direction::Prev, now),
        MouseEventKind::ScrollDown => app.advance(Direction::Next, now),
        _ => {}
    }
}

fn handle_overlay_mouse(app: &mut App, kind: MouseEventKind, position: Position, now: Instant) {
    match kind {
        // The pointer is over the overlay, not the carousel.
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.set_paused(false, now);
            app.set_hovered(None);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(overlay) = app.overlay_layout() else {
                app.close_overlay();
                return;
            };
            if overlay.close_button.contains(position) || !overlay.frame.contains(position) {
                app.close_overlay();
                return;
            }
            if let Some(intent) = app.todo_layout().and_then(|layout| {
                if layout.add_button.contains(position) {
                    Some(TodoIntent::Add)
                } else if layout.clear_button.contains(position) {
                    Some(TodoIntent::ClearAll)
                } else if layout.input.contains(position) {
                    Some(TodoIntent::SetFocus(TodoFocus::Input))
                } else {
                    layout.rows.iter().find_map(|row| {
                        if row.checkbox.contains(position) {
                            Some(TodoIntent::Toggle {
                                position: row.position,
                            })
                        } else if row.delete.contains(position) {
                            Some(TodoIntent::Remove {
                                position: row.position,
                            })
                        } else {
                            None
                        }
                    })
                }
            }) {
                app.dispatch_todo(intent);
            }
        }
        _ => {}
    }
}

fn hit_index(areas: &[Rect], position: Position) -> Option<usize> {
    areas.iter().position(|area| area.contains(position))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
