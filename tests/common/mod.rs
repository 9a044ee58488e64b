//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio::catalog::{Catalog, DemoRules, ProjectEntry};
use folio::ui::app::App;
use folio::ui::carousel::CarouselTiming;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Catalog of `n` projects with ids 1..=n in a generic category.
pub fn catalog_of(n: u32) -> Catalog {
    let entries = (1..=n)
        .map(|id| ProjectEntry {
            id,
            title: format!("Project {id}"),
            category: "Python Game".to_string(),
            short_description: format!("Short {id}"),
            long_description: format!("Long description of project {id}"),
            image: format!("/p{id}.png"),
            demo: None,
        })
        .collect();
    Catalog::from_entries(entries, &DemoRules::default()).expect("valid catalog")
}

/// App over the built-in catalog with default timing, sized 120x40.
pub fn builtin_app(now: Instant) -> App {
    let rules = DemoRules::default();
    let mut app = App::new(
        Catalog::builtin(&rules),
        rules,
        CarouselTiming::default(),
        true,
        now,
    );
    app.on_resize(120, 40);
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn moved(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Moved, column, row)
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}
