//! Rendering and hit areas for the to-do list widget.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GALLERY_RED, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};

use super::state::{TodoFocus, TodoListState};

const ADD_LABEL: &str = "[Add]";
const DELETE_LABEL: &str = "[Delete]";
const CLEAR_LABEL: &str = "[Delete All]";

/// One visible item row and its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoRow {
    pub position: usize,
    pub checkbox: Rect,
    pub delete: Rect,
    pub line: Rect,
}

/// Screen areas of the widget, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLayout {
    pub frame: Rect,
    pub input: Rect,
    pub add_button: Rect,
    pub list: Rect,
    pub rows: Vec<TodoRow>,
    pub count: Rect,
    pub clear_button: Rect,
    pub credit: Rect,
}

impl TodoLayout {
    pub fn compute(area: Rect, state: &TodoListState) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        let [input_row, list, count, credit] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let add_width = (ADD_LABEL.len() as u16).min(input_row.width);
        let [input, add_button] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(add_width)])
                .areas(input_row);
        let add_button = Rect {
            y: add_button.y + add_button.height / 2,
            height: add_button.height.min(1),
            ..add_button
        };

        let visible = list.height as usize;
        let offset = if state.focus == TodoFocus::List && state.cursor >= visible {
            state.cursor + 1 - visible
        } else {
            0
        };
        let delete_width = (DELETE_LABEL.len() as u16).min(list.width);
        let rows = (offset..state.items.len())
            .take(visible)
            .enumerate()
            .map(|(row, position)| {
                let line = Rect {
                    x: list.x,
                    y: list.y + row as u16,
                    width: list.width,
                    height: 1,
                };
                TodoRow {
                    position,
                    checkbox: Rect {
                        width: line.width.min(4),
                        ..line
                    },
                    delete: Rect {
                        x: line.x + line.width.saturating_sub(delete_width),
                        width: delete_width,
                        ..line
                    },
                    line,
                }
            })
            .collect();

        let clear_width = (CLEAR_LABEL.len() as u16).min(count.width);
        let clear_button = Rect {
            x: count.x + count.width.saturating_sub(clear_width),
            width: clear_width,
            ..count
        };

        Self {
            frame: area,
            input,
            add_button,
            list,
            rows,
            count,
            clear_button,
            credit,
        }
    }
}

/// Terminal columns taken by `input`. Wide characters count double.
pub fn input_display_width(input: &str) -> u16 {
    Span::raw(input).width().min(u16::MAX as usize) as u16
}

/// Draw the widget into `layout.frame`.
pub fn render_todo(frame: &mut Frame, layout: &TodoLayout, state: &TodoListState) {
    let block = Block::default()
        .title(" HOMEWORK TO-DO LIST ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GALLERY_RED));
    frame.render_widget(block, layout.frame);

    let input_focused = state.focus == TodoFocus::Input;
    let input_text = if state.input.is_empty() {
        Span::styled("Add a new todo", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(state.input.as_str(), Style::default().fg(HEADER_TEXT))
    };
    let input_border = if input_focused { ACCENT } else { POPUP_BORDER };
    frame.render_widget(
        Paragraph::new(Line::from(input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(input_border)),
        ),
        layout.input,
    );
    if input_focused && layout.input.width > 2 {
        let typed = input_display_width(&state.input);
        let x = layout.input.x + 1 + typed.min(layout.input.width.saturating_sub(3));
        frame.set_cursor_position((x, layout.input.y + 1));
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            ADD_LABEL,
            Style::default().fg(GALLERY_RED).add_modifier(Modifier::BOLD),
        )),
        layout.add_button,
    );

    if state.items.is_empty() {
        frame.render_widget(
            Paragraph::new("No homework added yet")
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center),
            layout.list,
        );
    }
    for row in &layout.rows {
        let Some(item) = state.items.get(row.position) else {
            continue;
        };
        let (mark, mark_style) = if item.completed {
            ("(✓)", Style::default().fg(GALLERY_RED).add_modifier(Modifier::BOLD))
        } else {
            ("( )", Style::default().fg(MUTED_TEXT))
        };
        let text_style = if item.completed {
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let mut line = Line::from(vec![
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(item.text.as_str(), text_style),
        ]);
        if state.focus == TodoFocus::List && row.position == state.cursor {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        frame.render_widget(Paragraph::new(line), row.line);
        frame.render_widget(
            Paragraph::new(Span::styled(DELETE_LABEL, Style::default().fg(GALLERY_RED))),
            row.delete,
        );
    }

    frame.render_widget(
        Paragraph::new(state.count_label()).style(Style::default().fg(MUTED_TEXT)),
        layout.count,
    );
    let clear_style = if state.can_clear() {
        Style::default().fg(HEADER_TEXT)
    } else {
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CLEAR_LABEL, clear_style)),
        layout.clear_button,
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Made By ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                "Kytto Valentine",
                Style::default().fg(GALLERY_RED).add_modifier(Modifier::BOLD),
            ),
        ])),
        layout.credit,
    );
}
