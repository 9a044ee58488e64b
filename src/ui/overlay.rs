//! Detail overlay: the modal showing one project and its demo slot.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::catalog::{Catalog, DemoKind, DemoRules, ProjectRecord};
use crate::ui::layout::{centered_rect, wrapped_height};
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use crate::ui::todo::{render_todo, TodoLayout, TodoListState};

const CLOSE_LABEL: &str = "[x]";

/// Record shown by the overlay, if the selection resolves.
pub fn resolve_selection(catalog: &Catalog, selected_id: Option<u32>) -> Option<&ProjectRecord> {
    selected_id.and_then(|id| catalog.find(id))
}

/// Screen areas of the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub frame: Rect,
    pub close_button: Rect,
    pub category: Rect,
    pub title: Rect,
    pub image: Rect,
    pub description: Rect,
    pub demo: Rect,
}

impl OverlayLayout {
    pub fn compute(area: Rect, record: &ProjectRecord) -> Self {
        let frame = centered_rect(84, 90, area);
        let inner = Block::default().borders(Borders::ALL).inner(frame);
        let inner = Rect {
            x: inner.x + 1,
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let description_height = wrapped_height(&record.long_description, inner.width)
            .min(inner.height / 3)
            .max(1);
        let [category, title, image, _, description, _, demo] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(description_height),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .areas(inner);

        let close_width = (CLOSE_LABEL.len() as u16).min(frame.width);
        let close_button = Rect {
            x: frame.x + frame.width.saturating_sub(close_width + 2),
            y: frame.y,
            width: close_width,
            height: frame.height.min(1),
        };

        Self {
            frame,
            close_button,
            category,
            title,
            image,
            description,
            demo,
        }
    }
}

/// Draw the overlay for `record`. `todo` is the list widget instance when
/// the record's demo slot is [`DemoKind::ListWidget`].
pub fn render_overlay(
    frame: &mut Frame,
    layout: &OverlayLayout,
    record: &ProjectRecord,
    rules: &DemoRules,
    todo: Option<&TodoListState>,
) {
    frame.render_widget(Clear, layout.frame);
    frame.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER)),
        layout.frame,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            CLOSE_LABEL,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        layout.close_button,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(
            record.category.to_uppercase(),
            Style::default().fg(ACCENT),
        )),
        layout.category,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            record.title.as_str(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        layout.title,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("image: {}", record.image),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
        layout.image,
    );
    frame.render_widget(
        Paragraph::new(record.long_description.as_str())
            .style(Style::default().fg(MUTED_TEXT))
            .wrap(Wrap { trim: true }),
        layout.description,
    );

    match (&record.demo, todo) {
        (DemoKind::ListWidget, Some(todo)) => {
            let todo_layout = TodoLayout::compute(layout.demo, todo);
            render_todo(frame, &todo_layout, todo);
        }
        (demo, _) => render_demo_notice(frame, layout.demo, demo, rules),
    }
}

/// Static content of the demo slot.
pub fn demo_notice(demo: &DemoKind, rules: &DemoRules) -> Vec<Line<'static>> {
    match demo {
        DemoKind::Embedded {
            external_id: Some(id),
        } => vec![
            Line::from(Span::styled(
                "Interactive Demo",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                rules.embed_url(id),
                Style::default()
                    .fg(ACCENT)
                    .add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Click the green flag to start!",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        DemoKind::Embedded { external_id: None } => Vec::new(),
        DemoKind::ConceptOnly => vec![
            Line::from(Span::styled(
                "No Demo Available",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "This is a concept design",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
        // Only reached without a widget instance; fall back to the default notice.
        DemoKind::ListWidget | DemoKind::OnRequest => vec![
            Line::from(Span::styled(
                "Please Ask Representative to Run Application",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Live demo available upon request",
                Style::default().fg(MUTED_TEXT),
            )),
        ],
    }
}

fn render_demo_notice(frame: &mut Frame, area: Rect, demo: &DemoKind, rules: &DemoRules) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = demo_notice(demo, rules);
    let height = (lines.len() as u16).min(inner.height);
    let centered = Rect {
        y: inner.y + (inner.height - height) / 2,
        height,
        ..inner
    };
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(HEADER_TEXT))
            .alignment(Alignment::Center),
        centered,
    );
}
