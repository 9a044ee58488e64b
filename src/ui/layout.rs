use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::ui::carousel::CardOffset;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

const BUTTON_WIDTH: u16 = 3;
const INDICATOR_WIDTH: u16 = 3;
const INDICATOR_GAP: u16 = 1;

/// Screen areas of the gallery body, shared by rendering and mouse
/// hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryLayout {
    /// Region whose hover pauses auto-advance.
    pub carousel: Rect,
    /// Card areas in render order: sides first, center last.
    pub cards: [(CardOffset, Rect); 3],
    pub prev_button: Rect,
    pub next_button: Rect,
    /// One hit area per catalog position.
    pub indicators: Vec<Rect>,
}

impl GalleryLayout {
    pub fn compute(body: Rect, count: usize) -> Self {
        let indicator_row = Rect {
            x: body.x,
            y: body.y + body.height.saturating_sub(2),
            width: body.width,
            height: body.height.min(1),
        };
        let cards_area = Rect {
            x: body.x + BUTTON_WIDTH + 2,
            y: body.y + body.height.min(1),
            width: body.width.saturating_sub(2 * (BUTTON_WIDTH + 2)),
            height: body.height.saturating_sub(4),
        };

        let [left, center, right] = Layout::horizontal([
            Constraint::Percentage(22),
            Constraint::Percentage(56),
            Constraint::Percentage(22),
        ])
        .areas(cards_area);
        let side_height = cards_area.height * 3 / 4;
        let side = |column: Rect| Rect {
            y: column.y + (column.height - side_height) / 2,
            height: side_height,
            ..column
        };

        let middle = body.y + body.height / 2;
        let prev_button = Rect {
            x: body.x + 1,
            y: middle,
            width: BUTTON_WIDTH.min(body.width),
            height: body.height.min(1),
        };
        let next_button = Rect {
            x: body.x + body.width.saturating_sub(BUTTON_WIDTH + 1),
            ..prev_button
        };

        let total = count as u16 * (INDICATOR_WIDTH + INDICATOR_GAP);
        let start = indicator_row.x + indicator_row.width.saturating_sub(total) / 2;
        let indicators = (0..count as u16)
            .map(|i| Rect {
                x: start + i * (INDICATOR_WIDTH + INDICATOR_GAP),
                y: indicator_row.y,
                width: INDICATOR_WIDTH,
                height: indicator_row.height,
            })
            .filter(|rect| rect.right() <= indicator_row.right())
            .collect();

        Self {
            carousel: body,
            cards: [
                (CardOffset::Prev, side(left)),
                (CardOffset::Next, side(right)),
                (CardOffset::Center, center),
            ],
            prev_button,
            next_button,
            indicators,
        }
    }

    pub fn card(&self, offset: CardOffset) -> Rect {
        self.cards
            .iter()
            .find(|(o, _)| *o == offset)
            .map(|(_, rect)| *rect)
            .unwrap_or_default()
    }
}

/// Number of lines `text` occupies when word-wrapped to `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = width.max(1) as usize;
    let mut lines = 1usize;
    let mut column = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if column > 0 && column + 1 + len > width {
            lines += 1;
            column = 0;
        }
        column = if column == 0 { len } else { column + 1 + len };
        while column > width {
            lines += 1;
            column -= width;
        }
    }
    lines.min(u16::MAX as usize) as u16
}
