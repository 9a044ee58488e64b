use crate::ui::carousel::CarouselState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PAUSED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, carousel: &CarouselState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if !carousel.autoplay() {
            ("■ manual", Style::default().fg(HEADER_SEPARATOR))
        } else if carousel.is_paused() {
            ("⏸ paused", Style::default().fg(STATUS_PAUSED))
        } else {
            ("▶ auto", Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("PROJECT GALLERY", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{}/{}", carousel.current_index() + 1, carousel.len()),
                text_style,
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
