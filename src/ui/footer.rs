use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which key hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FooterMode {
    Gallery,
    Overlay,
    TodoList,
}

impl FooterMode {
    pub fn hints(self) -> &'static str {
        match self {
            FooterMode::Gallery => " ←/→: Browse │ Enter: Open │ 1-9: Jump │ P: Pause │ Q: Quit",
            FooterMode::Overlay => " Esc/Q: Close",
            FooterMode::TodoList => {
                " Enter: Add │ Tab: List │ Space: Toggle │ D: Delete │ Shift+D: Delete All │ Esc: Close"
            }
        }
    }
}

/// Bottom bar: key hints on the left, version on the right.
pub fn render_footer(frame: &mut Frame, area: Rect, mode: FooterMode) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let version = format!("folio v{VERSION} ");
    let [hints, version_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(version.chars().count() as u16),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(
            mode.hints(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
        hints,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(version, Style::default().fg(MUTED_TEXT)))
            .alignment(Alignment::Right),
        version_area,
    );
}
