use crate::ui::app::App;
use crate::ui::carousel::CardOffset;
use crate::ui::footer::{render_footer, FooterMode};
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, GalleryLayout};
use crate::ui::overlay::render_overlay;
use crate::ui::theme::{
    ACCENT, BACKDROP_TEXT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
};
use crate::catalog::ProjectRecord;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let carousel = app.carousel();

    frame.render_widget(Header::new().widget(carousel), header);
    frame.render_widget(Clear, body);
    draw_gallery(frame, app, &app.gallery_layout());

    let mode = match (carousel.is_overlay_open(), app.todo()) {
        (false, _) => FooterMode::Gallery,
        (true, Some(_)) => FooterMode::TodoList,
        (true, None) => FooterMode::Overlay,
    };
    render_footer(frame, footer, mode);

    if let (Some(record), Some(layout)) = (app.selected_project(), app.overlay_layout()) {
        render_overlay(frame, &layout, record, app.demo_rules(), app.todo());
    }
}

fn draw_gallery(frame: &mut Frame<'_>, app: &App, layout: &GalleryLayout) {
    let carousel = app.carousel();

    if layout.carousel.height > 0 {
        let backdrop = Rect {
            height: 1,
            ..layout.carousel
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                "P R O J E C T S",
                Style::default()
                    .fg(BACKDROP_TEXT)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            backdrop,
        );
    }

    let window = carousel.visible_window(app.catalog());
    for (offset, rect) in &layout.cards {
        if let Some(card) = window.iter().find(|card| card.offset == *offset) {
            let hovered = carousel.hovered_id() == Some(card.record.id);
            draw_card(frame, *rect, card.record, *offset, hovered, carousel.is_locked());
        }
    }

    let button_style = if carousel.is_locked() {
        Style::default().fg(HEADER_SEPARATOR).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(" ‹ ", button_style)),
        layout.prev_button,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(" › ", button_style)),
        layout.next_button,
    );

    for (index, rect) in layout.indicators.iter().enumerate() {
        let indicator = if index == carousel.current_index() {
            Span::styled("━━━", Style::default().fg(ACCENT))
        } else {
            Span::styled(" • ", Style::default().fg(MUTED_TEXT))
        };
        frame.render_widget(Paragraph::new(indicator), *rect);
    }
}

/// Center card at full brightness; side cards dimmed and without detail.
fn draw_card(
    frame: &mut Frame<'_>,
    area: Rect,
    record: &ProjectRecord,
    offset: CardOffset,
    hovered: bool,
    animating: bool,
) {
    if area.width < 4 || area.height < 3 {
        return;
    }
    frame.render_widget(Clear, area);

    let center = offset.is_center();
    let mut base = Style::default().fg(HEADER_TEXT);
    if !center || animating {
        base = base.add_modifier(Modifier::DIM);
    }
    let border = if center { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(base);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("[ {} ]", record.image),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            record.category.to_uppercase(),
            Style::default().fg(ACCENT),
        )),
        Line::from(Span::styled(
            record.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if center {
        let description = if hovered {
            record.long_description.as_str()
        } else {
            record.short_description.as_str()
        };
        lines.push(Line::from(description));
        if hovered {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "VIEW PROJECT ›",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, DemoRules};
    use crate::ui::carousel::CarouselTiming;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let rules = DemoRules::default();
        let mut app = App::new(
            Catalog::builtin(&rules),
            rules,
            CarouselTiming::default(),
            true,
            Instant::now(),
        );
        app.on_resize(120, 40);
        app
    }

    #[test]
    fn draws_center_card_title() {
        let app = app();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("Mini Kitchen"));
        assert!(text.contains("PROJECT GALLERY"));
    }

    #[test]
    fn draws_todo_placeholder_in_overlay() {
        let mut app = app();
        app.select(4);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        let text = screen_text(&terminal);
        assert!(text.contains("No homework added yet"));
        assert!(text.contains("0 items total"));
    }

    #[test]
    fn draws_concept_notice() {
        let mut app = app();
        app.select(6);
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("terminal");
        terminal.draw(|frame| draw(frame, &app)).expect("draw");
        assert!(screen_text(&terminal).contains("No Demo Available"));
    }
}
