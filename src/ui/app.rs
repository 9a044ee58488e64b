use ratatui::layout::Rect;
use std::time::Instant;

use crate::catalog::{Catalog, DemoKind, DemoRules, ProjectRecord};
use crate::ui::carousel::{
    CardOffset, CarouselIntent, CarouselReducer, CarouselState, CarouselTiming, Direction,
};
use crate::ui::layout::{body_rect, GalleryLayout};
use crate::ui::mvi::Reducer;
use crate::ui::overlay::{resolve_selection, OverlayLayout};
use crate::ui::todo::{TodoIntent, TodoLayout, TodoListState, TodoReducer};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    area: Rect,
    catalog: Catalog,
    demo_rules: DemoRules,
    /// Carousel controller state (MVI pattern).
    carousel: CarouselState,
    /// List widget instance, alive only while its overlay is open.
    todo: Option<TodoListState>,
}

impl App {
    pub fn new(
        catalog: Catalog,
        demo_rules: DemoRules,
        timing: CarouselTiming,
        autoplay: bool,
        now: Instant,
    ) -> Self {
        let carousel = CarouselState::new(catalog.len(), timing, autoplay, now);
        Self {
            should_quit: false,
            area: Rect::default(),
            catalog,
            demo_rules,
            carousel,
            todo: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn demo_rules(&self) -> &DemoRules {
        &self.demo_rules
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn todo(&self) -> Option<&TodoListState> {
        self.todo.as_ref()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn on_tick(&mut self, now: Instant) {
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Tick { now });
    }

    pub fn advance(&mut self, direction: Direction, now: Instant) {
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer,
            CarouselIntent::Advance { direction, now }
        );
    }

    pub fn jump_to(&mut self, index: usize, now: Instant) {
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer,
            CarouselIntent::JumpTo { index, now }
        );
    }

    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.carousel.is_paused() == paused {
            return;
        }
        tracing::debug!(paused, "auto-advance pause changed");
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer,
            CarouselIntent::SetPaused { paused, now }
        );
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        let paused = !self.carousel.is_paused();
        self.set_paused(paused, now);
    }

    pub fn set_hovered(&mut self, id: Option<u32>) {
        if self.carousel.hovered_id() == id {
            return;
        }
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::SetHovered { id });
    }

    /// Open the overlay on `id`. Unknown ids close it instead.
    pub fn select(&mut self, id: u32) {
        let Some(record) = self.catalog.find(id) else {
            tracing::warn!(id, "selected project not in catalog");
            self.close_overlay();
            return;
        };
        tracing::info!(id, title = %record.title, "opening project");
        self.todo = match record.demo {
            DemoKind::ListWidget => Some(TodoListState::default()),
            _ => None,
        };
        dispatch_mvi!(
            self,
            carousel,
            CarouselReducer,
            CarouselIntent::Select { id: Some(id) }
        );
    }

    /// Open the overlay on the centered card.
    pub fn open_current(&mut self) {
        if let Some(record) = self.catalog.get(self.carousel.current_index()) {
            let id = record.id;
            self.select(id);
        }
    }

    /// Close the overlay. Only the selection and the list widget are reset.
    pub fn close_overlay(&mut self) {
        if self.carousel.is_overlay_open() {
            tracing::debug!("closing project overlay");
        }
        self.todo = None;
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Select { id: None });
    }

    pub fn selected_project(&self) -> Option<&ProjectRecord> {
        resolve_selection(&self.catalog, self.carousel.selected_id())
    }

    pub fn dispatch_todo(&mut self, intent: TodoIntent) {
        if let Some(todo) = self.todo.take() {
            self.todo = Some(TodoReducer::reduce(todo, intent));
        }
    }

    pub fn on_paste(&mut self, text: String) {
        self.dispatch_todo(TodoIntent::InsertText(text));
    }

    /// Cancel the carousel timers and drop the list widget.
    pub fn teardown(&mut self) {
        self.todo = None;
        dispatch_mvi!(self, carousel, CarouselReducer, CarouselIntent::Teardown);
    }

    pub fn gallery_layout(&self) -> GalleryLayout {
        GalleryLayout::compute(body_rect(self.area), self.catalog.len())
    }

    pub fn overlay_layout(&self) -> Option<OverlayLayout> {
        self.selected_project()
            .map(|record| OverlayLayout::compute(self.area, record))
    }

    pub fn todo_layout(&self) -> Option<TodoLayout> {
        let overlay = self.overlay_layout()?;
        self.todo
            .as_ref()
            .map(|todo| TodoLayout::compute(overlay.demo, todo))
    }

    /// Id of the centered card.
    pub fn center_id(&self) -> Option<u32> {
        self.carousel
            .visible_indices()
            .iter()
            .find(|(offset, _)| *offset == CardOffset::Center)
            .and_then(|(_, index)| self.catalog.get(*index))
            .map(|record| record.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let rules = DemoRules::default();
        App::new(
            Catalog::builtin(&rules),
            rules,
            CarouselTiming::default(),
            true,
            Instant::now(),
        )
    }

    #[test]
    fn opening_list_project_creates_widget() {
        let mut app = app();
        app.select(4);
        assert!(app.todo().is_some());
        app.close_overlay();
        assert!(app.todo().is_none());
        assert!(!app.carousel().is_overlay_open());
    }

    #[test]
    fn selecting_unknown_id_keeps_overlay_closed() {
        let mut app = app();
        app.select(3);
        app.select(99);
        assert!(!app.carousel().is_overlay_open());
        assert!(app.selected_project().is_none());
    }

    #[test]
    fn todo_intents_ignored_without_widget() {
        let mut app = app();
        app.dispatch_todo(TodoIntent::InsertChar('a'));
        assert!(app.todo().is_none());
    }
}
