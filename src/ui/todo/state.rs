//! State of the homework to-do list widget.

use crate::ui::mvi::UiState;

/// One entry. `text` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub text: String,
    pub completed: bool,
}

/// Which part of the widget receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TodoFocus {
    #[default]
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoListState {
    pub(super) items: Vec<TodoItem>,
    pub(super) input: String,
    pub(super) focus: TodoFocus,
    /// Highlighted item while the list has focus.
    pub(super) cursor: usize,
}

impl UiState for TodoListState {}

impl TodoListState {
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn focus(&self) -> TodoFocus {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Label under the list, e.g. "3 items total".
    pub fn count_label(&self) -> String {
        format!("{} items total", self.items.len())
    }

    /// The "Delete All" control is disabled on an empty list.
    pub fn can_clear(&self) -> bool {
        !self.items.is_empty()
    }
}
