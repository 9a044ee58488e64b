//! Reducer for the to-do list widget.
//!
//! Invalid input degrades to a no-op: blank entries, out-of-range positions
//! and clearing an empty list leave the state untouched.

use crate::ui::mvi::Reducer;

use super::intent::TodoIntent;
use super::state::{TodoFocus, TodoItem, TodoListState};

pub struct TodoReducer;

impl Reducer for TodoReducer {
    type State = TodoListState;
    type Intent = TodoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            TodoIntent::InsertChar(ch) => {
                if !ch.is_control() {
                    state.input.push(ch);
                }
            }
            TodoIntent::InsertText(text) => {
                state
                    .input
                    .extend(text.chars().filter(|ch| !ch.is_control()));
            }
            TodoIntent::Backspace => {
                state.input.pop();
            }
            TodoIntent::Add => {
                let text = state.input.trim();
                if !text.is_empty() {
                    state.items.push(TodoItem {
                        text: text.to_string(),
                        completed: false,
                    });
                    state.input.clear();
                }
            }
            TodoIntent::Toggle { position } => {
                if let Some(item) = state.items.get_mut(position) {
                    item.completed = !item.completed;
                }
            }
            TodoIntent::Remove { position } => {
                if position < state.items.len() {
                    state.items.remove(position);
                    state.cursor = state.cursor.min(state.items.len().saturating_sub(1));
                }
            }
            TodoIntent::ClearAll => {
                if !state.items.is_empty() {
                    state.items.clear();
                    state.cursor = 0;
                    state.focus = TodoFocus::Input;
                }
            }
            TodoIntent::FocusNext => {
                state.focus = match state.focus {
                    TodoFocus::Input if !state.items.is_empty() => TodoFocus::List,
                    _ => TodoFocus::Input,
                };
            }
            TodoIntent::SetFocus(focus) => {
                if focus == TodoFocus::Input || !state.items.is_empty() {
                    state.focus = focus;
                }
            }
            TodoIntent::CursorUp => {
                state.cursor = state.cursor.saturating_sub(1);
            }
            TodoIntent::CursorDown => {
                if state.cursor + 1 < state.items.len() {
                    state.cursor += 1;
                }
            }
        }
        state
    }
}
