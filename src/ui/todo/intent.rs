use crate::ui::mvi::Intent;

use super::state::TodoFocus;

#[derive(Debug, Clone)]
pub enum TodoIntent {
    /// Type a character into the input buffer.
    InsertChar(char),
    /// Pasted text; control characters are dropped.
    InsertText(String),
    Backspace,
    /// Append the trimmed input as a new item. Ignored when blank.
    Add,
    Toggle { position: usize },
    Remove { position: usize },
    ClearAll,
    /// Switch keyboard focus between input and list.
    FocusNext,
    SetFocus(TodoFocus),
    CursorUp,
    CursorDown,
}

impl Intent for TodoIntent {}
