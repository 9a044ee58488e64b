//! Homework to-do list shown inside one project's detail overlay.

mod intent;
mod reducer;
mod state;
mod widget;

pub use intent::TodoIntent;
pub use reducer::TodoReducer;
pub use state::{TodoFocus, TodoItem, TodoListState};
pub use widget::{render_todo, TodoLayout, TodoRow};
