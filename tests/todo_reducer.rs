use folio::ui::mvi::Reducer;
use folio::ui::todo::{TodoFocus, TodoIntent, TodoListState, TodoReducer};

fn reduce(state: TodoListState, intent: TodoIntent) -> TodoListState {
    TodoReducer::reduce(state, intent)
}

fn with_input(state: TodoListState, text: &str) -> TodoListState {
    text.chars()
        .fold(state, |state, ch| reduce(state, TodoIntent::InsertChar(ch)))
}

fn list_of(texts: &[&str]) -> TodoListState {
    texts.iter().fold(TodoListState::default(), |state, text| {
        reduce(with_input(state, text), TodoIntent::Add)
    })
}

fn texts(state: &TodoListState) -> Vec<&str> {
    state.items().iter().map(|item| item.text.as_str()).collect()
}

#[test]
fn whitespace_only_add_is_ignored() {
    let state = with_input(TodoListState::default(), "  ");
    let state = reduce(state, TodoIntent::Add);
    assert_eq!(state.len(), 0);
    assert_eq!(state.input(), "  ");
}

#[test]
fn add_appends_one_incomplete_item() {
    let state = with_input(TodoListState::default(), "Math HW");
    let state = reduce(state, TodoIntent::Add);
    assert_eq!(state.len(), 1);
    assert_eq!(state.items()[0].text, "Math HW");
    assert!(!state.items()[0].completed);
    assert_eq!(state.input(), "");
}

#[test]
fn add_keeps_insertion_order() {
    let state = list_of(&["a", "b", "c"]);
    assert_eq!(texts(&state), vec!["a", "b", "c"]);
}

#[test]
fn toggle_alternates_completion() {
    let state = list_of(&["Math HW"]);
    let state = reduce(state, TodoIntent::Toggle { position: 0 });
    assert!(state.items()[0].completed);
    let state = reduce(state, TodoIntent::Toggle { position: 0 });
    assert!(!state.items()[0].completed);
}

#[test]
fn toggle_out_of_range_is_noop() {
    let state = list_of(&["a"]);
    let next = reduce(state.clone(), TodoIntent::Toggle { position: 5 });
    assert_eq!(next, state);
}

#[test]
fn remove_keeps_relative_order() {
    let state = list_of(&["first", "second", "third"]);
    let state = reduce(state, TodoIntent::Remove { position: 0 });
    assert_eq!(texts(&state), vec!["second", "third"]);
}

#[test]
fn remove_out_of_range_is_noop() {
    let state = list_of(&["a", "b"]);
    let next = reduce(state.clone(), TodoIntent::Remove { position: 2 });
    assert_eq!(next, state);
}

#[test]
fn clear_all_empties_and_repeats_as_noop() {
    let state = list_of(&["a", "b", "c"]);
    let state = reduce(state, TodoIntent::ClearAll);
    assert_eq!(state.len(), 0);
    assert!(!state.can_clear());
    let again = reduce(state.clone(), TodoIntent::ClearAll);
    assert_eq!(again, state);
}

#[test]
fn count_label_tracks_length() {
    let state = list_of(&["a", "b"]);
    assert_eq!(state.count_label(), "2 items total");
    let state = reduce(state, TodoIntent::Remove { position: 1 });
    assert_eq!(state.count_label(), "1 items total");
}

#[test]
fn backspace_edits_input() {
    let state = with_input(TodoListState::default(), "abc");
    let state = reduce(state, TodoIntent::Backspace);
    assert_eq!(state.input(), "ab");
    let state = reduce(reduce(reduce(state, TodoIntent::Backspace), TodoIntent::Backspace), TodoIntent::Backspace);
    assert_eq!(state.input(), "");
}

#[test]
fn focus_cycles_between_input_and_list() {
    let state = list_of(&["a", "b"]);
    assert_eq!(state.focus(), TodoFocus::Input);
    let state = reduce(state, TodoIntent::FocusNext);
    assert_eq!(state.focus(), TodoFocus::List);
    let state = reduce(state, TodoIntent::FocusNext);
    assert_eq!(state.focus(), TodoFocus::Input);
}

#[test]
fn cursor_is_bounded_by_list() {
    let state = list_of(&["a", "b"]);
    let state = reduce(state, TodoIntent::CursorUp);
    assert_eq!(state.cursor(), 0);
    let state = reduce(reduce(reduce(state, TodoIntent::CursorDown), TodoIntent::CursorDown), TodoIntent::CursorDown);
    assert_eq!(state.cursor(), 1);
}

#[test]
fn clear_all_returns_focus_to_input() {
    let state = reduce(list_of(&["a"]), TodoIntent::SetFocus(TodoFocus::List));
    assert_eq!(state.focus(), TodoFocus::List);
    let state = reduce(state, TodoIntent::ClearAll);
    assert_eq!(state.focus(), TodoFocus::Input);
}

#[test]
fn list_focus_refused_when_empty() {
    let state = reduce(TodoListState::default(), TodoIntent::SetFocus(TodoFocus::List));
    assert_eq!(state.focus(), TodoFocus::Input);
}
