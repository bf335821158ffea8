//! Reducer logic for the todo application.
//!
//! Two sub-reducers each own one field of [`AppState`]: `TodosReducer`
//! owns the list, `VisibilityFilterReducer` owns the filter. The root
//! reducer scopes each one to its field and runs them in sequence, so
//! every dispatched action flows through both and each ignores the actions
//! not addressed to it.

use crate::types::{AppState, Todo, TodoAction, VisibilityFilter};
use fluxkit_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use fluxkit_core::reducer::Reducer;

/// Reducer for the todo list
///
/// Handles `AddTodo` and `ToggleTodo`; every other action is an identity
/// transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for TodosReducer {
    type State = Vec<Todo>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            TodoAction::AddTodo { id, text } => {
                state.push(Todo::new(id, text));
            }
            TodoAction::ToggleTodo { id } => {
                if let Some(todo) = state.iter_mut().find(|t| t.id == id) {
                    todo.completed = !todo.completed;
                } else {
                    tracing::debug!(%id, "toggle matched no todo");
                }
            }
            // Not addressed to this reducer
            TodoAction::SetVisibilityFilter { .. } => {}
        }
    }
}

/// Reducer for the visibility filter
///
/// Handles `SetVisibilityFilter`; every other action is an identity
/// transition.
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityFilterReducer;

impl VisibilityFilterReducer {
    /// Creates a new `VisibilityFilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            TodoAction::SetVisibilityFilter { filter } => *state = filter,
            // Not addressed to this reducer
            TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } => {}
        }
    }
}

/// The root reducer over the whole [`AppState`]
pub type AppReducer = CombinedReducer<AppState, TodoAction, ()>;

fn todos_lens(state: &mut AppState) -> &mut Vec<Todo> {
    &mut state.todos
}

fn filter_lens(state: &mut AppState) -> &mut VisibilityFilter {
    &mut state.visibility_filter
}

/// Builds the root reducer: each sub-reducer scoped to the field it owns
///
/// This is the only place the two fields of [`AppState`] meet; neither
/// sub-reducer can reach the other's slice.
#[must_use]
pub fn app_reducer() -> AppReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(TodosReducer::new(), todos_lens)),
        Box::new(scope_reducer(VisibilityFilterReducer::new(), filter_lens)),
    ])
}
