//! Todo application built on the Fluxkit state container.
//!
//! All application state — the list of todos and the visibility filter —
//! lives in one [`AppState`] value held by a store. Views read the state
//! through the [`visible_todos`] selector and change it by dispatching
//! [`TodoAction`]s; the reducers in [`reducer`] are the only code that
//! ever computes a new state. It demonstrates:
//!
//! - Two sub-reducers, each owning one field of the state
//! - Root reducer built from `scope_reducer` + `combine_reducers`
//! - Id assignment through an explicitly owned [`ActionFactory`]
//! - A pure read-side projection ([`visible_todos`])
//! - Testing with `ReducerTest`
//!
//! # Quick Start
//!
//! ```
//! use todo::{app_reducer, visible_todos, ActionFactory, AppState};
//! use fluxkit_runtime::Store;
//!
//! let store = Store::new(AppState::default(), app_reducer(), ());
//! let mut actions = ActionFactory::new();
//!
//! store.dispatch(actions.add_todo("Learn"));
//! store.dispatch(actions.add_todo("Build"));
//!
//! let visible = store.state(|s| {
//!     visible_todos(&s.todos, s.visibility_filter).len()
//! });
//! assert_eq!(visible, 2);
//! ```

pub mod actions;
pub mod reducer;
pub mod selectors;
pub mod types;

// Re-export commonly used items
pub use actions::ActionFactory;
pub use reducer::{app_reducer, AppReducer, TodosReducer, VisibilityFilterReducer};
pub use selectors::visible_todos;
pub use types::{AppState, ParseFilterError, Todo, TodoAction, TodoId, VisibilityFilter};
