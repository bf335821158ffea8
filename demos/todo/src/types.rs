//! Domain types for the todo application.
//!
//! The whole application state is two values: the list of todo items and
//! the visibility filter selecting which of them a view should show. Both
//! are plain owned data; every mutation goes through the reducers in
//! [`crate::reducer`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Unique identifier for a todo item
///
/// Ids are assigned monotonically by [`crate::actions::ActionFactory`] and
/// are never reused within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from a raw integer
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl Todo {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Error returned when parsing a [`VisibilityFilter`] from text fails
///
/// Filter values enter the system as text only at the outermost boundary
/// (CLI arguments); everywhere else the filter is a closed enum, so an
/// invalid value is rejected here or not representable at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown visibility filter `{input}` (expected `all`, `active`, or `completed`)")]
pub struct ParseFilterError {
    /// The text that failed to parse
    pub input: String,
}

/// View-selection mode controlling which todo items are displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Show every todo
    #[default]
    ShowAll,
    /// Show only todos that are not completed
    ShowActive,
    /// Show only completed todos
    ShowCompleted,
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowAll => write!(f, "all"),
            Self::ShowActive => write!(f, "active"),
            Self::ShowCompleted => write!(f, "completed"),
        }
    }
}

impl FromStr for VisibilityFilter {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Self::ShowAll),
            "active" => Ok(Self::ShowActive),
            "completed" => Ok(Self::ShowCompleted),
            _ => Err(ParseFilterError {
                input: s.to_string(),
            }),
        }
    }
}

/// Actions describing every state change the application supports
///
/// Serialized form carries the action kind in a `type` tag, with the
/// payload fields inline: `{"type": "ADD_TODO", "id": 0, "text": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TodoAction {
    /// Append a new, not yet completed todo
    AddTodo {
        /// Identifier assigned by the action factory
        id: TodoId,
        /// Text of the new todo
        text: String,
    },

    /// Flip the completion flag of one todo
    ///
    /// An id that matches no item is a silent no-op.
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Replace the visibility filter wholesale
    SetVisibilityFilter {
        /// The new filter value
        filter: VisibilityFilter,
    },
}

/// State of the whole application
///
/// The two fields are independently owned by their reducers; nothing ever
/// computes one from the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// All todos, in insertion order
    pub todos: Vec<Todo>,
    /// Which todos a view should display
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Creates the canonical initial state: no todos, `ShowAll`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::ShowAll,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_new_starts_incomplete() {
        let todo = Todo::new(TodoId::new(3), "Test".to_string());
        assert_eq!(todo.id, TodoId::new(3));
        assert_eq!(todo.text, "Test");
        assert!(!todo.completed);
    }

    #[test]
    fn initial_state_is_empty_show_all() {
        let state = AppState::default();
        assert!(state.todos.is_empty());
        assert_eq!(state.visibility_filter, VisibilityFilter::ShowAll);
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("all".parse(), Ok(VisibilityFilter::ShowAll));
        assert_eq!("Active".parse(), Ok(VisibilityFilter::ShowActive));
        assert_eq!("COMPLETED".parse(), Ok(VisibilityFilter::ShowCompleted));
    }

    #[test]
    fn unknown_filter_is_rejected_at_parse_time() {
        let err = "done".parse::<VisibilityFilter>().unwrap_err();
        assert_eq!(err.input, "done");
        assert!(err.to_string().contains("unknown visibility filter"));
    }

    #[test]
    fn filter_display_round_trips_through_from_str() {
        for filter in [
            VisibilityFilter::ShowAll,
            VisibilityFilter::ShowActive,
            VisibilityFilter::ShowCompleted,
        ] {
            assert_eq!(filter.to_string().parse(), Ok(filter));
        }
    }

    #[test]
    fn actions_serialize_with_type_tag() {
        let action = TodoAction::AddTodo {
            id: TodoId::new(0),
            text: "Learn".to_string(),
        };
        let json = serde_json::to_value(&action).expect("serialize action");
        assert_eq!(
            json,
            serde_json::json!({"type": "ADD_TODO", "id": 0, "text": "Learn"})
        );

        let action = TodoAction::SetVisibilityFilter {
            filter: VisibilityFilter::ShowActive,
        };
        let json = serde_json::to_value(&action).expect("serialize action");
        assert_eq!(
            json,
            serde_json::json!({"type": "SET_VISIBILITY_FILTER", "filter": "SHOW_ACTIVE"})
        );
    }
}
