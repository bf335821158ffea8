//! Action creation for the todo application.
//!
//! The [`ActionFactory`] is the single owner of the id counter: whoever
//! produces `AddTodo` actions holds the factory, and ids flow from its
//! injected [`IdGenerator`]. Reducers never assign ids.

use crate::types::{TodoAction, TodoId, VisibilityFilter};
use fluxkit_core::environment::{IdGenerator, SequentialIds};

/// Creates actions, assigning todo ids from an injected generator
///
/// # Examples
///
/// ```
/// use todo::ActionFactory;
///
/// let mut actions = ActionFactory::new();
/// let first = actions.add_todo("Learn");
/// let second = actions.add_todo("Build");
/// // Ids are assigned monotonically starting at 0.
/// ```
#[derive(Clone, Debug, Default)]
pub struct ActionFactory<G = SequentialIds> {
    ids: G,
}

impl ActionFactory<SequentialIds> {
    /// Creates a factory assigning sequential ids starting at 0
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: SequentialIds::new(),
        }
    }
}

impl<G: IdGenerator> ActionFactory<G> {
    /// Creates a factory drawing ids from the given generator
    pub const fn with_ids(ids: G) -> Self {
        Self { ids }
    }

    /// Creates an `AddTodo` action, assigning the next unused id
    pub fn add_todo(&mut self, text: impl Into<String>) -> TodoAction {
        TodoAction::AddTodo {
            id: TodoId::new(self.ids.next_id()),
            text: text.into(),
        }
    }

    /// Creates a `ToggleTodo` action for the given id
    #[must_use]
    pub fn toggle_todo(&self, id: TodoId) -> TodoAction {
        TodoAction::ToggleTodo { id }
    }

    /// Creates a `SetVisibilityFilter` action
    #[must_use]
    pub fn set_visibility_filter(&self, filter: VisibilityFilter) -> TodoAction {
        TodoAction::SetVisibilityFilter { filter }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_todo_assigns_monotonic_ids_from_zero() {
        let mut actions = ActionFactory::new();

        let first = actions.add_todo("Learn");
        let second = actions.add_todo("Build");
        let third = actions.add_todo("Ship");

        let ids: Vec<TodoId> = [first, second, third]
            .into_iter()
            .map(|action| match action {
                TodoAction::AddTodo { id, .. } => id,
                other => panic!("expected AddTodo, got {other:?}"),
            })
            .collect();

        assert_eq!(ids, vec![TodoId::new(0), TodoId::new(1), TodoId::new(2)]);
    }

    #[test]
    fn ids_are_not_consumed_by_other_creators() {
        let mut actions = ActionFactory::new();

        let first = actions.add_todo("Learn");
        let _ = actions.toggle_todo(TodoId::new(0));
        let _ = actions.set_visibility_filter(VisibilityFilter::ShowActive);
        let second = actions.add_todo("Build");

        assert_eq!(
            first,
            TodoAction::AddTodo {
                id: TodoId::new(0),
                text: "Learn".to_string(),
            }
        );
        assert_eq!(
            second,
            TodoAction::AddTodo {
                id: TodoId::new(1),
                text: "Build".to_string(),
            }
        );
    }

    #[test]
    fn custom_id_generator_is_honored() {
        struct FixedOffsetIds(u64);

        impl IdGenerator for FixedOffsetIds {
            fn next_id(&mut self) -> u64 {
                let id = self.0;
                self.0 += 10;
                id
            }
        }

        let mut actions = ActionFactory::with_ids(FixedOffsetIds(100));
        let action = actions.add_todo("Learn");
        assert_eq!(
            action,
            TodoAction::AddTodo {
                id: TodoId::new(100),
                text: "Learn".to_string(),
            }
        );
    }
}
