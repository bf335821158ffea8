//! Read-side projections over the application state.
//!
//! Selectors are pure and never feed back into the state-transition
//! machine; views call them with data read from the store.

use crate::types::{Todo, VisibilityFilter};

/// Selects the todos a view should display under the given filter
///
/// Order is preserved; under [`VisibilityFilter::ShowAll`] the result is
/// every item. The filter is a closed enum, so there is no unrecognized
/// case to fail on.
#[must_use]
pub fn visible_todos(todos: &[Todo], filter: VisibilityFilter) -> Vec<&Todo> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    // Four todos, the middle two completed.
    fn fixture() -> Vec<Todo> {
        let mut todos = vec![
            Todo::new(TodoId::new(0), "Learn".to_string()),
            Todo::new(TodoId::new(1), "Build".to_string()),
            Todo::new(TodoId::new(2), "Test".to_string()),
            Todo::new(TodoId::new(3), "Ship".to_string()),
        ];
        todos[1].completed = true;
        todos[2].completed = true;
        todos
    }

    #[test]
    fn show_all_returns_everything_in_order() {
        let todos = fixture();
        let visible = visible_todos(&todos, VisibilityFilter::ShowAll);
        let ids: Vec<TodoId> = visible.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            vec![TodoId::new(0), TodoId::new(1), TodoId::new(2), TodoId::new(3)]
        );
    }

    #[test]
    fn show_active_returns_the_incomplete_subsequence() {
        let todos = fixture();
        let visible = visible_todos(&todos, VisibilityFilter::ShowActive);
        let ids: Vec<TodoId> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TodoId::new(0), TodoId::new(3)]);
        assert!(visible.iter().all(|t| !t.completed));
    }

    #[test]
    fn show_completed_returns_the_completed_subsequence() {
        let todos = fixture();
        let visible = visible_todos(&todos, VisibilityFilter::ShowCompleted);
        let ids: Vec<TodoId> = visible.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TodoId::new(1), TodoId::new(2)]);
        assert!(visible.iter().all(|t| t.completed));
    }

    #[test]
    fn empty_list_is_empty_under_every_filter() {
        for filter in [
            VisibilityFilter::ShowAll,
            VisibilityFilter::ShowActive,
            VisibilityFilter::ShowCompleted,
        ] {
            assert!(visible_todos(&[], filter).is_empty());
        }
    }
}
