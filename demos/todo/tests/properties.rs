//! Property tests for the reducers and the visible-todos projection.

use fluxkit_core::reducer::Reducer;
use proptest::prelude::*;
use todo::{
    visible_todos, Todo, TodoAction, TodoId, TodosReducer, VisibilityFilter,
    VisibilityFilterReducer,
};

/// A todo list with unique, insertion-ordered ids.
fn todo_list() -> impl Strategy<Value = Vec<Todo>> {
    prop::collection::vec(("[a-z]{1,12}", any::<bool>()), 0..16).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (text, completed))| {
                let mut todo = Todo::new(TodoId::new(i as u64), text);
                todo.completed = completed;
                todo
            })
            .collect()
    })
}

fn any_filter() -> impl Strategy<Value = VisibilityFilter> {
    prop_oneof![
        Just(VisibilityFilter::ShowAll),
        Just(VisibilityFilter::ShowActive),
        Just(VisibilityFilter::ShowCompleted),
    ]
}

proptest! {
    #[test]
    fn add_appends_and_leaves_the_prefix_untouched(todos in todo_list(), text in "[a-z]{1,12}") {
        let mut next = todos.clone();
        let id = TodoId::new(next.len() as u64);
        TodosReducer::new().reduce(
            &mut next,
            TodoAction::AddTodo { id, text: text.clone() },
            &(),
        );

        prop_assert_eq!(next.len(), todos.len() + 1);
        prop_assert_eq!(&next[..todos.len()], &todos[..]);
        let added = &next[todos.len()];
        prop_assert_eq!(added.id, id);
        prop_assert_eq!(&added.text, &text);
        prop_assert!(!added.completed);
    }

    #[test]
    fn toggle_twice_is_an_identity(todos in todo_list(), raw_id in 0u64..32) {
        let mut next = todos.clone();
        let reducer = TodosReducer::new();
        let id = TodoId::new(raw_id);

        reducer.reduce(&mut next, TodoAction::ToggleTodo { id }, &());
        reducer.reduce(&mut next, TodoAction::ToggleTodo { id }, &());

        prop_assert_eq!(next, todos);
    }

    #[test]
    fn filter_actions_never_change_the_list(todos in todo_list(), filter in any_filter()) {
        let mut next = todos.clone();
        TodosReducer::new().reduce(
            &mut next,
            TodoAction::SetVisibilityFilter { filter },
            &(),
        );

        prop_assert_eq!(next, todos);
    }

    #[test]
    fn todo_actions_never_change_the_filter(
        filter in any_filter(),
        raw_id in 0u64..32,
        text in "[a-z]{1,12}",
    ) {
        let reducer = VisibilityFilterReducer::new();

        let mut next = filter;
        reducer.reduce(
            &mut next,
            TodoAction::AddTodo { id: TodoId::new(raw_id), text },
            &(),
        );
        prop_assert_eq!(next, filter);

        reducer.reduce(&mut next, TodoAction::ToggleTodo { id: TodoId::new(raw_id) }, &());
        prop_assert_eq!(next, filter);
    }

    #[test]
    fn projection_partitions_the_list(todos in todo_list()) {
        let all = visible_todos(&todos, VisibilityFilter::ShowAll);
        let active = visible_todos(&todos, VisibilityFilter::ShowActive);
        let completed = visible_todos(&todos, VisibilityFilter::ShowCompleted);

        prop_assert_eq!(all.len(), todos.len());
        prop_assert_eq!(active.len() + completed.len(), todos.len());
        prop_assert!(active.iter().all(|t| !t.completed));
        prop_assert!(completed.iter().all(|t| t.completed));

        // Order is preserved: ids in each projection are strictly increasing
        // because the fixture assigns ids in insertion order.
        for view in [&all, &active, &completed] {
            prop_assert!(view.windows(2).all(|w| w[0].id < w[1].id));
        }
    }
}
