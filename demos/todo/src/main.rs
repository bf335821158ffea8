//! CLI walkthrough for the todo application.
//!
//! Builds a store, subscribes a renderer that reprints the visible todos
//! after every state change, then drives the add / toggle / filter flow.
//! An optional argument selects the initial visibility filter:
//!
//! ```text
//! todo [all|active|completed]
//! ```

use fluxkit_runtime::Store;
use todo::{app_reducer, visible_todos, ActionFactory, AppState, VisibilityFilter};

fn render(state: &AppState) {
    println!("  showing: {}", state.visibility_filter);
    for item in visible_todos(&state.todos, state.visibility_filter) {
        let mark = if item.completed { "x" } else { " " };
        println!("  [{mark}] {} {}", item.id, item.text);
    }
    println!(
        "  ({} of {} completed)\n",
        state.completed_count(),
        state.count()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let initial_filter = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<VisibilityFilter>()?,
        None => VisibilityFilter::default(),
    };

    println!("=== Todo Example ===\n");

    let store = Store::new(
        AppState {
            todos: Vec::new(),
            visibility_filter: initial_filter,
        },
        app_reducer(),
        (),
    );
    let mut actions = ActionFactory::new();

    // Re-render on every state change, like a view subscribed to the store.
    store.subscribe(render);

    println!("Adding todos...");
    store.dispatch(actions.add_todo("Learn the reducer pattern"));
    store.dispatch(actions.add_todo("Wire up the store"));
    store.dispatch(actions.add_todo("Complete a todo"));

    // Toggle the most recently added todo.
    if let Some(id) = store.state(|s| s.todos.last().map(|t| t.id)) {
        println!("Toggling {id}...");
        store.dispatch(actions.toggle_todo(id));
    }

    println!("Switching filters...");
    store.dispatch(actions.set_visibility_filter(VisibilityFilter::ShowActive));
    store.dispatch(actions.set_visibility_filter(VisibilityFilter::ShowCompleted));
    store.dispatch(actions.set_visibility_filter(VisibilityFilter::ShowAll));

    let final_state = store.snapshot();
    println!("Final state:\n{}", serde_json::to_string_pretty(&final_state)?);

    println!("\n=== Demo Complete ===");
    Ok(())
}
