//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! Together these express the classic root-reducer pattern: each field of
//! the application state is owned by one sub-reducer, every action flows
//! through all of them, and each sub-reducer ignores the actions that are
//! not addressed to it.
//!
//! # Examples
//!
//! ```
//! use fluxkit_core::reducer::Reducer;
//! use fluxkit_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CounterReducer;
//! struct NameReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut i32, action: AppAction, _env: &()) {
//!         if matches!(action, AppAction::Increment) {
//!             *state += 1;
//!         }
//!     }
//! }
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut String, action: AppAction, _env: &()) {
//!         if let AppAction::SetName(name) = action {
//!             *state = name;
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(CounterReducer, |s: &mut AppState| &mut s.count)),
//!     Box::new(scope_reducer(NameReducer, |s: &mut AppState| &mut s.name)),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Increment, &());
//! root.reduce(&mut state, AppAction::SetName("Alice".to_string()), &());
//! assert_eq!(state.count, 1);
//! assert_eq!(state.name, "Alice");
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in sequence over the same state. Because every
/// well-behaved reducer leaves the state untouched for actions it does not
/// handle, the order of the reducers is observable only when two of them
/// handle the same action.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on one field of a larger state.
///
/// This allows a reducer written against its own slice of state (a todo
/// list, a filter value) to participate in a root reducer over the whole
/// application state. The lens is a plain accessor returning a mutable
/// borrow of the field the reducer owns; nothing else in the parent state
/// is reachable from the scoped reducer.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (one field of `S`)
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use fluxkit_core::reducer::Reducer;
/// use fluxkit_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// #[derive(Clone)]
/// enum CounterAction {
///     Increment,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
///         match action {
///             CounterAction::Increment => state.count += 1,
///         }
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(CounterReducer, |app: &mut AppState| &mut app.counter);
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, CounterAction::Increment, &());
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        lens,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on one field of a larger state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    lens: fn(&mut S) -> &mut SubS,
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        let sub_state = (self.lens)(state);
        self.reducer.reduce(sub_state, action, env);
    }
}
