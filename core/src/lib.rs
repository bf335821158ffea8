//! # Fluxkit Core
//!
//! Core traits and types for the Fluxkit unidirectional state architecture.
//!
//! This crate provides the fundamental abstractions for centralizing
//! application state behind a single dispatch loop: state lives in one
//! place, every change is described by an action, and a pure reducer
//! computes the next state from the current state and the action.
//!
//! ## Core Concepts
//!
//! - **State**: owned domain state for a feature
//! - **Action**: a closed enum of every state transition a feature supports
//! - **Reducer**: deterministic function `(State, Action, Environment) → State`
//! - **Environment**: injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Reducers own their slice of state and ignore everything else
//! - Dependency Injection via Environment (no module-level mutable state)
//!
//! ## Example
//!
//! ```
//! use fluxkit_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Reducer module - the core trait for state transitions
///
/// Reducers are deterministic: given the same state and action they always
/// produce the same next state, and an action a reducer does not handle
/// must leave the state untouched (the identity transition).
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Contract
    ///
    /// `reduce` updates `state` in place. Because the state is exclusively
    /// borrowed for the duration of the call, the transition is atomic from
    /// the caller's perspective: no partially-updated state can be observed.
    /// A reducer must not touch `state` at all for actions it does not
    /// handle, so that unrecognized actions are identity transitions.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodosReducer {
    ///     type State = Vec<Todo>;
    ///     type Action = TodoAction;
    ///     type Environment = ();
    ///
    ///     fn reduce(&self, state: &mut Vec<Todo>, action: TodoAction, _env: &()) {
    ///         match action {
    ///             TodoAction::AddTodo { id, text } => state.push(Todo::new(id, text)),
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into a state change
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
    }
}

/// Environment module - dependency injection traits
///
/// All sources of non-determinism sit behind traits and are injected
/// explicitly, so reducers and action factories stay testable. The only
/// dependency the todo domain needs is an id source; further traits land
/// here as features require them.
pub mod environment {
    /// Id source - abstracts identifier assignment for testability
    ///
    /// Implementations must never hand out the same id twice within one
    /// instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use fluxkit_core::environment::{IdGenerator, SequentialIds};
    ///
    /// let mut ids = SequentialIds::new();
    /// assert_eq!(ids.next_id(), 0);
    /// assert_eq!(ids.next_id(), 1);
    /// ```
    pub trait IdGenerator {
        /// Produce the next unused id
        fn next_id(&mut self) -> u64;
    }

    /// Production id source: a monotonic counter starting at 0
    ///
    /// Replaces module-level counter state with an explicitly owned value;
    /// whoever creates actions owns the counter.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct SequentialIds {
        next: u64,
    }

    impl SequentialIds {
        /// Creates a counter starting at 0
        #[must_use]
        pub const fn new() -> Self {
            Self { next: 0 }
        }

        /// Creates a counter starting at `first`
        ///
        /// Useful when resuming from a known set of already-assigned ids.
        #[must_use]
        pub const fn starting_at(first: u64) -> Self {
            Self { next: first }
        }
    }

    impl IdGenerator for SequentialIds {
        fn next_id(&mut self) -> u64 {
            let id = self.next;
            self.next += 1;
            id
        }
    }
}
