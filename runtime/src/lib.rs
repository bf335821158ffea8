//! # Fluxkit Runtime
//!
//! Runtime implementation for the Fluxkit unidirectional state architecture.
//!
//! This crate provides the [`Store`](store::Store): the single holder of
//! application state. A store is created once with an initial state, a
//! reducer, and an environment, and lives for the life of the program.
//! Every state change flows through [`Store::dispatch`](store::Store::dispatch):
//!
//! 1. The reducer computes the next state from the current state and the action
//! 2. Every subscriber is notified, synchronously, in registration order,
//!    with the post-transition state
//!
//! There is no async runtime underneath; dispatch runs to completion on the
//! calling thread. Concurrent dispatchers serialize on the store's internal
//! state lock, so each transition stays atomic: one action in, one new
//! state out, no partial update observable.
//!
//! ## Example
//!
//! ```ignore
//! use fluxkit_runtime::Store;
//!
//! let store = Store::new(AppState::default(), app_reducer(), ());
//!
//! let sub = store.subscribe(|state: &AppState| {
//!     println!("{} todos", state.todos.len());
//! });
//!
//! store.dispatch(TodoAction::AddTodo { id: TodoId::new(0), text: "Learn".into() });
//!
//! let count = store.state(|s| s.todos.len());
//! store.unsubscribe(sub);
//! ```

pub use store::{Store, SubscriptionId};

/// Store module - the state container
///
/// The store owns the current application state and serializes every
/// mutation through a single dispatch entry point.
pub mod store {
    use fluxkit_core::reducer::Reducer;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError, RwLock};

    /// Identifies one subscription on a [`Store`].
    ///
    /// Returned by [`Store::subscribe`] and consumed by
    /// [`Store::unsubscribe`]. Ids are assigned monotonically and never
    /// reused within one store.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SubscriptionId(u64);

    impl std::fmt::Display for SubscriptionId {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "subscription-{}", self.0)
        }
    }

    type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

    /// The Store - single holder of application state
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, mutated only by the reducer)
    /// 2. Reducer (state-transition logic)
    /// 3. Environment (injected dependencies)
    /// 4. Subscribers (notified after every transition)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Subscriber semantics
    ///
    /// Subscribers run synchronously on the dispatching thread, in
    /// registration order, against a snapshot of the state the dispatch
    /// produced. Subscribing or unsubscribing from inside a notification
    /// is allowed and takes effect from the next dispatch. A subscriber
    /// must not dispatch back into the store it observes.
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        listeners: Arc<Mutex<Vec<(SubscriptionId, Listener<S>)>>>,
        next_subscription: Arc<AtomicU64>,
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
        S: Clone,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (state-transition logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_subscription: Arc::new(AtomicU64::new(0)),
            }
        }

        /// Dispatch an action to the store
        ///
        /// This is the only way to change state:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Releases the lock and notifies subscribers with the new state
        ///
        /// The reducer runs while the lock is held, so concurrent dispatch
        /// calls serialize and every subscriber sees exactly the state this
        /// dispatch produced.
        #[tracing::instrument(skip(self, action), name = "store_dispatch")]
        pub fn dispatch(&self, action: A) {
            let snapshot = {
                let mut state = self
                    .state
                    .write()
                    .unwrap_or_else(PoisonError::into_inner);
                self.reducer.reduce(&mut state, action, &self.environment);
                state.clone()
            };

            let listeners: Vec<Listener<S>> = {
                let guard = self
                    .listeners
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner);
                guard.iter().map(|(_, l)| Arc::clone(l)).collect()
            };

            tracing::debug!(subscribers = listeners.len(), "state transition committed");

            for listener in listeners {
                listener(&snapshot);
            }
        }

        /// Read the current state through a closure
        ///
        /// The closure receives a shared borrow of the state; the read lock
        /// is held only for the duration of the call.
        pub fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            f(&state)
        }

        /// Clone the current state out of the store
        #[must_use]
        pub fn snapshot(&self) -> S {
            self.state(S::clone)
        }

        /// Register a subscriber
        ///
        /// The listener is invoked after every subsequent state transition,
        /// after listeners registered before it. Returns the id to pass to
        /// [`Store::unsubscribe`].
        pub fn subscribe(&self, listener: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
            let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
            self.listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push((id, Arc::new(listener)));
            tracing::debug!(%id, "subscriber registered");
            id
        }

        /// Remove a subscriber
        ///
        /// Returns `true` if the subscription existed. Removing a
        /// subscription that was already removed is a no-op.
        pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
            let mut guard = self
                .listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            let before = guard.len();
            guard.retain(|(sid, _)| *sid != id);
            let removed = guard.len() != before;
            if removed {
                tracing::debug!(%id, "subscriber removed");
            }
            removed
        }

        /// Number of currently registered subscribers
        #[must_use]
        pub fn subscriber_count(&self) -> usize {
            self.listeners
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                listeners: Arc::clone(&self.listeners),
                next_subscription: Arc::clone(&self.next_subscription),
            }
        }
    }
}
