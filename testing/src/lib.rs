//! # Fluxkit Testing
//!
//! Testing utilities for the Fluxkit architecture.
//!
//! The centerpiece is [`ReducerTest`], a fluent Given-When-Then harness for
//! reducer unit tests: set up a state, feed one or more actions through the
//! reducer, then assert on the result. Because reducers are deterministic
//! and side-effect free, no runtime is needed to test them.


pub use reducer_test::ReducerTest;
