//! Unit tests for dockhand configuration.
//!
//! - [`helpers`] - Shared fixtures and helper functions
//! - [`types_tests`] - Type defaults and serialisation
//! - [`layer_precedence_tests`] - `MergeComposer` layer precedence
//! - [`loader_tests`] - File, environment and CLI loading

mod helpers;
