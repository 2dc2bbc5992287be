//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that owns the checklist item sequence
//! - Filter selection types and the display/progress query predicates
//! - State error handling

mod error;
mod filter;

pub use error::StateError;
pub use filter::{CategorySelection, FilterState, SubcategorySelection};

// Re-export implementation from state_impl.rs
// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

// Re-export State
pub use state_impl::State;
