//! # Core Layout Engine
//!
//! This module contains the navigation layout business logic.
//! It knows nothing about how menus are rendered or where settings are kept.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Settings (layout)    │
//!                    │  • Action (operations)  │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    CLI     │      │   Editor   │      │   Store    │
//!     │  Adapter   │      │ (apply +   │      │ (JSON file │
//!     │  (clap)    │      │   save)    │      │  / memory) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`node`]: `NavNode`, the leaf-or-group entry type
//! - [`state`]: The `Settings` aggregate and its invariants
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`reorder`], [`mover`], [`groups`], [`assign`], [`visibility`]: the operations
//! - [`registry`]: Static navigation item metadata
//! - [`store`], [`editor`], [`config`]: the host-side plumbing around the reducer

pub mod action;
pub mod assign;
pub mod config;
pub mod editor;
pub mod groups;
pub mod mover;
pub mod node;
pub mod registry;
pub mod reorder;
pub mod state;
pub mod store;
pub mod visibility;

// Re-export commonly used types for convenience
pub use action::{Action, Rejection, update};
pub use node::{Group, GroupId, ItemId, NavNode};
pub use state::Settings;
