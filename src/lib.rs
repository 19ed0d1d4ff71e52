//! # Canister
//!
//! Reactive state containers with replay-latest subscriptions for Rust.
//!
//! Canister provides three layers, each built on the one below:
//!
//! ## ReactiveCell (the leaf)
//!
//! A thread-safe holder of a single value:
//! - `ReactiveCell<T>` - atomic replace plus synchronous fan-out to observers
//! - Subscriptions replay the latest value immediately, then follow changes
//! - RAII `Subscription` guards for cancellation
//!
//! ## Store (state management)
//!
//! Typed mutation and selection over a cell:
//! - `set` / `change` (shallow partial merge via the `Merge` trait) /
//!   `change_with` (functional transform)
//! - A listen family with optional change-deduplication
//! - An optional observability sink for post-change snapshots
//!
//! ## EntityStore (collections)
//!
//! A store specialization for an ordered entity collection with a
//! selection, a status, and an in-flight action label:
//! - `add` / `add_many` / `update` / `remove` / `exists`
//! - `set_action` / `set_status` bookkeeping

pub mod cell;
pub mod entity;
pub mod store;

// Re-export main types for convenience
pub use cell::{ReactiveCell, Subscription};
pub use entity::{EntityPatch, EntityState, EntityStore, Status};
pub use store::{Merge, Selector, Store};
