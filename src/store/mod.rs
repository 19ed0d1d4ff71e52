//! High-level state management with stores.
//!
//! A `Store` wraps a [`ReactiveCell`](crate::cell::ReactiveCell) and adds
//! typed mutation entry points (full replace, shallow partial merge via the
//! [`Merge`] trait, functional transform) and a family of selector-based
//! listen builders with change-deduplication.

mod merge;
mod store;

pub use merge::Merge;
pub use store::{Selector, Store};
