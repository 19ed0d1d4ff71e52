//! The reactive leaf: a value holder with replay-latest subscriptions.
//!
//! `ReactiveCell` is the primitive everything else is built on. It owns the
//! current value, replaces it atomically on `publish`, and fans each new
//! value out to observers synchronously, in subscription order.

mod cell;

pub use cell::{ReactiveCell, Subscription};
