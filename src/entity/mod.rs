//! Entity collections on top of stores.
//!
//! An [`EntityStore`] manages an ordered collection of entities together
//! with a selection, a status, and an in-flight action label, all held in
//! an [`EntityState`] inside a regular [`Store`](crate::store::Store).

mod state;
mod store;

pub use state::{EntityPatch, EntityState, Status};
pub use store::EntityStore;
