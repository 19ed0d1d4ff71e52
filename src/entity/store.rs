use std::ops::Deref;

use crate::entity::{EntityPatch, EntityState, Status};
use crate::store::Store;

/// A store specialized for an ordered collection of entities.
///
/// Wraps a `Store<EntityState<E>>` and adds collection-level mutators. Every
/// mutator computes a new entities sequence from a snapshot and dispatches
/// it through a shallow merge touching only the fields it owns, so
/// subscribers observe each collection change as one state change.
///
/// The wrapper derefs to the inner store, so the full store API — `get`,
/// `set`, `change`, `change_with`, the listen family, `destroy` — is
/// available directly. There is deliberately no selection mutator here:
/// `selected` is managed by callers through `change`.
pub struct EntityStore<E> {
    store: Store<EntityState<E>>,
}

impl<E: Clone + Send + Sync + 'static> EntityStore<E> {
    /// Create a new entity store with the given initial state.
    pub fn new(initial: EntityState<E>) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    /// Append one entity at the end of the collection.
    ///
    /// No deduplication or uniqueness check is performed.
    pub fn add(&self, entity: E) {
        let mut entities = self.store.read(|state| state.entities.clone());
        entities.push(entity);
        self.dispatch_entities(entities);
    }

    /// Append a sequence of entities at the end of the collection,
    /// preserving their relative order.
    pub fn add_many<I>(&self, new: I)
    where
        I: IntoIterator<Item = E>,
    {
        let mut entities = self.store.read(|state| state.entities.clone());
        entities.extend(new);
        self.dispatch_entities(entities);
    }

    /// Replace the first entity matching the predicate with `entity`.
    ///
    /// Whole-entity replacement, not a field merge; only the first match is
    /// affected even when several entities satisfy the predicate. Returns
    /// `false` without dispatching when nothing matches.
    pub fn update<F>(&self, matches: F, entity: E) -> bool
    where
        F: Fn(&E) -> bool,
    {
        let mut entities = self.store.read(|state| state.entities.clone());
        let Some(idx) = entities.iter().position(|e| matches(e)) else {
            return false;
        };
        entities[idx] = entity;
        self.dispatch_entities(entities);
        true
    }

    /// Remove the first entity matching the predicate.
    ///
    /// Returns `false` without dispatching when nothing matches.
    pub fn remove<F>(&self, matches: F) -> bool
    where
        F: Fn(&E) -> bool,
    {
        let mut entities = self.store.read(|state| state.entities.clone());
        let Some(idx) = entities.iter().position(|e| matches(e)) else {
            return false;
        };
        entities.remove(idx);
        self.dispatch_entities(entities);
        true
    }

    /// Whether any entity matches the predicate. `false` on an empty
    /// collection.
    pub fn exists<F>(&self, matches: F) -> bool
    where
        F: Fn(&E) -> bool,
    {
        self.store.read(|state| state.entities.iter().any(|e| matches(e)))
    }

    /// Set the action label and force `status` to [`Status::Loading`].
    ///
    /// Actions start out loading; entities, selection and error are
    /// preserved.
    pub fn set_action<A>(&self, action: A)
    where
        A: Into<String>,
    {
        self.store.change(EntityPatch {
            action: Some(Some(action.into())),
            status: Some(Some(Status::Loading)),
            ..Default::default()
        });
    }

    /// Set only the status, preserving everything else.
    pub fn set_status(&self, status: Status) {
        self.store.change(EntityPatch {
            status: Some(Some(status)),
            ..Default::default()
        });
    }

    fn dispatch_entities(&self, entities: Vec<E>) {
        self.store.change(EntityPatch {
            entities: Some(entities),
            ..Default::default()
        });
    }
}

impl<E> Deref for EntityStore<E> {
    type Target = Store<EntityState<E>>;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl<E> Clone for EntityStore<E> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}
