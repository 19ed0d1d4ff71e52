use crate::store::Merge;

/// Outcome of the most recent asynchronous action.
///
/// The library never sets `Failed` on its own; `status` and `error` are the
/// application's channel for signaling async outcomes to subscribers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Success,
    Failed,
    Loading,
    Complete,
}

/// State managed by an [`EntityStore`](crate::entity::EntityStore).
///
/// `entities` is an ordered sequence: insertion order is significant and
/// duplicates are permitted (uniqueness is the caller's concern, expressed
/// through the predicates passed to the store's mutators). `selected` holds
/// an entity by value, not by index — it has no live link back into
/// `entities` and goes stale if the referenced entity is updated or removed
/// without updating the selection.
#[derive(Clone, Debug, PartialEq)]
pub struct EntityState<E> {
    pub entities: Vec<E>,
    pub selected: Option<E>,
    pub status: Option<Status>,
    /// Label naming the in-flight or most recent action, e.g. `"GET_ALL"`.
    pub action: Option<String>,
    /// Error payload, meaningful only when `status` is [`Status::Failed`].
    pub error: Option<String>,
}

impl<E> EntityState<E> {
    /// Create a state with the given entities and selection.
    pub fn new(entities: Vec<E>, selected: Option<E>) -> Self {
        Self {
            entities,
            selected,
            status: None,
            action: None,
            error: None,
        }
    }
}

impl<E> Default for EntityState<E> {
    fn default() -> Self {
        Self::new(Vec::new(), None)
    }
}

/// Partial form of [`EntityState`] for shallow merges.
///
/// Outer `None` means "keep the current value". The optional state fields
/// are doubly optional so a patch can also clear them, e.g.
/// `selected: Some(None)` deselects.
pub struct EntityPatch<E> {
    pub entities: Option<Vec<E>>,
    pub selected: Option<Option<E>>,
    pub status: Option<Option<Status>>,
    pub action: Option<Option<String>>,
    pub error: Option<Option<String>>,
}

// Manual impl: `derive(Default)` would demand `E: Default` for no reason.
impl<E> Default for EntityPatch<E> {
    fn default() -> Self {
        Self {
            entities: None,
            selected: None,
            status: None,
            action: None,
            error: None,
        }
    }
}

impl<E: Clone> Merge for EntityState<E> {
    type Patch = EntityPatch<E>;

    fn merge(&self, patch: EntityPatch<E>) -> Self {
        Self {
            entities: patch.entities.unwrap_or_else(|| self.entities.clone()),
            selected: patch.selected.unwrap_or_else(|| self.selected.clone()),
            status: patch.status.unwrap_or(self.status),
            action: patch.action.unwrap_or_else(|| self.action.clone()),
            error: patch.error.unwrap_or_else(|| self.error.clone()),
        }
    }
}
