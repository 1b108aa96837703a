//! # Entity Store
//!
//! The in-memory collection owned by a [`ResourceActor`](crate::ResourceActor).
//!
//! Entities live in a `HashMap` keyed by id, with a separate `Vec` recording insertion
//! order so that listings and searches come back in the order entities were first stored.
//! Ids come from a monotonic `u32` counter that starts at 1 and is never rewound.

use crate::entity::ActorEntity;
use std::collections::HashMap;

/// Insertion-ordered entity collection plus its id counter.
///
/// All operations are synchronous and infallible. The store does not validate payloads;
/// callers are expected to hand it well-formed `T::Params`.
pub struct EntityStore<T: ActorEntity> {
    entities: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id))
            .cloned()
            .collect()
    }

    pub fn get(&self, id: &T::Id) -> Option<T> {
        self.entities.get(id).cloned()
    }

    /// Stores a new entity under a freshly allocated id and returns it.
    ///
    /// Ids already occupied by an upsert are skipped so that a create never
    /// overwrites a live entity.
    pub fn create(&mut self, params: T::Params) -> T {
        let id = self.allocate_id();
        let entity = T::from_params(id.clone(), params);
        self.order.push(id.clone());
        self.entities.insert(id, entity.clone());
        entity
    }

    /// Replaces the entity at `id`, creating it when absent.
    ///
    /// A replaced entity keeps its list position; a new one is appended.
    pub fn update(&mut self, id: T::Id, params: T::Params) -> T {
        let entity = T::from_params(id.clone(), params);
        if self.entities.insert(id.clone(), entity.clone()).is_none() {
            self.order.push(id);
        }
        entity
    }

    /// Removes the entity at `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &T::Id) -> bool {
        if self.entities.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }

    /// Entities matching `query`, in list order.
    pub fn search(&self, query: &T::Query) -> Vec<T> {
        self.order
            .iter()
            .filter_map(|id| self.entities.get(id))
            .filter(|entity| entity.matches(query))
            .cloned()
            .collect()
    }

    fn allocate_id(&mut self) -> T::Id {
        loop {
            let id = T::Id::from(self.next_id);
            self.next_id += 1;
            if !self.entities.contains_key(&id) {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        text: String,
    }

    impl ActorEntity for Note {
        type Id = u32;
        type Params = String;
        type Query = String;

        fn from_params(id: u32, text: String) -> Self {
            Self { id, text }
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn matches(&self, query: &String) -> bool {
            self.text.contains(query.as_str())
        }
    }

    fn texts(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.text.as_str()).collect()
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut store = EntityStore::<Note>::new();
        assert_eq!(store.create("a".into()).id, 1);
        assert_eq!(store.create("b".into()).id, 2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut store = EntityStore::<Note>::new();
        let first = store.create("a".into());
        assert!(store.delete(&first.id));
        assert!(store.is_empty());
        assert_eq!(store.create("b".into()).id, 2);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = EntityStore::<Note>::new();
        store.create("a".into());
        assert!(!store.delete(&42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_keeps_position_and_upserts_at_end() {
        let mut store = EntityStore::<Note>::new();
        store.create("a".into());
        store.create("b".into());

        let replaced = store.update(1, "a2".into());
        assert_eq!(replaced.id, 1);
        assert_eq!(texts(&store.list()), vec!["a2", "b"]);

        let upserted = store.update(10, "z".into());
        assert_eq!(upserted.id, 10);
        assert_eq!(texts(&store.list()), vec!["a2", "b", "z"]);
    }

    #[test]
    fn test_create_skips_ids_taken_by_upsert() {
        let mut store = EntityStore::<Note>::new();
        store.update(1, "upserted".into());
        let created = store.create("created".into());
        assert_eq!(created.id, 2);
        assert_eq!(store.get(&1).unwrap().text, "upserted");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_search_preserves_list_order() {
        let mut store = EntityStore::<Note>::new();
        store.create("apple".into());
        store.create("pear".into());
        store.create("pineapple".into());
        assert_eq!(texts(&store.search(&"apple".into())), vec!["apple", "pineapple"]);
        assert_eq!(store.search(&String::new()).len(), 3);
    }
}
