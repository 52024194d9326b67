//! Favorites and named collections.

use serde::{Deserialize, Serialize};

/// Identifier of a collection within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CollectionId(pub u64);

/// A named group of Pokédex entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub name: String,
    pub description: Option<String>,
    pub pokemon_ids: Vec<u32>,
}

/// Favorite dex ids (ordered, unique) plus user-defined collections.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    favorite_ids: Vec<u32>,
    collections: Vec<Collection>,
    next_collection_id: u64,
}

impl Favorites {
    pub fn favorite_ids(&self) -> &[u32] {
        &self.favorite_ids
    }

    pub fn is_favorite(&self, dex_id: u32) -> bool {
        self.favorite_ids.contains(&dex_id)
    }

    /// Add the id if absent, remove it if present. Returns whether the id is
    /// a favorite afterwards.
    pub fn toggle_favorite(&mut self, dex_id: u32) -> bool {
        match self.favorite_ids.iter().position(|&id| id == dex_id) {
            Some(index) => {
                self.favorite_ids.remove(index);
                false
            }
            None => {
                self.favorite_ids.push(dex_id);
                true
            }
        }
    }

    /// Returns whether anything was removed.
    pub fn clear_favorites(&mut self) -> bool {
        let had_any = !self.favorite_ids.is_empty();
        self.favorite_ids.clear();
        had_any
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, id: CollectionId) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == id)
    }

    pub fn create_collection(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> CollectionId {
        let id = CollectionId(self.next_collection_id);
        self.next_collection_id += 1;
        self.collections.push(Collection {
            id,
            name: name.into(),
            description,
            pokemon_ids: Vec::new(),
        });
        id
    }

    /// Returns whether the collection existed.
    pub fn delete_collection(&mut self, id: CollectionId) -> bool {
        let before = self.collections.len();
        self.collections.retain(|c| c.id != id);
        self.collections.len() != before
    }

    /// Adds the id to the collection unless it is already a member. Returns
    /// whether the collection changed.
    pub fn add_to_collection(&mut self, id: CollectionId, dex_id: u32) -> bool {
        match self.collections.iter_mut().find(|c| c.id == id) {
            Some(collection) if !collection.pokemon_ids.contains(&dex_id) => {
                collection.pokemon_ids.push(dex_id);
                true
            }
            _ => false,
        }
    }

    /// Returns whether the collection changed.
    pub fn remove_from_collection(&mut self, id: CollectionId, dex_id: u32) -> bool {
        match self.collections.iter_mut().find(|c| c.id == id) {
            Some(collection) => {
                let before = collection.pokemon_ids.len();
                collection.pokemon_ids.retain(|&p| p != dex_id);
                collection.pokemon_ids.len() != before
            }
            None => false,
        }
    }
}
