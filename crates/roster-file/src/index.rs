//! Ordered id index persisted next to the record files.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use roster_core::EntityId;

/// Longest id (in bytes) whose record file is named by its hex encoding.
/// Longer ids get a generated name kept in the index.
pub(crate) const MAX_HEX_ID_LEN: usize = 100;

/// Storage order of record ids.
///
/// `positions` mirrors `ids` and is rebuilt on load, so only `ids` and the
/// generated file names reach disk.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub(crate) struct Index {
    ids: Vec<EntityId>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    names: BTreeMap<EntityId, String>,
    #[serde(skip)]
    positions: HashMap<EntityId, usize>,
}

impl Index {
    pub(crate) fn from_ids(ids: Vec<EntityId>) -> Self {
        let mut index = Self {
            ids,
            names: BTreeMap::new(),
            positions: HashMap::new(),
        };
        index.reindex();
        index
    }

    /// Rebuild `positions`, keeping the first occurrence of any repeated id.
    pub(crate) fn reindex(&mut self) {
        let mut seen = HashMap::with_capacity(self.ids.len());
        self.ids.retain(|id| seen.insert(id.clone(), ()).is_none());
        self.positions = self
            .ids
            .iter()
            .enumerate()
            .map(|(pos, id)| (id.clone(), pos))
            .collect();
        let positions = &self.positions;
        self.names.retain(|id, _| positions.contains_key(id));
    }

    pub(crate) fn contains(&self, id: &EntityId) -> bool {
        self.positions.contains_key(id)
    }

    /// Append `id`; returns false if it was already indexed.
    pub(crate) fn push(&mut self, id: EntityId) -> bool {
        if self.contains(&id) {
            return false;
        }
        if id.as_str().len() > MAX_HEX_ID_LEN {
            self.names
                .insert(id.clone(), format!("long-{}", EntityId::generate()));
        }
        self.positions.insert(id.clone(), self.ids.len());
        self.ids.push(id);
        true
    }

    /// Drop `id`, returning its former position.
    pub(crate) fn remove(&mut self, id: &EntityId) -> Option<usize> {
        let pos = self.positions.remove(id)?;
        self.ids.remove(pos);
        self.names.remove(id);
        for shifted in &self.ids[pos..] {
            if let Some(p) = self.positions.get_mut(shifted) {
                *p -= 1;
            }
        }
        Some(pos)
    }

    /// Record file name (without extension) for `id`.
    ///
    /// Hex names only use `[0-9a-f]`, so they never collide with the
    /// `long-` names handed out by [`Index::push`].
    pub(crate) fn file_stem(&self, id: &EntityId) -> String {
        match self.names.get(id) {
            Some(name) => name.clone(),
            None => hex_name(id),
        }
    }

    pub(crate) fn ids(&self) -> &[EntityId] {
        &self.ids
    }

    pub(crate) fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Lowercase hex of the id's UTF-8 bytes.
fn hex_name(id: &EntityId) -> String {
    id.as_str().bytes().map(|b| format!("{b:02x}")).collect()
}
