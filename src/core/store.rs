use crate::core::notification::Notification;
use crate::error::{EngineError, Result};

/// The current working set of notifications plus a bounded side list of
/// recently removed records.
///
/// Invariant: ids are unique across the working set. The side list is
/// keyed by id as well; a record lives in at most one of the two.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    items: Vec<Notification>,
    removed: Vec<Notification>,
    removed_cap: usize,
}

impl NotificationStore {
    /// Build the store from a seed collection. Duplicate ids keep the
    /// first occurrence; later ones are dropped with a warning.
    pub fn new(seed: Vec<Notification>, removed_cap: usize) -> Self {
        let mut items: Vec<Notification> = Vec::with_capacity(seed.len());
        for n in seed {
            if items.iter().any(|existing| existing.id == n.id) {
                log::warn!("duplicate seed id {} dropped", n.id);
                continue;
            }
            items.push(n);
        }
        Self {
            items,
            removed: Vec::new(),
            removed_cap,
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Records removed but still within reach of the side list, oldest first.
    pub fn recently_removed(&self) -> &[Notification] {
        &self.removed
    }

    /// Move a record out of the working set into the side list.
    /// When the side list is full the oldest entry is dropped for good.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        let pos = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("notification {id}")))?;
        let item = self.items.remove(pos);
        self.removed.push(item);
        if self.removed.len() > self.removed_cap {
            let evicted = self.removed.remove(0);
            log::debug!("side list full, dropping {}", evicted.id);
        }
        Ok(())
    }

    /// Move a record from the side list back into the working set.
    /// It is appended; the original position is not restored.
    pub fn restore(&mut self, id: &str) -> Result<()> {
        let pos = self
            .removed
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| EngineError::NotFound(format!("removed notification {id}")))?;
        let item = self.removed.remove(pos);
        self.items.push(item);
        Ok(())
    }
}
