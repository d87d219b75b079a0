use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::store::{KeyValueStore, StoreError};
use crate::model::checklist::Toggle;

/// Error type for list mutations
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record index out of range: {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("could not save records: {0}")]
    Store(#[from] StoreError),
}

/// Ordered records persisted as one JSON array under one key.
///
/// Records are addressed by position. Every mutation loads the stored
/// snapshot, changes it, writes the whole array back and returns the new
/// snapshot; indices from an older snapshot must not be reused.
#[derive(Debug)]
pub struct RecordListStore<T> {
    key: String,
    records: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> RecordListStore<T> {
    pub fn new(key: impl Into<String>) -> Self {
        RecordListStore {
            key: key.into(),
            records: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored records, or an empty list if the key is absent or unparsable.
    pub fn load_all(&self, store: &dyn KeyValueStore) -> Vec<T> {
        let Some(raw) = store.get(&self.key) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::debug!("ignoring malformed list under {}: {}", self.key, e);
            Vec::new()
        })
    }

    /// Replace the whole stored list.
    pub fn save_all(&self, store: &mut dyn KeyValueStore, items: &[T]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(items)?;
        store.set(&self.key, &raw)
    }

    /// Append `item` and return the new snapshot.
    pub fn add(&self, store: &mut dyn KeyValueStore, item: T) -> Result<Vec<T>, RecordError> {
        let mut items = self.load_all(store);
        items.push(item);
        self.save_all(store, &items)?;
        Ok(items)
    }

    /// Remove the record at `index`; later records shift down by one.
    pub fn delete_at(
        &self,
        store: &mut dyn KeyValueStore,
        index: usize,
    ) -> Result<Vec<T>, RecordError> {
        let mut items = self.load_all(store);
        check_index(index, items.len())?;
        items.remove(index);
        self.save_all(store, &items)?;
        Ok(items)
    }
}

impl<T: Serialize + DeserializeOwned + Toggle> RecordListStore<T> {
    /// Flip the record at `index` and return the new snapshot.
    pub fn toggle_at(
        &self,
        store: &mut dyn KeyValueStore,
        index: usize,
    ) -> Result<Vec<T>, RecordError> {
        let mut items = self.load_all(store);
        check_index(index, items.len())?;
        items[index].toggle();
        self.save_all(store, &items)?;
        Ok(items)
    }
}

fn check_index(index: usize, len: usize) -> Result<(), RecordError> {
    if index >= len {
        return Err(RecordError::IndexOutOfRange { index, len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::{MemoryStore, keys};
    use crate::model::ChecklistItem;
    use pretty_assertions::assert_eq;

    fn item(text: &str, checked: bool) -> ChecklistItem {
        ChecklistItem {
            text: text.into(),
            checked,
        }
    }

    fn list() -> RecordListStore<ChecklistItem> {
        RecordListStore::new(keys::CHECKLIST)
    }

    fn seeded(texts: &[&str]) -> MemoryStore {
        let mut store = MemoryStore::new();
        let items: Vec<ChecklistItem> = texts.iter().map(|t| item(t, false)).collect();
        list().save_all(&mut store, &items).unwrap();
        store
    }

    #[test]
    fn add_toggle_delete_scenario() {
        let mut store = MemoryStore::new();
        let list = list();

        list.add(&mut store, item("Buy milk", false)).unwrap();
        assert_eq!(list.load_all(&store), vec![item("Buy milk", false)]);

        list.toggle_at(&mut store, 0).unwrap();
        assert_eq!(list.load_all(&store), vec![item("Buy milk", true)]);

        list.delete_at(&mut store, 0).unwrap();
        assert!(list.load_all(&store).is_empty());
        assert_eq!(store.get(keys::CHECKLIST).as_deref(), Some("[]"));
    }

    #[test]
    fn save_all_of_load_all_is_idempotent() {
        let mut store = seeded(&["a", "b", "c"]);
        list().toggle_at(&mut store, 1).unwrap();
        let before = store.get(keys::CHECKLIST);

        let items = list().load_all(&store);
        list().save_all(&mut store, &items).unwrap();
        assert_eq!(store.get(keys::CHECKLIST), before);
    }

    #[test]
    fn delete_shifts_later_indices_down() {
        for k in 0..4 {
            let mut store = seeded(&["a", "b", "c", "d"]);
            let before = list().load_all(&store);
            let after = list().delete_at(&mut store, k).unwrap();

            assert_eq!(after.len(), 3);
            assert_eq!(after[..k], before[..k]);
            assert_eq!(after[k..], before[k + 1..]);
            assert_eq!(list().load_all(&store), after);
        }
    }

    #[test]
    fn toggle_changes_only_target() {
        let mut store = seeded(&["a", "b", "c"]);
        let after = list().toggle_at(&mut store, 2).unwrap();
        assert_eq!(
            after,
            vec![item("a", false), item("b", false), item("c", true)]
        );
    }

    #[test]
    fn out_of_range_is_error_and_does_not_write() {
        let mut store = seeded(&["a"]);
        let writes = store.write_count();

        let err = list().toggle_at(&mut store, 1).unwrap_err();
        assert!(matches!(err, RecordError::IndexOutOfRange { index: 1, len: 1 }));
        let err = list().delete_at(&mut store, 5).unwrap_err();
        assert!(matches!(err, RecordError::IndexOutOfRange { index: 5, len: 1 }));

        assert_eq!(store.write_count(), writes);
    }

    #[test]
    fn unparsable_content_loads_as_empty() {
        let mut store = MemoryStore::new();
        store.set(keys::CHECKLIST, "{not an array").unwrap();
        assert!(list().load_all(&store).is_empty());

        store.set(keys::CHECKLIST, r#"[{"text":"missing checked"}]"#).unwrap();
        assert!(list().load_all(&store).is_empty());

        // a mutation starts over from the empty snapshot
        let after = list().add(&mut store, item("fresh", false)).unwrap();
        assert_eq!(after, vec![item("fresh", false)]);
    }

    #[test]
    fn mutations_reload_before_writing() {
        let mut store = seeded(&["a", "b"]);
        let stale = list().load_all(&store);

        // another writer replaces the list behind our back
        list()
            .save_all(&mut store, &[item("x", false)])
            .unwrap();

        let after = list().add(&mut store, item("c", false)).unwrap();
        assert_eq!(stale.len(), 2);
        assert_eq!(after, vec![item("x", false), item("c", false)]);
    }
}
