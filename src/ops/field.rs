use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::io::store::{KeyValueStore, StoreError};

/// Converts a value to and from its stored string form
pub trait Codec<T> {
    fn encode(value: &T) -> Result<String, StoreError>;
    /// `None` means the stored text is malformed.
    fn decode(raw: &str) -> Option<T>;
}

/// Stores the value's `Display` form and reads it back with `FromStr`
#[derive(Debug)]
pub struct Plain;

impl<T: FromStr + Display> Codec<T> for Plain {
    fn encode(value: &T) -> Result<String, StoreError> {
        Ok(value.to_string())
    }

    fn decode(raw: &str) -> Option<T> {
        raw.parse().ok()
    }
}

/// Stores the value as JSON
#[derive(Debug)]
pub struct Json;

impl<T: Serialize + DeserializeOwned> Codec<T> for Json {
    fn encode(value: &T) -> Result<String, StoreError> {
        Ok(serde_json::to_string(value)?)
    }

    fn decode(raw: &str) -> Option<T> {
        serde_json::from_str(raw).ok()
    }
}

/// One value bound to one store key.
///
/// `load` never fails: a missing or malformed value yields the default.
/// `save` writes through immediately.
#[derive(Debug)]
pub struct PersistedField<T, C> {
    key: String,
    default: T,
    codec: PhantomData<fn() -> C>,
}

impl<T: Clone, C: Codec<T>> PersistedField<T, C> {
    pub fn new(key: impl Into<String>, default: T) -> Self {
        PersistedField {
            key: key.into(),
            default,
            codec: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load(&self, store: &dyn KeyValueStore) -> T {
        let Some(raw) = store.get(&self.key) else {
            return self.default.clone();
        };
        match C::decode(&raw) {
            Some(value) => value,
            None => {
                log::debug!("ignoring malformed value under {}", self.key);
                self.default.clone()
            }
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore, value: &T) -> Result<(), StoreError> {
        let raw = C::encode(value)?;
        store.set(&self.key, &raw)
    }

    pub fn clear(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::{MemoryStore, keys};
    use crate::model::{NoteMap, WallpaperMode};

    #[test]
    fn absent_key_loads_default() {
        let store = MemoryStore::new();
        let field: PersistedField<String, Plain> = PersistedField::new(keys::NOTEPAD, String::new());
        assert_eq!(field.load(&store), "");
    }

    #[test]
    fn plain_string_round_trips_verbatim() {
        let mut store = MemoryStore::new();
        let field: PersistedField<String, Plain> = PersistedField::new(keys::NOTEPAD, String::new());
        field.save(&mut store, &"line one\n  line two".to_string()).unwrap();
        assert_eq!(store.get(keys::NOTEPAD).as_deref(), Some("line one\n  line two"));
        assert_eq!(field.load(&store), "line one\n  line two");
    }

    #[test]
    fn plain_enum_falls_back_on_unknown_word() {
        let mut store = MemoryStore::new();
        let field: PersistedField<WallpaperMode, Plain> =
            PersistedField::new(keys::WALLPAPER, WallpaperMode::Video);
        store.set(keys::WALLPAPER, "slideshow").unwrap();
        assert_eq!(field.load(&store), WallpaperMode::Video);

        field.save(&mut store, &WallpaperMode::Image).unwrap();
        assert_eq!(store.get(keys::WALLPAPER).as_deref(), Some("image"));
        assert_eq!(field.load(&store), WallpaperMode::Image);
    }

    #[test]
    fn malformed_json_loads_default() {
        let mut store = MemoryStore::new();
        store.set("calendarNotes-2024-0", "{\"1\": ").unwrap();
        let field: PersistedField<NoteMap, Json> =
            PersistedField::new("calendarNotes-2024-0", NoteMap::new());
        assert!(field.load(&store).is_empty());
    }

    #[test]
    fn json_map_uses_string_day_keys() {
        let mut store = MemoryStore::new();
        let field: PersistedField<NoteMap, Json> =
            PersistedField::new("calendarNotes-2024-0", NoteMap::new());
        let mut notes = NoteMap::new();
        notes.insert(5, "dentist".into());
        field.save(&mut store, &notes).unwrap();
        assert_eq!(
            store.get("calendarNotes-2024-0").as_deref(),
            Some(r#"{"5":"dentist"}"#)
        );
        assert_eq!(field.load(&store), notes);
    }

    #[test]
    fn clear_removes_key() {
        let mut store = MemoryStore::new();
        let field: PersistedField<String, Plain> = PersistedField::new(keys::NOTEPAD, String::new());
        field.save(&mut store, &"x".to_string()).unwrap();
        field.clear(&mut store).unwrap();
        assert!(store.get(keys::NOTEPAD).is_none());
    }
}
