//! Brand presets
//!
//! Named color + font pairs, persisted behind an injected store so the
//! layout and interaction logic stay testable without any filesystem. Stores
//! load once at startup and rewrite the whole list on save.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::{Result, StudioError};

/// A saved color + font pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandPreset {
    pub id: String,
    pub name: String,
    /// CSS color value, as the user entered it
    pub color: String,
    #[serde(rename = "fontFamily")]
    pub font_family: String,
}

static PRESET_SEQ: AtomicU64 = AtomicU64::new(0);

/// Process-unique preset id
pub(crate) fn next_preset_id() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let seq = PRESET_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("preset-{millis}-{seq}")
}

/// Durable preset persistence
pub trait PresetStore {
    /// Load all presets; a missing backing file yields an empty list
    fn load(&self) -> Result<Vec<BrandPreset>>;

    /// Rewrite the whole list
    fn save_all(&self, presets: &[BrandPreset]) -> Result<()>;
}

/// File-backed JSON store
pub struct JsonPresetStore {
    path: PathBuf,
}

impl JsonPresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PresetStore for JsonPresetStore {
    fn load(&self) -> Result<Vec<BrandPreset>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)
            .map_err(|e| StudioError::Presets(e.to_string()))?;
        serde_json::from_str(&data).map_err(|e| StudioError::Presets(e.to_string()))
    }

    fn save_all(&self, presets: &[BrandPreset]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| StudioError::Presets(e.to_string()))?;
            }
        }
        let data = serde_json::to_string_pretty(presets)
            .map_err(|e| StudioError::Presets(e.to_string()))?;
        std::fs::write(&self.path, data).map_err(|e| StudioError::Presets(e.to_string()))
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryPresetStore {
    presets: RefCell<Vec<BrandPreset>>,
}

impl MemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryPresetStore {
    fn load(&self) -> Result<Vec<BrandPreset>> {
        Ok(self.presets.borrow().clone())
    }

    fn save_all(&self, presets: &[BrandPreset]) -> Result<()> {
        *self.presets.borrow_mut() = presets.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preset(name: &str) -> BrandPreset {
        BrandPreset {
            id: next_preset_id(),
            name: name.into(),
            color: "#FF00FF".into(),
            font_family: "Georgia".into(),
        }
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryPresetStore::new();
        assert!(store.load().unwrap().is_empty());

        let presets = vec![preset("Brand A"), preset("Brand B")];
        store.save_all(&presets).unwrap();
        assert_eq!(store.load().unwrap(), presets);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let store = JsonPresetStore::new("/nonexistent/never/presets.json");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_json_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("inkcap-presets-{}", std::process::id()));
        let path = dir.join("presets.json");
        let store = JsonPresetStore::new(&path);

        let presets = vec![preset("Round trip")];
        store.save_all(&presets).unwrap();
        assert_eq!(store.load().unwrap(), presets);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_preset_ids_unique() {
        let a = next_preset_id();
        let b = next_preset_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_preset_serde_field_names() {
        let json = r##"{"id":"p1","name":"N","color":"#fff","fontFamily":"Inter"}"##;
        let p: BrandPreset = serde_json::from_str(json).unwrap();
        assert_eq!(p.font_family, "Inter");
    }
}
