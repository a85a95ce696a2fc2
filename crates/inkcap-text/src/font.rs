//! Font loading and matching
//!
//! Thin wrapper over `fontdb`. Families resolve by name with a sans-serif
//! fallback; face data is accessed through closures so font bytes are never
//! copied out of the database.

use crate::{Result, TextError};

/// Font database with family matching
pub struct FontStore {
    db: fontdb::Database,
}

impl FontStore {
    /// Create a store populated with the system's fonts
    pub fn system() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self { db }
    }

    /// Create an empty store (faces added via [`FontStore::load_font_data`])
    pub fn empty() -> Self {
        Self {
            db: fontdb::Database::new(),
        }
    }

    /// Register an in-memory font (TTF/OTF bytes)
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.db.load_font_data(data);
    }

    /// Number of known faces
    pub fn face_count(&self) -> usize {
        self.db.faces().count()
    }

    /// Find a face for the family, falling back to any sans-serif
    pub fn query_family(&self, family: &str) -> Option<fontdb::ID> {
        let query = fontdb::Query {
            families: &[fontdb::Family::Name(family), fontdb::Family::SansSerif],
            ..fontdb::Query::default()
        };
        self.db.query(&query).or_else(|| {
            // Any face is better than no text at all
            self.db.faces().next().map(|info| info.id)
        })
    }

    /// Run a closure over the raw face data and index
    pub fn with_face_data<T>(&self, id: fontdb::ID, f: impl FnOnce(&[u8], u32) -> T) -> Option<T> {
        self.db.with_face_data(id, f)
    }

    /// Ascender height in pixels at the given font size
    ///
    /// The overlay positions lines from the top edge, so the baseline sits
    /// one ascent below the line's y.
    pub fn ascent(&self, id: fontdb::ID, font_size: f32) -> Result<f32> {
        self.with_face_data(id, |data, index| {
            let face = ttf_parser::Face::parse(data, index)
                .map_err(|e| TextError::FontParsing(e.to_string()))?;
            let upem = face.units_per_em() as f32;
            Ok(face.ascender() as f32 * font_size / upem)
        })
        .unwrap_or_else(|| Err(TextError::FontNotFound(format!("face id {id:?}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_has_no_faces() {
        let store = FontStore::empty();
        assert_eq!(store.face_count(), 0);
        assert!(store.query_family("Inter").is_none());
    }

    #[test]
    fn test_system_store_query_falls_back() {
        let store = FontStore::system();
        if store.face_count() == 0 {
            // Headless environments may have no fonts installed at all
            return;
        }
        // An unknown family must still resolve to something
        assert!(store.query_family("definitely-not-a-real-family").is_some());
    }
}
