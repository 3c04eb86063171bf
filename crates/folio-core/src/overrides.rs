//! Dev image override store.
//!
//! Persistent mapping from `(variant, identifier, target)` to an image
//! path, used only by the image-attachment authoring mode. The whole
//! mapping is serialized as one JSON object under a single well-known
//! key so it can be inspected and exported as a unit. Malformed stored
//! data is treated as "no overrides" and logged, never surfaced to the
//! caller.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, TableDefinition};

use crate::content::Variant;
use crate::error::FolioError;

const OVERRIDES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("image_overrides");

/// The single key the serialized mapping lives under
const OVERRIDES_KEY: &str = "dev_attached_images";

/// Which image slot an override targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImageTarget {
    Card,
    Modal,
}

impl ImageTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageTarget::Card => "card",
            ImageTarget::Modal => "modal",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "card" => Some(ImageTarget::Card),
            "modal" => Some(ImageTarget::Modal),
            _ => None,
        }
    }

    /// Name of the record field this override would replace
    fn field_name(self) -> &'static str {
        match self {
            ImageTarget::Card => "card_image",
            ImageTarget::Modal => "modal_image",
        }
    }
}

/// Composite key for one override: variant, record id, image slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverrideKey {
    pub variant: Variant,
    pub id: String,
    pub target: ImageTarget,
}

impl OverrideKey {
    pub fn new(variant: Variant, id: impl Into<String>, target: ImageTarget) -> Self {
        Self {
            variant,
            id: id.into(),
            target,
        }
    }

    /// Encode as the stored map key, e.g. `experience_1_card`
    pub fn encode(&self) -> String {
        format!("{}_{}_{}", self.variant, self.id, self.target.as_str())
    }

    /// Parse a stored map key. Record ids never contain `_`, so the
    /// three components split unambiguously.
    pub fn parse(key: &str) -> Option<Self> {
        let mut parts = key.splitn(3, '_');
        let variant = Variant::parse(parts.next()?)?;
        let id = parts.next()?;
        let target = ImageTarget::parse(parts.next()?)?;
        if id.is_empty() {
            return None;
        }
        Some(Self::new(variant, id, target))
    }
}

/// Persistent dev override store backed by redb.
#[derive(Clone)]
pub struct OverrideStore {
    db: Arc<RwLock<Database>>,
}

impl OverrideStore {
    /// Open (or create) the store under `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, FolioError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let db = Database::create(dir.join("overrides.redb"))?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(OVERRIDES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Load the raw mapping. Parse failures degrade to an empty map.
    fn load_map(&self) -> BTreeMap<String, String> {
        let raw = match self.load_raw() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("failed to read override store: {e}");
                return BTreeMap::new();
            }
        };
        let Some(bytes) = raw else {
            return BTreeMap::new();
        };
        match serde_json::from_slice(&bytes) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!("malformed override data, treating as empty: {e}");
                BTreeMap::new()
            }
        }
    }

    fn load_raw(&self) -> Result<Option<Vec<u8>>, FolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(OVERRIDES_TABLE)?;
        match table.get(OVERRIDES_KEY)? {
            Some(v) => Ok(Some(v.value().to_vec())),
            None => Ok(None),
        }
    }

    fn store_map(&self, map: &BTreeMap<String, String>) -> Result<(), FolioError> {
        let data =
            serde_json::to_vec(map).map_err(|e| FolioError::Serialization(e.to_string()))?;
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(OVERRIDES_TABLE)?;
            table.insert(OVERRIDES_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Look up the override for one exact composite key.
    pub fn get(&self, key: &OverrideKey) -> Option<String> {
        self.load_map().get(&key.encode()).cloned()
    }

    /// Save (or replace) one override.
    pub fn save(&self, key: &OverrideKey, path: &str) -> Result<(), FolioError> {
        let mut map = self.load_map();
        map.insert(key.encode(), path.to_string());
        self.store_map(&map)?;
        tracing::info!(
            variant = %key.variant,
            id = %key.id,
            target = key.target.as_str(),
            path,
            "saved image override"
        );
        Ok(())
    }

    /// All overrides, keyed by parsed composite key.
    ///
    /// Entries whose stored key no longer parses are skipped with a
    /// warning.
    pub fn entries(&self) -> BTreeMap<OverrideKey, String> {
        self.load_map()
            .into_iter()
            .filter_map(|(k, path)| match OverrideKey::parse(&k) {
                Some(key) => Some((key, path)),
                None => {
                    tracing::warn!(key = %k, "skipping unparseable override key");
                    None
                }
            })
            .collect()
    }

    /// Drop every saved override.
    pub fn clear(&self) -> Result<(), FolioError> {
        self.store_map(&BTreeMap::new())?;
        tracing::info!("cleared all image overrides");
        Ok(())
    }

    /// Render every override as ready-to-paste source-update lines,
    /// grouped by variant and record id.
    pub fn export_statements(&self) -> String {
        let entries = self.entries();
        if entries.is_empty() {
            return "// no saved image overrides\n".to_string();
        }

        let mut out = String::new();
        let mut last_variant = None;
        let mut last_id: Option<(Variant, String)> = None;

        for (key, path) in entries {
            if last_variant != Some(key.variant) {
                if last_variant.is_some() {
                    out.push('\n');
                }
                let _ = writeln!(out, "// --- {} ---", key.variant);
                last_variant = Some(key.variant);
                last_id = None;
            }
            let id_marker = (key.variant, key.id.clone());
            if last_id.as_ref() != Some(&id_marker) {
                let _ = writeln!(out, "// record \"{}\"", key.id);
                last_id = Some(id_marker);
            }
            let _ = writeln!(out, "{}: Some(\"{}\"),", key.target.field_name(), path);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_encode_parse_round_trip() {
        let key = OverrideKey::new(Variant::Project, "4", ImageTarget::Card);
        assert_eq!(key.encode(), "project_4_card");
        assert_eq!(OverrideKey::parse("project_4_card"), Some(key));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(OverrideKey::parse(""), None);
        assert_eq!(OverrideKey::parse("project_4"), None);
        assert_eq!(OverrideKey::parse("banana_4_card"), None);
        assert_eq!(OverrideKey::parse("project_4_banner"), None);
        assert_eq!(OverrideKey::parse("project__card"), None);
    }

    #[test]
    fn test_education_id_parses() {
        // Education ids carry the edu prefix but no underscore
        let key = OverrideKey::parse("experience_edu1_modal").unwrap();
        assert_eq!(key.variant, Variant::Experience);
        assert_eq!(key.id, "edu1");
        assert_eq!(key.target, ImageTarget::Modal);
    }
}
