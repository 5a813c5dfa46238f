use std::path::{Path, PathBuf};

use crate::entity::EntityType;
use crate::relationship::RelationType;

pub const DATA_DIR_ENV: &str = "MEDKG_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

/// Where exported files land. Node, edge and dictionary files each get
/// their own subdirectory under `data_dir`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub data_dir: PathBuf,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl OutputLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Uses `MEDKG_DATA_DIR` when set, otherwise `./data`.
    #[must_use]
    pub fn from_env() -> Self {
        std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn entity_dir(&self) -> PathBuf {
        self.data_dir.join("entity")
    }

    #[must_use]
    pub fn relationship_dir(&self) -> PathBuf {
        self.data_dir.join("relationship")
    }

    #[must_use]
    pub fn name_dir(&self) -> PathBuf {
        self.data_dir.join("name")
    }

    #[must_use]
    pub fn node_file(&self, entity_type: EntityType) -> PathBuf {
        self.entity_dir().join(format!("{}.csv", entity_type.file_stem()))
    }

    #[must_use]
    pub fn edge_file(&self, relation_type: RelationType) -> PathBuf {
        self.relationship_dir()
            .join(format!("{}.csv", relation_type.file_stem()))
    }

    #[must_use]
    pub fn dictionary_file(&self, entity_type: EntityType) -> PathBuf {
        self.name_dir().join(format!("{}.txt", entity_type.file_stem()))
    }
}

/// Creates `dir` and any missing parents.
pub(crate) fn ensure_dir(dir: &Path) -> crate::Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| crate::Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}
