use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Role};
use crate::ports::CatalogSource;

/// Catalog location used when none is configured.
pub const DEFAULT_CATALOG_PATH: &str = "data/roles.json";

/// Environment variable overriding the catalog location.
pub const CATALOG_ENV: &str = "ROLECHECK_CATALOG";

/// Role catalog stored as a JSON or YAML list on disk.
///
/// `.yaml` and `.yml` files are parsed as YAML; anything else as JSON.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the catalog path: explicit flag, then environment, then default.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::new(path);
        }
        match std::env::var_os(CATALOG_ENV) {
            Some(path) if !path.is_empty() => Self::new(path),
            _ => Self::new(DEFAULT_CATALOG_PATH),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_yaml(&self) -> bool {
        matches!(
            self.path.extension().and_then(|ext| ext.to_str()),
            Some("yaml") | Some("yml")
        )
    }
}

impl CatalogSource for FileCatalog {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_roles(&self) -> Result<Vec<Role>, AppError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|source| AppError::CatalogIo { path: self.describe(), source })?;

        let parsed: Result<Vec<Role>, String> = if self.is_yaml() {
            serde_yaml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|details| AppError::CatalogParse { path: self.describe(), details })
    }
}
