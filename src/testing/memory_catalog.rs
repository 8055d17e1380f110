use crate::domain::{AppError, Role};
use crate::ports::CatalogSource;

/// Catalog held in memory; optionally fails every read.
pub struct MemoryCatalog {
    roles: Vec<Role>,
    unreadable: bool,
}

impl MemoryCatalog {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles, unreadable: false }
    }

    pub fn unreadable() -> Self {
        Self { roles: Vec::new(), unreadable: true }
    }
}

impl CatalogSource for MemoryCatalog {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn read_roles(&self) -> Result<Vec<Role>, AppError> {
        if self.unreadable {
            return Err(AppError::CatalogParse {
                path: self.describe(),
                details: "unreadable test catalog".to_string(),
            });
        }
        Ok(self.roles.clone())
    }
}
