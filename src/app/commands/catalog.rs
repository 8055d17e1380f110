use std::collections::HashSet;

use tracing::{debug, warn};

use crate::domain::{AppError, Role};
use crate::ports::CatalogSource;

/// Role filters applied after the catalog is read.
#[derive(Debug, Clone, Default)]
pub struct RoleFilter<'a> {
    /// Keep only roles named here.
    pub tags: Option<&'a [String]>,
    /// Drop roles named here.
    pub skips: Option<&'a [String]>,
}

/// Read the catalog and apply the tag filter, then the skip filter.
///
/// Catalog order is preserved. Duplicate role names make the catalog malformed.
pub fn load_roles<C: CatalogSource>(
    source: &C,
    filter: RoleFilter<'_>,
) -> Result<Vec<Role>, AppError> {
    let roles = source.read_roles()?;
    debug!(catalog = %source.describe(), roles = roles.len(), "read role catalog");

    ensure_unique_names(&roles)?;
    warn_unknown_names(&roles, filter.tags, "tags");
    warn_unknown_names(&roles, filter.skips, "skip");

    Ok(filter_roles(roles, filter))
}

/// Apply the keep-only filter, then the drop filter.
pub fn filter_roles(roles: Vec<Role>, filter: RoleFilter<'_>) -> Vec<Role> {
    roles
        .into_iter()
        .filter(|role| filter.tags.is_none_or(|tags| tags.contains(&role.name)))
        .filter(|role| filter.skips.is_none_or(|skips| !skips.contains(&role.name)))
        .collect()
}

fn ensure_unique_names(roles: &[Role]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for role in roles {
        if !seen.insert(role.name.as_str()) {
            return Err(AppError::DuplicateRole(role.name.clone()));
        }
    }
    Ok(())
}

fn warn_unknown_names(roles: &[Role], names: Option<&[String]>, flag: &str) {
    for name in names.unwrap_or_default() {
        if !roles.iter().any(|role| &role.name == name) {
            warn!(role = %name, flag, "filter names a role that is not in the catalog");
        }
    }
}
