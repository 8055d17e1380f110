use crate::domain::{AppError, Role};

/// Port for reading the full role catalog.
pub trait CatalogSource {
    /// Human-readable location, used in diagnostics.
    fn describe(&self) -> String;

    /// Read every role in catalog order.
    fn read_roles(&self) -> Result<Vec<Role>, AppError>;
}
