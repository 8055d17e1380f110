use crate::ports::{CatalogSource, CommandRunner};

/// Application context holding dependencies for a role test run.
pub struct AppContext<C: CatalogSource, R: CommandRunner> {
    catalog: C,
    runner: R,
}

impl<C: CatalogSource, R: CommandRunner> AppContext<C, R> {
    /// Create a new application context.
    pub fn new(catalog: C, runner: R) -> Self {
        Self { catalog, runner }
    }

    /// Get a reference to the role catalog source.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}
