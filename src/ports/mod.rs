mod catalog_source;
mod command_runner;
mod image_builder;
mod progress_reporter;

pub use catalog_source::CatalogSource;
pub use command_runner::CommandRunner;
pub use image_builder::ImageBuilder;
pub use progress_reporter::ProgressReporter;
