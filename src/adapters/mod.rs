pub mod catalog_file;
pub mod console_reporter;
pub mod container_image_builder;
pub mod shell_command_runner;

pub use catalog_file::FileCatalog;
pub use console_reporter::ConsoleReporter;
pub use container_image_builder::ContainerImageBuilder;
pub use shell_command_runner::ShellCommandRunner;
