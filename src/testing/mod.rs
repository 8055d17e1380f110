mod memory_catalog;

pub use fake_command_runner::FakeCommandRunner;
pub use fake_image_builder::FakeImageBuilder;
pub use memory_catalog::MemoryCatalog;
pub use recording_reporter::{RecordingReporter, ReportEvent};
