//! Image build driver CLI.

use clap::Parser;
use tracing::Level;

use crate::app::api;
use crate::app::logging::init_logging;
use crate::domain::image_build::DEFAULT_DISTROS;
use crate::domain::{DEFAULT_ARCHITECTURE, ImageBuildOptions};

#[derive(Parser, Debug)]
#[command(name = "rolecheck-images")]
#[command(version)]
#[command(
    about = "Build the container integration test image for each distribution",
    long_about = None
)]
struct ImagesCli {
    /// Chip architecture
    #[arg(short, long, value_name = "ARCHITECTURE", default_value = DEFAULT_ARCHITECTURE)]
    arch: String,
    /// Use the container build cache
    #[arg(short, long)]
    cache: bool,
    /// Linux distributions to build
    #[arg(
        short,
        long,
        value_name = "DISTRIBUTIONS",
        num_args = 1..,
        default_values = DEFAULT_DISTROS
    )]
    distros: Vec<String>,
    /// Roles to skip inside the images
    #[arg(short, long, value_name = "ROLES", num_args = 1..)]
    skip: Option<Vec<String>>,
    /// Roles to keep inside the images
    #[arg(short, long, value_name = "ROLES", num_args = 1..)]
    tags: Option<Vec<String>>,
}

impl From<ImagesCli> for ImageBuildOptions {
    fn from(cli: ImagesCli) -> Self {
        Self {
            architecture: cli.arch,
            use_cache: cli.cache,
            distros: cli.distros,
            skips: cli.skip,
            tags: cli.tags,
        }
    }
}

/// Entry point for the `rolecheck-images` driver.
pub fn run() {
    init_logging(Level::INFO);

    let options = ImageBuildOptions::from(ImagesCli::parse());

    if let Err(e) = api::build_images(&options) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
