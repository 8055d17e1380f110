//! Container image build requests for the per-distribution test images.

use std::path::{Path, PathBuf};

/// Distributions built when none are requested.
pub const DEFAULT_DISTROS: [&str; 6] = ["alpine", "arch", "debian", "fedora", "suse", "ubuntu"];

/// Repository name given to built images.
pub const IMAGE_REPOSITORY: &str = "bootware";

/// Directory holding one `<distro>.Dockerfile` per distribution.
pub const DOCKERFILE_DIR: &str = "tests/integration";

/// Options shared by every image build of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuildOptions {
    pub architecture: String,
    pub use_cache: bool,
    pub distros: Vec<String>,
    pub skips: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// A single image build for one distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuildRequest {
    pub distro: String,
    pub dockerfile: PathBuf,
    pub image: String,
    pub platform: String,
    pub use_cache: bool,
    /// `(name, value)` pairs passed as `--build-arg name=value`, in order.
    pub build_args: Vec<(String, String)>,
}

impl ImageBuildRequest {
    /// Arguments for the container tool's `build` subcommand.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["build".to_string()];
        if !self.use_cache {
            args.push("--no-cache".to_string());
        }
        args.extend([
            "-f".to_string(),
            self.dockerfile.to_string_lossy().into_owned(),
            "-t".to_string(),
            self.image.clone(),
            "--platform".to_string(),
            self.platform.clone(),
            ".".to_string(),
        ]);
        for (name, value) in &self.build_args {
            args.push("--build-arg".to_string());
            args.push(format!("{}={}", name, value));
        }
        args
    }
}

/// Plan one build request per distribution, in the requested order.
pub fn plan_builds(options: &ImageBuildOptions, dockerfile_dir: &Path) -> Vec<ImageBuildRequest> {
    let mut build_args = Vec::new();
    if let Some(skips) = &options.skips {
        build_args.push(("skip".to_string(), skips.join(",")));
    }
    build_args.push(("test".to_string(), "true".to_string()));
    if let Some(tags) = &options.tags {
        build_args.push(("tags".to_string(), tags.join(",")));
    }

    options
        .distros
        .iter()
        .map(|distro| ImageBuildRequest {
            distro: distro.clone(),
            dockerfile: dockerfile_dir.join(format!("{}.Dockerfile", distro)),
            image: format!("{}:{}", IMAGE_REPOSITORY, distro),
            platform: format!("linux/{}", options.architecture),
            use_cache: options.use_cache,
            build_args: build_args.clone(),
        })
        .collect()
}
