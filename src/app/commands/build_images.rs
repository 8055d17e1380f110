use tracing::error;

use crate::domain::{AppError, ImageBuildRequest};
use crate::ports::ImageBuilder;

/// Build each requested image in order, aborting on the first failure.
///
/// Returns the distributions that were built.
pub fn build_images<B: ImageBuilder + ?Sized>(
    builder: &B,
    requests: &[ImageBuildRequest],
) -> Result<Vec<String>, AppError> {
    let mut built = Vec::with_capacity(requests.len());
    for request in requests {
        if let Err(e) = builder.build(request) {
            error!(distro = %request.distro, "image build failed");
            return Err(e);
        }
        println!("Integration test {} passed.", request.distro);
        built.push(request.distro.clone());
    }
    println!("All integration tests passed.");
    Ok(built)
}
