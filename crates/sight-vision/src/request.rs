//! Batch request assembly.

use std::path::Path;

use sight_models::{
    AnnotateImageRequest, BatchAnnotateImagesRequest, DetectionFeature, Image, LanguageHints,
};
use tracing::debug;

use crate::error::{VisionError, VisionResult};

/// Build a batch with one request per path, in path order.
///
/// Files are read sequentially; the first unreadable file aborts the whole
/// batch. Hints are dropped for features that do not use them.
pub fn build_batch<P: AsRef<Path>>(
    paths: &[P],
    feature: DetectionFeature,
    hints: &LanguageHints,
) -> VisionResult<BatchAnnotateImagesRequest> {
    if paths.is_empty() {
        return Err(VisionError::invalid_request("no image paths given"));
    }

    let hints = hints.for_feature(feature);
    let mut requests = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| VisionError::image_read(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read image");
        requests.push(AnnotateImageRequest::new(
            Image::from_bytes(&bytes),
            feature,
            hints.clone(),
        ));
    }

    Ok(BatchAnnotateImagesRequest { requests })
}
