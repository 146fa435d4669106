// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trimmer — crop an image file to its content and write it back in place.

use std::path::Path;

use tracing::{debug, info, instrument};
use trimwerk_core::error::Result;
use trimwerk_core::{TrimConfig, TrimResult};

use crate::image::ImageProcessor;

/// Crops image files to their content bounding box.
///
/// One call is one straight pass: decode, detect, crop, persist. Failures are
/// returned immediately; nothing is retried and the source file is only ever
/// written when there is something to trim.
#[derive(Debug, Clone, Default)]
pub struct Trimmer {
    config: TrimConfig,
}

impl Trimmer {
    pub fn new(config: TrimConfig) -> Self {
        Self { config }
    }

    /// Trim the image at `path`, overwriting it with the cropped result.
    ///
    /// If the image is entirely background, or its content already touches
    /// every edge, the file is left byte-for-byte untouched and the result
    /// reports equal before/after dimensions.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn trim(&self, path: impl AsRef<Path>) -> Result<TrimResult> {
        let path = path.as_ref();
        let processor = ImageProcessor::open(path)?;
        let before = processor.dimensions();

        let Some(bbox) = processor.bounding_box() else {
            info!(%before, "No content found, leaving file untouched");
            return Ok(TrimResult::unchanged(before, None));
        };

        if bbox.is_full(before) {
            debug!(%bbox, "Content spans the whole image, nothing to trim");
            return Ok(TrimResult::unchanged(before, Some(bbox)));
        }

        processor
            .crop_to(bbox)
            .save(path, self.config.write_mode)?;

        let result = TrimResult::trimmed(before, bbox);
        info!(%bbox, before = %result.before, after = %result.after, "Image trimmed");
        Ok(result)
    }
}

/// Trim the image at `path` with the default configuration.
pub fn trim(path: impl AsRef<Path>) -> Result<TrimResult> {
    Trimmer::default().trim(path)
}
