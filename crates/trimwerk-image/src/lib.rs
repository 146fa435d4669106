// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// trimwerk-image — Auto-trim for raster images.
//
// Finds the bounding box of non-background content (transparent pixels, or
// the uniform border colour for images without alpha), crops to it and
// writes the result back over the source file.

pub mod image;
pub mod trim;

pub use self::image::bbox::content_bounds;
pub use self::image::processor::ImageProcessor;
pub use trim::{Trimmer, trim};
