// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image module — background detection, crop, encode and persist.

pub mod bbox;
pub mod processor;

pub use bbox::content_bounds;
pub use processor::ImageProcessor;
