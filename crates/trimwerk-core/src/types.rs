// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for trimwerk.

use serde::{Deserialize, Serialize};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Renders as `(W, H)`.
impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.width, self.height)
    }
}

/// Smallest axis-aligned rectangle enclosing all non-background pixels.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive. A box produced by
/// detection always satisfies `left < right <= width` and
/// `top < bottom <= height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left < right && top < bottom, "empty bounding box");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Size of the image produced by cropping to this box.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.left..self.right).contains(&x) && (self.top..self.bottom).contains(&y)
    }

    /// Whether the box spans the entire image, i.e. there is nothing to trim.
    pub fn is_full(&self, dims: Dimensions) -> bool {
        self.left == 0 && self.top == 0 && self.right == dims.width && self.bottom == dims.height
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Outcome of a single trim run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimResult {
    /// Dimensions as decoded.
    pub before: Dimensions,
    /// Dimensions as written; equal to `before` when nothing was cropped.
    pub after: Dimensions,
    /// The detected content box. `None` when the image is all background.
    pub bbox: Option<BoundingBox>,
}

impl TrimResult {
    pub fn unchanged(dims: Dimensions, bbox: Option<BoundingBox>) -> Self {
        Self {
            before: dims,
            after: dims,
            bbox,
        }
    }

    pub fn trimmed(before: Dimensions, bbox: BoundingBox) -> Self {
        Self {
            before,
            after: bbox.dimensions(),
            bbox: Some(bbox),
        }
    }

    /// True when a crop was performed and written back.
    pub fn changed(&self) -> bool {
        self.before != self.after
    }

    /// One-line human-readable report of the size transition.
    pub fn summary(&self) -> String {
        if self.changed() {
            format!("Trimmed: {} -> {}", self.before, self.after)
        } else {
            format!("Unchanged: {}", self.before)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_display_as_tuple() {
        assert_eq!(Dimensions::new(100, 100).to_string(), "(100, 100)");
    }

    #[test]
    fn bbox_geometry() {
        let bbox = BoundingBox::new(40, 50, 60, 80);
        assert_eq!(bbox.dimensions(), Dimensions::new(20, 30));
        assert!(bbox.contains(40, 50));
        assert!(bbox.contains(59, 79));
        assert!(!bbox.contains(60, 79));
        assert!(!bbox.contains(59, 80));
        assert!(!bbox.is_full(Dimensions::new(100, 100)));
        assert!(BoundingBox::new(0, 0, 20, 30).is_full(Dimensions::new(20, 30)));
    }

    #[test]
    fn summary_reports_transition() {
        let result = TrimResult::trimmed(Dimensions::new(100, 100), BoundingBox::new(40, 50, 60, 80));
        assert!(result.changed());
        assert_eq!(result.summary(), "Trimmed: (100, 100) -> (20, 30)");
    }

    #[test]
    fn summary_reports_unchanged() {
        let result = TrimResult::unchanged(Dimensions::new(50, 50), None);
        assert!(!result.changed());
        assert_eq!(result.after, result.before);
        assert_eq!(result.summary(), "Unchanged: (50, 50)");
    }
}
