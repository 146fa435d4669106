// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Trim configuration.

use serde::{Deserialize, Serialize};

/// How the trimmed image is written back over the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Write a sibling temporary file, then rename it over the destination.
    /// The original survives any failure before the rename.
    #[default]
    Atomic,
    /// Truncate and rewrite the destination directly. An interrupted write
    /// can leave a corrupted file behind.
    InPlace,
}

/// Settings for a trim run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrimConfig {
    /// Strategy used when persisting the cropped image.
    #[serde(default)]
    pub write_mode: WriteMode,
}

impl TrimConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }
}
