// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error type for trimwerk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Top-level error type for a trim run.
///
/// Both variants name the file involved so the caller can report it. Neither
/// is recovered locally: a trim either completes or propagates one of these.
#[derive(Debug, Error)]
pub enum TrimError {
    /// The input does not resolve to a readable, valid image.
    #[error("failed to decode {}: {reason}", .path.display())]
    Decode {
        path: PathBuf,
        reason: String,
        /// Underlying I/O failure kind, when the decoder hit one.
        io_kind: Option<ErrorKind>,
    },

    /// The cropped image could not be encoded or persisted back.
    #[error("failed to write {}: {reason}", .path.display())]
    Write {
        path: PathBuf,
        reason: String,
        io_kind: Option<ErrorKind>,
    },
}

impl TrimError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString, io_kind: Option<ErrorKind>) -> Self {
        Self::Decode {
            path: path.into(),
            reason: reason.to_string(),
            io_kind,
        }
    }

    pub fn write(path: impl Into<PathBuf>, reason: impl ToString, io_kind: Option<ErrorKind>) -> Self {
        Self::Write {
            path: path.into(),
            reason: reason.to_string(),
            io_kind,
        }
    }

    /// The file this error is about.
    pub fn path(&self) -> &Path {
        match self {
            Self::Decode { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TrimError>;
