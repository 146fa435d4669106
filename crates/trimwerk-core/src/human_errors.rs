// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The severity decides whether the CLI labels the hint as a fix or a note.

use std::io::ErrorKind;

use crate::error::TrimError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must do something (fix the path, free disk space, change permissions).
    ActionRequired,
    /// Retrying or user action won't help — the file itself is bad.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `TrimError` into a `HumanError`.
pub fn humanize_error(err: &TrimError) -> HumanError {
    let path = err.path().display();
    match err {
        TrimError::Decode { io_kind, .. } => match io_kind {
            Some(ErrorKind::NotFound) => HumanError {
                message: format!("{path} doesn't exist."),
                suggestion: "Check the path for typos; it may have been moved or deleted.".into(),
                severity: Severity::ActionRequired,
            },
            Some(ErrorKind::PermissionDenied) => HumanError {
                message: format!("{path} can't be read."),
                suggestion: "Check the file's permissions.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: format!("{path} isn't a readable image."),
                suggestion: "The file may be damaged or in an unsupported format. Try re-exporting it as PNG.".into(),
                severity: Severity::Permanent,
            },
        },

        TrimError::Write { io_kind, .. } => match io_kind {
            Some(ErrorKind::PermissionDenied) => HumanError {
                message: format!("{path} can't be overwritten."),
                suggestion: "Make the file and its directory writable, then try again.".into(),
                severity: Severity::ActionRequired,
            },
            Some(ErrorKind::StorageFull) => HumanError {
                message: format!("There isn't enough space to save {path}."),
                suggestion: "Free up some disk space, then try again.".into(),
                severity: Severity::ActionRequired,
            },
            None => HumanError {
                message: format!("The trimmed image can't be saved to {path} without changing it."),
                suggestion: "Only lossless formats are written back. Convert the file to PNG, then trim that.".into(),
                severity: Severity::Permanent,
            },
            _ => HumanError {
                message: format!("The trimmed image couldn't be saved to {path}."),
                suggestion: "Check that the directory still exists and is writable.".into(),
                severity: Severity::ActionRequired,
            },
        },
    }
}
