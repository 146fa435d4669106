// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// trimwerk — crop an image file to its visible content, in place.
//
// Entry point. Initialises logging, trims the single image named on the
// command line and reports the size transition.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use trimwerk_core::TrimError;
use trimwerk_core::human_errors::{Severity, humanize_error};

const USAGE: &str = "usage: trimwerk <image>";

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report line.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = image_path(std::env::args_os().skip(1)) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    match trimwerk_image::trim(&path) {
        Ok(result) => {
            println!("{}", result.summary());
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "trim failed");
            eprintln!("{}", diagnostic(&err));
            ExitCode::FAILURE
        }
    }
}

/// Exactly one positional argument: the image to trim.
fn image_path(args: impl IntoIterator<Item = OsString>) -> Option<PathBuf> {
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (Some(path), None) if !path.is_empty() => Some(PathBuf::from(path)),
        _ => None,
    }
}

/// Technical error line followed by the plain-language hint, labelled by
/// whether the user can fix it.
fn diagnostic(err: &TrimError) -> String {
    let human = humanize_error(err);
    let label = match human.severity {
        Severity::ActionRequired => "fix",
        Severity::Permanent => "note",
    };
    format!("trimwerk: {err}\n{label}: {} {}", human.message, human.suggestion)
}
