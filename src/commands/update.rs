//! Update command implementation.

use std::path::PathBuf;

use crate::errors::{ReplaceError, Result};
use crate::interface::Context;
use crate::io::{read_replacements, unified_diff, Document, SaveStatus};
use crate::replacer::{MarkerOutcome, UpdateReport};

/// Options for the update command.
#[derive(Debug, Clone, Default)]
pub struct UpdateOptions {
    /// Replacement files (empty means the configured files).
    pub files: Vec<String>,
    /// Document to rewrite (overrides the configured document).
    pub document: Option<PathBuf>,
    /// Fail if the document is not up to date instead of writing it.
    pub check: bool,
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
    /// Show a unified diff of what would change.
    pub diff: bool,
    /// Overwrite even if the document changed while it was being processed.
    pub force: bool,
    /// Suppress normal output.
    pub quiet: bool,
}

/// Outcome of an update run.
#[derive(Debug, Clone)]
pub struct UpdateSummary {
    /// The document that was processed.
    pub document: PathBuf,
    /// What happened at each marker.
    pub report: UpdateReport,
    /// Whether the new text differs from the document on disk.
    pub changed: bool,
    /// Whether the document was written.
    pub written: bool,
}

/// Executes the update command.
pub fn update(ctx: &Context, options: UpdateOptions) -> Result<UpdateSummary> {
    let files = if options.files.is_empty() {
        ctx.config.files.clone()
    } else {
        options.files
    };
    let document_path = match options.document {
        Some(path) => ctx.base_dir.join(path),
        None => ctx.document_path(),
    };

    tracing::info!(
        "Updating {} from {} replacement file(s)...",
        document_path.display(),
        files.len()
    );

    let replacements = read_replacements(&ctx.base_dir, &files)?;
    let document = Document::load(&document_path)?;
    let replacer = ctx.replacer()?;

    let (new_text, report) = replacer.update_with_report(document.content(), &replacements);
    let report = report.with_document(&document_path);
    log_report(&report, replacements.keys().map(String::as_str));

    let changed = document.is_changed_by(&new_text);
    let mut summary = UpdateSummary {
        document: document_path.clone(),
        report,
        changed,
        written: false,
    };

    if options.diff {
        let diff = unified_diff(document.content(), &new_text, &document_path.display().to_string());
        if !diff.is_empty() {
            print!("{}", diff);
        }
    }

    if options.check {
        if changed {
            return Err(ReplaceError::OutOfDate {
                path: document_path,
            });
        }
        if !options.quiet {
            println!("{} is up to date.", document_path.display());
        }
        return Ok(summary);
    }

    if options.dry_run || options.diff {
        if !options.quiet {
            if changed {
                println!(
                    "Would update {} ({} block(s)).",
                    document_path.display(),
                    summary.report.replaced()
                );
            } else {
                println!("{} is up to date.", document_path.display());
            }
        }
        return Ok(summary);
    }

    let status = document.save(&new_text, options.force)?;
    summary.written = status == SaveStatus::Written;

    if !options.quiet {
        match status {
            SaveStatus::Written => println!(
                "Updated {} ({} block(s)).",
                document_path.display(),
                summary.report.replaced()
            ),
            SaveStatus::Unchanged => println!("{} is up to date.", document_path.display()),
        }
    }

    Ok(summary)
}

fn log_report<'a>(report: &UpdateReport, file_ids: impl IntoIterator<Item = &'a str>) {
    for marker in report.markers() {
        match marker.outcome {
            MarkerOutcome::Replaced => {
                tracing::debug!("{}: replaced block for {}", marker.location, marker.file_id)
            }
            MarkerOutcome::Unmapped => {
                tracing::debug!("{}: skipped {}, no replacement given", marker.location, marker.file_id)
            }
            MarkerOutcome::MissingBlock | MarkerOutcome::Unterminated => {
                tracing::warn!("{}: {} ({})", marker.location, marker.outcome, marker.file_id)
            }
        }
    }

    for unused in report.unused(file_ids) {
        tracing::warn!("No marker refers to {}", unused);
    }
}
