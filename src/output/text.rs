//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Aligned `name current -> latest [kind]` listings
//! - Exclusion annotations for skipped packages
//! - Warnings for records with unclassifiable versions
//! - The final upgrade summary with counts

use crate::domain::{DependencyRecord, RunSummary, UpgradeStatus};
use crate::output::Notice;
use crate::update::{ChangeKind, InvalidRecord};
use colored::Colorize;
use std::io::Write;

/// Minimum width of the package name column
const MIN_NAME_WIDTH: usize = 20;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Whether to use colors
    color: bool,
    /// Whether to print failure detail in the summary
    verbose: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(color: bool) -> Self {
        Self {
            color,
            verbose: false,
        }
    }

    /// Include failure detail in the summary
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Calculate the package name column width
    fn name_width<'a>(records: impl Iterator<Item = &'a DependencyRecord>) -> usize {
        records
            .map(|r| r.name.len())
            .max()
            .unwrap_or(0)
            .max(MIN_NAME_WIDTH)
    }

    fn heading(&self, text: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", text.bold())
        } else {
            writeln!(writer, "{}", text)
        }
    }

    /// Format a single update line
    fn format_record_line(
        &self,
        record: &DependencyRecord,
        kind: ChangeKind,
        annotation: Option<&str>,
        width: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let suffix = annotation.map(|a| format!(" ({})", a)).unwrap_or_default();

        if self.color {
            let name_display = format!("{:width$}", record.name, width = width);
            let label = match kind {
                ChangeKind::Major => kind.label().red().bold().to_string(),
                ChangeKind::Minor => kind.label().yellow().to_string(),
                ChangeKind::Patch => kind.label().green().to_string(),
            };
            let (name_display, latest) = if annotation.is_some() {
                (
                    name_display.dimmed().to_string(),
                    record.latest.dimmed().to_string(),
                )
            } else {
                (name_display, record.latest.bright_white().bold().to_string())
            };

            writeln!(
                writer,
                "  {} {} {} {} [{}]{}",
                name_display,
                record.current.dimmed(),
                "→".dimmed(),
                latest,
                label,
                suffix.dimmed()
            )
        } else {
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}]{}",
                record.name,
                record.current,
                record.latest,
                kind.label(),
                suffix,
                width = width
            )
        }
    }

    /// Write a single notice line
    pub fn format_notice(&self, notice: Notice, writer: &mut dyn Write) -> std::io::Result<()> {
        let message = notice.message();
        if !self.color {
            return writeln!(writer, "{}", message);
        }

        match notice {
            Notice::UpToDate => writeln!(writer, "{}", message.green()),
            Notice::Cancelled => writeln!(writer, "{}", message.yellow()),
            _ => writeln!(writer, "{}", message.dimmed()),
        }
    }

    /// List breaking updates, or report that there are none
    pub fn format_majors(
        &self,
        majors: &[DependencyRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if majors.is_empty() {
            self.format_notice(Notice::NoMajorUpdates, writer)?;
            return writeln!(writer);
        }

        self.heading(
            &format!(
                "Major updates ({}), not upgraded automatically:",
                majors.len()
            ),
            writer,
        )?;
        let width = Self::name_width(majors.iter());
        for record in majors {
            self.format_record_line(record, ChangeKind::Major, None, width, writer)?;
        }
        writeln!(writer)
    }

    /// List minor/patch updates, annotating the excluded ones
    pub fn format_minor_patch(
        &self,
        approved: &[DependencyRecord],
        skipped: &[DependencyRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if approved.is_empty() && skipped.is_empty() {
            return Ok(());
        }

        self.heading(
            &format!(
                "Minor/patch updates ({} to upgrade, {} excluded):",
                approved.len(),
                skipped.len()
            ),
            writer,
        )?;
        let width = Self::name_width(approved.iter().chain(skipped.iter()));
        for record in approved {
            let kind = ChangeKind::between(&record.current, &record.latest);
            self.format_record_line(record, kind, None, width, writer)?;
        }
        for record in skipped {
            let kind = ChangeKind::between(&record.current, &record.latest);
            self.format_record_line(record, kind, Some("excluded"), width, writer)?;
        }
        writeln!(writer)
    }

    /// List records whose versions could not be classified
    pub fn format_warnings(
        &self,
        invalid: &[InvalidRecord],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if invalid.is_empty() {
            return Ok(());
        }

        if self.color {
            writeln!(writer, "{}", "Warnings:".yellow().bold())?;
        } else {
            writeln!(writer, "Warnings:")?;
        }
        for entry in invalid {
            writeln!(writer, "  {}: {} (skipped)", entry.record.name, entry.error)?;
        }
        writeln!(writer)
    }

    /// Write the per-package outcome list and the count line
    pub fn format_summary(
        &self,
        summary: &RunSummary,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer)?;
        self.heading("Summary:", writer)?;

        for outcome in &summary.outcomes {
            let status = outcome.status;
            let mark = if status.is_success() { "✓" } else { "✗" };

            if self.color {
                let mark = if status.is_success() {
                    mark.green().to_string()
                } else {
                    mark.red().bold().to_string()
                };
                let status_text = match status {
                    UpgradeStatus::Succeeded => status.to_string().green().to_string(),
                    UpgradeStatus::SucceededForced => status.to_string().yellow().to_string(),
                    UpgradeStatus::Failed => status.to_string().red().to_string(),
                };
                writeln!(
                    writer,
                    "  {} {}@{} {}",
                    mark,
                    outcome.name,
                    outcome.target.dimmed(),
                    status_text
                )?;
            } else {
                writeln!(
                    writer,
                    "  {} {}@{} {}",
                    mark, outcome.name, outcome.target, status
                )?;
            }

            if self.verbose || status == UpgradeStatus::Failed {
                if let Some(detail) = &outcome.detail {
                    for line in detail.lines() {
                        if self.color {
                            writeln!(writer, "      {}", line.dimmed())?;
                        } else {
                            writeln!(writer, "      {}", line)?;
                        }
                    }
                }
            }
        }

        writeln!(writer)?;
        let counts = format!(
            "{} updated, {} forced, {} failed",
            summary.succeeded_count(),
            summary.forced_count(),
            summary.failed_count()
        );
        if self.color {
            if summary.has_failures() {
                writeln!(writer, "{}", counts.red())
            } else {
                writeln!(writer, "{}", counts.green())
            }
        } else {
            writeln!(writer, "{}", counts)
        }
    }
}
