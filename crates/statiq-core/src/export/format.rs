//! ExportFormat trait definition

use crate::play::Play;

/// Trait for export format implementations
///
/// Provides a common interface for different export formats (Hudl CSV, JSON, etc.)
pub trait ExportFormat {
    /// Returns the header line for the format (None for formats without headers)
    fn header(&self) -> Option<String>;

    /// Format a single play. `index` is the play's 0-based position in the log.
    fn format_row(&self, index: usize, play: &Play) -> String;

    /// Format a whole play log.
    ///
    /// Lines are joined with `\n` and the last line has no terminator.
    fn format_rows(&self, plays: &[Play]) -> String {
        let rows = plays
            .iter()
            .enumerate()
            .map(|(index, play)| self.format_row(index, play));

        self.header()
            .into_iter()
            .chain(rows)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
