//! Reporting collaborators which receive the rendered solutions and the summary of a run.
//!
//! - [`TextReporter`] writes human readable blocks, e.g. to stdout.
//! - [`CsvReporter`] appends one comma-separated line per entry to a file.
//! - [`MemoryReporter`] keeps everything in memory.
mod csv;
mod memory;
mod text;

use std::fmt::Display;

pub use csv::*;
pub use memory::*;
pub use text::*;

use crate::enumeration::RunSummary;

/// A solution as it is handed to a reporter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedSolution<Entry> {
    /// The position of the solution in the enumeration order, starting at 1.
    pub ordinal: u64,
    pub entries: Vec<Entry>,
}

/// An entry of a rendered solution which can be written as a line of text or as a record.
pub trait Record: Display {
    /// The values of the entry, in column order.
    fn fields(&self) -> Vec<&str>;
}

pub trait SolutionReporter<Entry> {
    fn report_solution(&mut self, solution: &RenderedSolution<Entry>) -> std::io::Result<()>;

    fn report_summary(&mut self, summary: &RunSummary) -> std::io::Result<()>;

    /// Flush everything that was reported. Called once at the end of a run.
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
