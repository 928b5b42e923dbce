use std::io::Write;

use super::Record;
use super::RenderedSolution;
use super::SolutionReporter;
use crate::enumeration::RunSummary;

/// Writes every reported solution as a block of lines, followed by a statistics block at the end
/// of the run:
///
/// ```text
/// Solution #1
///   Course 1-A | Subject English | Teacher Ian | TimeSlot Monday
///
/// Statistics
///   - status          : exhausted
///   - solutions found : 2
/// ```
#[derive(Debug)]
pub struct TextReporter<W: Write> {
    writer: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(writer: W) -> TextReporter<W> {
        TextReporter { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, Entry: Record> SolutionReporter<Entry> for TextReporter<W> {
    fn report_solution(&mut self, solution: &RenderedSolution<Entry>) -> std::io::Result<()> {
        writeln!(self.writer, "Solution #{}", solution.ordinal)?;
        for entry in &solution.entries {
            writeln!(self.writer, "  {entry}")?;
        }
        writeln!(self.writer)
    }

    fn report_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        writeln!(self.writer, "Statistics")?;
        writeln!(self.writer, "  - status          : {}", summary.status)?;
        writeln!(self.writer, "  - solutions found : {}", summary.solutions_found)?;
        writeln!(
            self.writer,
            "  - reported        : {}",
            summary.solutions_reported
        )?;
        writeln!(
            self.writer,
            "  - solver calls    : {}",
            summary.statistics.solver_calls
        )?;
        writeln!(
            self.writer,
            "  - wall time       : {} ms",
            summary.statistics.wall_time.as_millis()
        )?;
        if let Some(origin) = &summary.root_conflict {
            writeln!(self.writer, "  - unsatisfiable   : {origin}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}
