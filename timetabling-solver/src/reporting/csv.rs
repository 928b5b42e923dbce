use std::borrow::Cow;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use super::Record;
use super::RenderedSolution;
use super::SolutionReporter;
use crate::enumeration::RunSummary;

/// Writes the reported solutions as comma-separated records:
///
/// ```text
/// Run 1
///
/// Solution #1
/// Mon, Ann, Early
/// Mon, Bob, Off
///
/// ```
///
/// Fields containing a comma, a double quote or a line break are enclosed in double quotes, with
/// inner double quotes doubled. The run summary is not written to the file.
///
/// The file is opened once per run; it is flushed by [`SolutionReporter::finish`] and closed when
/// the reporter is dropped.
#[derive(Debug)]
pub struct CsvReporter<W: Write> {
    writer: W,
}

impl CsvReporter<BufWriter<File>> {
    /// Create (or truncate) the file at `path` and write the run header.
    pub fn create(
        path: impl AsRef<Path>,
        run_label: &str,
    ) -> std::io::Result<CsvReporter<BufWriter<File>>> {
        let file = File::create(path)?;
        CsvReporter::new(BufWriter::new(file), run_label)
    }
}

impl<W: Write> CsvReporter<W> {
    pub fn new(mut writer: W, run_label: &str) -> std::io::Result<CsvReporter<W>> {
        writeln!(writer, "Run {run_label}")?;
        writeln!(writer)?;
        Ok(CsvReporter { writer })
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write, Entry: Record> SolutionReporter<Entry> for CsvReporter<W> {
    fn report_solution(&mut self, solution: &RenderedSolution<Entry>) -> std::io::Result<()> {
        writeln!(self.writer, "Solution #{}", solution.ordinal)?;
        for entry in &solution.entries {
            let fields = entry
                .fields()
                .into_iter()
                .map(quote_field)
                .collect::<Vec<_>>();
            writeln!(self.writer, "{}", fields.join(", "))?;
        }
        writeln!(self.writer)
    }

    fn report_summary(&mut self, _summary: &RunSummary) -> std::io::Result<()> {
        Ok(())
    }

    fn finish(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Display;
    use std::fmt::Formatter;

    use super::*;

    struct Row([&'static str; 3]);

    impl Display for Row {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }

    impl Record for Row {
        fn fields(&self) -> Vec<&str> {
            self.0.to_vec()
        }
    }

    #[test]
    fn every_solution_is_a_block_of_records() {
        let mut reporter = CsvReporter::new(Vec::new(), "1").unwrap();

        for ordinal in [1, 100] {
            reporter
                .report_solution(&RenderedSolution {
                    ordinal,
                    entries: vec![Row(["Mon", "Ann", "Early"]), Row(["Mon", "Bob", "Off"])],
                })
                .unwrap();
        }
        SolutionReporter::<Row>::finish(&mut reporter).unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            written,
            "Run 1\n\nSolution #1\nMon, Ann, Early\nMon, Bob, Off\n\nSolution #100\nMon, Ann, \
             Early\nMon, Bob, Off\n\n"
        );
    }

    #[test]
    fn fields_with_separators_are_quoted() {
        let mut reporter = CsvReporter::new(Vec::new(), "1").unwrap();

        reporter
            .report_solution(&RenderedSolution {
                ordinal: 1,
                entries: vec![Row(["Mon, early", "Ann \"A\" Smith", "Off"])],
            })
            .unwrap();

        let written = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            written,
            "Run 1\n\nSolution #1\n\"Mon, early\", \"Ann \"\"A\"\" Smith\", Off\n\n"
        );
    }
}
