use super::RenderedSolution;
use super::SolutionReporter;
use crate::enumeration::RunSummary;

/// Keeps every reported solution and the summary.
#[derive(Clone, Debug)]
pub struct MemoryReporter<Entry> {
    solutions: Vec<RenderedSolution<Entry>>,
    summary: Option<RunSummary>,
}

impl<Entry> Default for MemoryReporter<Entry> {
    fn default() -> Self {
        MemoryReporter {
            solutions: Vec::new(),
            summary: None,
        }
    }
}

impl<Entry> MemoryReporter<Entry> {
    pub fn new() -> MemoryReporter<Entry> {
        MemoryReporter::default()
    }

    /// The reported solutions, in reporting order.
    pub fn solutions(&self) -> &[RenderedSolution<Entry>] {
        &self.solutions
    }

    pub fn summary(&self) -> Option<&RunSummary> {
        self.summary.as_ref()
    }

    pub fn into_solutions(self) -> Vec<RenderedSolution<Entry>> {
        self.solutions
    }
}

impl<Entry: Clone> SolutionReporter<Entry> for MemoryReporter<Entry> {
    fn report_solution(&mut self, solution: &RenderedSolution<Entry>) -> std::io::Result<()> {
        self.solutions.push(solution.clone());
        Ok(())
    }

    fn report_summary(&mut self, summary: &RunSummary) -> std::io::Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
