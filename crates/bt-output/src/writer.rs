//! The `OutputWriter` trait and the in-memory writer.

use crate::{LinkSampleRow, OutputError, OutputResult, RunSummaryRow};

/// Sink for run output.  Exporters (files, databases, plots) live outside
/// this workspace and implement this trait.
pub trait OutputWriter {
    /// Write a batch of link samples, all from one time step.
    fn write_samples(&mut self, rows: &[LinkSampleRow]) -> OutputResult<()>;

    /// Write the run summary.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Collects everything in memory.
///
/// Rejects batches that go back in time and any write after
/// [`finish`][OutputWriter::finish].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MemoryWriter {
    pub samples:  Vec<LinkSampleRow>,
    pub summary:  Option<RunSummaryRow>,
    pub finished: bool,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct times written so far, in order.
    pub fn times(&self) -> Vec<f64> {
        let mut times: Vec<f64> = self.samples.iter().map(|r| r.time).collect();
        times.dedup();
        times
    }

    fn check_open(&self) -> OutputResult<()> {
        if self.finished { Err(OutputError::Finished) } else { Ok(()) }
    }
}

impl OutputWriter for MemoryWriter {
    fn write_samples(&mut self, rows: &[LinkSampleRow]) -> OutputResult<()> {
        self.check_open()?;
        let mut previous = self.samples.last().map(|r| r.time);
        for row in rows {
            if let Some(p) = previous {
                if row.time < p {
                    return Err(OutputError::OutOfOrder { previous: p, got: row.time });
                }
            }
            previous = Some(row.time);
        }
        self.samples.extend_from_slice(rows);
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.check_open()?;
        self.summary = Some(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.finished = true;
        Ok(())
    }
}
