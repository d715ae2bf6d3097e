use crate::bench::DatasetKind;
use hashbench_core::HashBenchError;
use std::io::Write;

/// Averaged timings of one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    /// Display label of the benchmarked hash strategy.
    pub label: String,
    /// Mean duration of a full insert pass, in milliseconds.
    pub mean_insert_ms: f64,
    /// Mean duration of a full remove pass, in milliseconds.
    pub mean_remove_ms: f64,
}

/// Receives benchmark results as the suite produces them.
///
/// An error returned by any method aborts the suite.
pub trait ReportSink {
    /// Called before the runs of a new dataset size.
    fn begin_size(&mut self, size: usize) -> Result<(), HashBenchError>;

    /// Called before the runs of a new dataset kind within the current size.
    fn begin_kind(&mut self, kind: DatasetKind) -> Result<(), HashBenchError>;

    /// Called once per finished strategy run.
    fn report(&mut self, report: &BenchmarkReport) -> Result<(), HashBenchError>;
}

/// Writes a plain-text report, one line per strategy, timings with 3 decimals.
pub struct TextSink<W: Write> {
    out: W,
    label_width: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            label_width: "hashMultiplication".len(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn begin_size(&mut self, size: usize) -> Result<(), HashBenchError> {
        writeln!(self.out, "\n==== SIZE: {} ====", size)?;
        Ok(())
    }

    fn begin_kind(&mut self, kind: DatasetKind) -> Result<(), HashBenchError> {
        writeln!(self.out, "Data type: {}", kind)?;
        Ok(())
    }

    fn report(&mut self, report: &BenchmarkReport) -> Result<(), HashBenchError> {
        writeln!(
            self.out,
            "{:<width$} | Avg Insert: {:.3} ms | Avg Remove: {:.3} ms",
            report.label,
            report.mean_insert_ms,
            report.mean_remove_ms,
            width = self.label_width,
        )?;
        Ok(())
    }
}

/// Collects reports in memory, tagged with the size and kind they were produced for.
#[derive(Debug, Default)]
pub struct CollectingSink {
    size: usize,
    kind: Option<DatasetKind>,
    pub reports: Vec<(usize, Option<DatasetKind>, BenchmarkReport)>,
}

impl ReportSink for CollectingSink {
    fn begin_size(&mut self, size: usize) -> Result<(), HashBenchError> {
        self.size = size;
        self.kind = None;
        Ok(())
    }

    fn begin_kind(&mut self, kind: DatasetKind) -> Result<(), HashBenchError> {
        self.kind = Some(kind);
        Ok(())
    }

    fn report(&mut self, report: &BenchmarkReport) -> Result<(), HashBenchError> {
        self.reports.push((self.size, self.kind, report.clone()));
        Ok(())
    }
}
