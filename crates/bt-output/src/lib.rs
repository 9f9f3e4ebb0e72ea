//! `bt-output` — the row-level data contract between bench_train runs and
//! external exporters.
//!
//! Nothing here touches the filesystem.  A finished [`SimulationResult`] is
//! flattened with the functions in [`table`], or rows are streamed during the
//! run by [`TableObserver`] into any [`OutputWriter`].
//!
//! | Row               | One per                  | Source                      |
//! |-------------------|--------------------------|-----------------------------|
//! | [`LinkSampleRow`] | link × step              | `sample_rows`, `snapshot_rows`, `TableObserver` |
//! | [`LeadPointRow`]  | step                     | `lead_rows`                 |
//! | [`RunSummaryRow`] | run                      | `summary_row`, `TableObserver` |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bt_output::{Capture, MemoryWriter, TableObserver};
//!
//! let mut obs = TableObserver::new(MemoryWriter::new(), Capture::Snapshots);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! let table = obs.into_writer();
//! ```
//!
//! [`SimulationResult`]: bt_sim::SimulationResult

pub mod error;
pub mod observer;
pub mod row;
pub mod table;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use observer::{Capture, TableObserver};
pub use row::{LeadPointRow, LinkSampleRow, RunSummaryRow};
pub use table::{lead_rows, sample_rows, snapshot_rows, step_rows, summary_row};
pub use writer::{MemoryWriter, OutputWriter};
