//! Batched retrieval and merging of project measures
//!
//! This module turns the two raw API operations into one finished report table.
//!
//! # Implementation Model
//!
//! [`ReportBuilder::get_project_report`] runs in four steps:
//!
//! 1. Discover the projects carrying the requested tag and create a [`ReportTable`]
//!    with one row per project, every metric cell starting out as missing.
//! 2. Split the project keys, in discovery order, into batches no larger than the
//!    server's limit.
//! 3. Fetch the measures of the full metric catalog for each batch, one batch at a
//!    time.
//! 4. Write every returned measure into its (project, metric) cell.
//!
//! Any failure aborts the whole report; a table is only ever returned complete.
//!
//! The builder talks to the server through the [`MeasureSource`] trait, which the
//! API [`Client`](crate::api::Client) implements and tests replace with in-memory
//! doubles.

mod builder;
mod source;
mod table;

pub use builder::ReportBuilder;
pub use source::MeasureSource;
pub use table::{ProjectRow, ReportTable};
