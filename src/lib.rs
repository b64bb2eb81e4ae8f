//! A small pure Rust library for aggregating hydrocarbon formula records.
//! It reads repeated `(name, carbon count, hydrogen count)` records from a
//! textual source, groups every name sharing one formula under a single
//! entry, and produces a deterministically ordered listing.
//!
//! # Features
//!
//! - **Aggregation** — Names sharing a `(carbons, hydrogens)` pair collect
//!   under one [`FormulaEntry`], in the order they were encountered
//! - **Ordering** — Stable in-place sort by carbon count, then hydrogen
//!   count, driven by [`Formula`]'s derived ordering
//! - **Embeddable I/O** — A fallible reader over any [`BufRead`] that
//!   reports how many records it ingested and where it stopped, and a
//!   listing writer over any [`Write`]
//!
//! # Quick Start
//!
//! ```
//! use hydro_tally::io;
//!
//! let input = "\
//! methane C1 H4
//! ethane C2 H6
//! isobutane C4 H10
//! butane C4 H10
//! ";
//!
//! let ingest = io::read(input.as_bytes())?;
//! assert_eq!(ingest.records, 4);
//! assert_eq!(ingest.halted_line, None);
//!
//! // Names sharing a formula are grouped under one entry.
//! let mut table = ingest.table;
//! assert_eq!(table.entry_count(), 3);
//!
//! table.sort();
//!
//! let mut listing = Vec::new();
//! io::write(&mut listing, &table)?;
//! assert_eq!(
//!     String::from_utf8(listing).unwrap(),
//!     "C1H4 methane\nC2H6 ethane\nC4H10 isobutane butane\n"
//! );
//! # Ok::<(), hydro_tally::io::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Record reading and listing output
//!
//! # Data Types
//!
//! - [`Formula`] — Carbon/hydrogen count pair identifying a formula
//! - [`FormulaEntry`] — One formula with all names recorded for it
//! - [`FormulaTable`] — Ordered, duplicate-free collection of entries
//!
//! [`BufRead`]: std::io::BufRead
//! [`Write`]: std::io::Write

mod model;

pub mod io;

pub use model::formula::Formula;
pub use model::table::{FormulaEntry, FormulaTable};
