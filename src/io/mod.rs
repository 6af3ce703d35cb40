// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Collaborators around the search: loading datasets and reporting chains.
//!
//! Nothing here is needed to run a search; the `chain` binary wires these
//! together with the registry and [`ChainSearch`](crate::search::ChainSearch).

pub mod dataset;
pub mod report;

pub use dataset::{load_from_path, load_from_reader, DatasetError};
pub use report::{chain_rows, render_table, verify_chain, write_export, ChainRow, ChainVerification, ExportError};
