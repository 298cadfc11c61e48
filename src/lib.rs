// Library root
// ------------
// This crate exposes a small library surface for the inventory CLI. The
// binary (`main.rs`) wires these modules together.
//
// Module responsibilities:
// - `book`: the book record and its available/issued state machine.
// - `store`: the catalog kept in memory and mirrored to a JSON file.
// - `diagnostics`: the sink the store reports load/save outcomes to.
// - `logging`: starts the timestamped diagnostic log file.
// - `config`: resolves file locations and log level from the environment.
// - `ui`: the numbered terminal menu that drives the store.
pub mod book;
pub mod config;
pub mod diagnostics;
pub mod logging;
pub mod store;
pub mod ui;

pub use book::{Book, Status};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use store::{CatalogStore, StoreError};
