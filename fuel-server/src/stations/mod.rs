//! Station import and in-memory store.
//!
//! Stations come from an OPIS truckstop price sheet (CSV). The store keeps
//! them in memory in file order; planning reads snapshots and never writes.

mod error;
mod import;
mod store;

pub use error::StationError;
pub use store::StationStore;
