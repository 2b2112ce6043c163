//! Perishable inventory domain module.
//!
//! This crate contains the FIFO expiring-batch ledger and the per-warehouse
//! collection of ledgers, implemented purely as deterministic domain logic
//! (no IO, no parsing, no storage).

pub mod batch;
pub mod ledger;
pub mod warehouse;

pub use batch::Batch;
pub use ledger::ProductLedger;
pub use warehouse::Warehouse;
