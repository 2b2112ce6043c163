//! Perishable inventory simulation driver.
//!
//! Reads line-oriented warehouse records, replays them day by day against
//! [`larder_inventory::Warehouse`]s, and produces the stock/busiest-day report.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod record;
pub mod report;
pub mod simulation;

pub use catalog::{Catalog, FoodItem};
pub use config::{ReportConfig, ReportFormat};
pub use record::{Movement, Record, RecordError};
pub use report::{BusiestDayLine, ProductLine, Report};
pub use simulation::{Flow, RunSummary, Simulation};
