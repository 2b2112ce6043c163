//! Day-by-day replay of input records against the warehouses.

use std::collections::BTreeMap;
use std::io::{self, BufRead};

use chrono::NaiveDate;

use larder_core::{Day, DomainError, DomainResult, WarehouseName};
use larder_inventory::Warehouse;

use crate::catalog::{Catalog, FoodItem};
use crate::record::{Movement, Record};

/// Whether the replay should keep reading records.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Counters describing one replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub skipped: usize,
    pub days_closed: u32,
    pub reached_end: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Simulation {
    catalog: Catalog,
    warehouses: BTreeMap<WarehouseName, Warehouse>,
    start_date: Option<NaiveDate>,
    today: Day,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record.
    ///
    /// Fails with [`DomainError::NotFound`] when a movement names an unknown
    /// product or warehouse. Errors leave the simulation unchanged; the caller
    /// decides whether to skip the record and carry on.
    pub fn apply(&mut self, record: Record) -> DomainResult<Flow> {
        match record {
            Record::FoodItem {
                code,
                shelf_life,
                name,
            } => {
                let item = FoodItem {
                    code,
                    name,
                    shelf_life,
                };
                let code = item.code.clone();
                if !self.catalog.insert(item) {
                    tracing::warn!(product = %code, "duplicate food item ignored");
                }
            }
            Record::Warehouse { name } => {
                if self.warehouses.contains_key(&name) {
                    tracing::warn!(warehouse = %name, "duplicate warehouse ignored");
                } else {
                    self.warehouses.insert(name, Warehouse::new());
                }
            }
            Record::StartDate(date) => {
                self.start_date = Some(date);
            }
            Record::Receive(movement) => self.receive(&movement)?,
            Record::Request(movement) => self.request(&movement)?,
            Record::NextDay => self.close_day(),
            Record::End => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn receive(&mut self, movement: &Movement) -> DomainResult<()> {
        let shelf_life = self
            .catalog
            .get(&movement.code)
            .ok_or_else(|| DomainError::not_found(format!("product {}", movement.code)))?
            .shelf_life;
        let today = self.today;
        let warehouse = self.warehouse_mut(&movement.warehouse)?;

        warehouse.receive(&movement.code, movement.quantity, today, shelf_life);
        Ok(())
    }

    fn request(&mut self, movement: &Movement) -> DomainResult<()> {
        let warehouse = self.warehouse_mut(&movement.warehouse)?;

        let shipped = warehouse.request(&movement.code, movement.quantity);
        if shipped < movement.quantity {
            tracing::debug!(
                product = %movement.code,
                warehouse = %movement.warehouse,
                requested = movement.quantity,
                shipped,
                "request only partially filled"
            );
        }
        Ok(())
    }

    fn warehouse_mut(&mut self, name: &WarehouseName) -> DomainResult<&mut Warehouse> {
        self.warehouses
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(format!("warehouse {name}")))
    }

    /// Close the current day in every warehouse, then move to the next day.
    fn close_day(&mut self) {
        for warehouse in self.warehouses.values_mut() {
            warehouse.advance_day(self.today);
        }
        tracing::debug!(day = self.today.index(), "day closed");
        self.today = self.today.next();
    }

    /// Replay every line of `input` until an `End` record or end of input.
    ///
    /// Malformed or unresolvable records are logged and skipped. Only I/O
    /// failures abort the run.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let first_day = self.today;

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            let line_no = index + 1;

            let record = match Record::parse(&line) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(line = line_no, %err, "skipping malformed record");
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.apply(record) {
                Ok(Flow::Continue) => summary.applied += 1,
                Ok(Flow::Stop) => {
                    summary.applied += 1;
                    summary.reached_end = true;
                    break;
                }
                Err(err) => {
                    tracing::warn!(line = line_no, %err, "skipping record");
                    summary.skipped += 1;
                }
            }
        }

        summary.days_closed = self.today.index() - first_day.index();
        Ok(summary)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn warehouses(&self) -> impl Iterator<Item = (&WarehouseName, &Warehouse)> {
        self.warehouses.iter()
    }

    pub fn warehouse(&self, name: &WarehouseName) -> Option<&Warehouse> {
        self.warehouses.get(name)
    }

    pub fn warehouse_count(&self) -> usize {
        self.warehouses.len()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    /// The day currently being recorded (not yet closed).
    pub fn today(&self) -> Day {
        self.today
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movement(code: &str, quantity: u64, warehouse: &str) -> Movement {
        Movement {
            code: code.parse().unwrap(),
            quantity,
            warehouse: warehouse.parse().unwrap(),
        }
    }

    fn food(code: &str, shelf_life: u32) -> Record {
        Record::FoodItem {
            code: code.parse().unwrap(),
            shelf_life,
            name: format!("item {code}"),
        }
    }

    fn warehouse(name: &str) -> Record {
        Record::Warehouse {
            name: name.parse().unwrap(),
        }
    }

    #[test]
    fn receive_requires_known_product_and_warehouse() {
        let mut sim = Simulation::new();
        sim.apply(warehouse("Columbus")).unwrap();

        assert_eq!(
            sim.apply(Record::Receive(movement("A", 5, "Columbus"))),
            Err(DomainError::not_found("product A"))
        );

        sim.apply(food("A", 3)).unwrap();
        assert_eq!(
            sim.apply(Record::Receive(movement("A", 5, "Dayton"))),
            Err(DomainError::not_found("warehouse Dayton"))
        );

        assert_eq!(
            sim.apply(Record::Receive(movement("A", 5, "Columbus"))),
            Ok(Flow::Continue)
        );
        let columbus = sim.warehouse(&"Columbus".parse().unwrap()).unwrap();
        assert_eq!(columbus.on_hand(&"A".parse().unwrap()), 5);
    }

    #[test]
    fn request_for_uncatalogued_product_counts_demand() {
        let mut sim = Simulation::new();
        sim.apply(warehouse("Columbus")).unwrap();
        sim.apply(Record::Request(movement("Z", 9, "Columbus"))).unwrap();

        let columbus = sim.warehouse(&"Columbus".parse().unwrap()).unwrap();
        assert_eq!(columbus.current_day_transactions(), 9);
    }

    #[test]
    fn duplicate_declarations_keep_the_first() {
        let mut sim = Simulation::new();
        sim.apply(food("A", 3)).unwrap();
        sim.apply(food("A", 30)).unwrap();
        sim.apply(warehouse("Columbus")).unwrap();
        sim.apply(Record::Receive(movement("A", 1, "Columbus"))).unwrap();
        sim.apply(warehouse("Columbus")).unwrap();

        let code = "A".parse().unwrap();
        assert_eq!(sim.catalog().get(&code).unwrap().shelf_life, 3);
        assert_eq!(sim.warehouse_count(), 1);
        // Re-declaring must not reset existing stock.
        let columbus = sim.warehouse(&"Columbus".parse().unwrap()).unwrap();
        assert!(columbus.is_stocked(&code));
    }

    #[test]
    fn next_day_closes_every_warehouse_and_advances() {
        let mut sim = Simulation::new();
        sim.apply(food("A", 1)).unwrap();
        sim.apply(warehouse("Columbus")).unwrap();
        sim.apply(warehouse("Dayton")).unwrap();
        sim.apply(Record::Receive(movement("A", 2, "Columbus"))).unwrap();
        sim.apply(Record::Receive(movement("A", 2, "Dayton"))).unwrap();

        sim.apply(Record::NextDay).unwrap();
        assert_eq!(sim.today(), Day::new(1));

        // Shelf life 1: received on day 0, purged when day 1 closes.
        sim.apply(Record::NextDay).unwrap();
        let code = "A".parse().unwrap();
        for (_, warehouse) in sim.warehouses() {
            assert!(!warehouse.is_stocked(&code));
            assert_eq!(warehouse.busiest_day(), Day::new(0));
            assert_eq!(warehouse.peak_transactions(), 2);
        }
    }

    #[test]
    fn run_skips_bad_lines_and_stops_at_end() {
        let input = "\
FoodItem - UPC Code: 0000000001  Shelf life: 5  Name: Eggs
Warehouse - Columbus
Receive: 0000000001 ten Columbus
Receive: 0000000002 4 Columbus
Receive: 0000000001 4 Columbus
Next day:
End
Receive: 0000000001 99 Columbus
";
        let mut sim = Simulation::new();
        let summary = sim.run(input.as_bytes()).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                applied: 5,
                skipped: 2,
                days_closed: 1,
                reached_end: true,
            }
        );
        let columbus = sim.warehouse(&"Columbus".parse().unwrap()).unwrap();
        assert_eq!(columbus.on_hand(&"0000000001".parse().unwrap()), 4);
    }
}
