//! Final stock report.

use core::fmt;

use chrono::{Days, NaiveDate};
use serde::Serialize;

use larder_core::{Day, ProductCode, WarehouseName};

use crate::catalog::FoodItem;
use crate::config::ReportFormat;
use crate::simulation::Simulation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    pub code: ProductCode,
    pub name: String,
}

impl From<&FoodItem> for ProductLine {
    fn from(item: &FoodItem) -> Self {
        Self {
            code: item.code.clone(),
            name: item.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusiestDayLine {
    pub warehouse: WarehouseName,
    pub day: Day,
    /// Calendar date of `day`, when a start date was given.
    pub date: Option<NaiveDate>,
    pub transactions: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub title: String,
    /// Catalog items stocked in no warehouse.
    pub unstocked: Vec<ProductLine>,
    /// Catalog items stocked in every warehouse.
    pub fully_stocked: Vec<ProductLine>,
    pub busiest_days: Vec<BusiestDayLine>,
}

impl Report {
    pub fn build(simulation: &Simulation, title: impl Into<String>) -> Self {
        let mut unstocked = Vec::new();
        let mut fully_stocked = Vec::new();
        let has_warehouses = simulation.warehouse_count() > 0;

        for item in simulation.catalog().iter() {
            let stocked: Vec<bool> = simulation
                .warehouses()
                .map(|(_, warehouse)| warehouse.is_stocked(&item.code))
                .collect();

            if !stocked.iter().any(|&s| s) {
                unstocked.push(ProductLine::from(item));
            }
            if has_warehouses && stocked.iter().all(|&s| s) {
                fully_stocked.push(ProductLine::from(item));
            }
        }

        let busiest_days = simulation
            .warehouses()
            .map(|(name, warehouse)| {
                let day = warehouse.busiest_day();
                BusiestDayLine {
                    warehouse: name.clone(),
                    day,
                    date: simulation
                        .start_date()
                        .and_then(|start| calendar_date(start, day)),
                    transactions: warehouse.peak_transactions(),
                }
            })
            .collect();

        Self {
            title: title.into(),
            unstocked,
            fully_stocked,
            busiest_days,
        }
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Text => Ok(self.to_string()),
            ReportFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}

fn calendar_date(start: NaiveDate, day: Day) -> Option<NaiveDate> {
    start.checked_add_days(Days::new(u64::from(day.index())))
}

impl fmt::Display for ProductLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.name)
    }
}

impl fmt::Display for BusiestDayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date {
            Some(date) => write!(
                f,
                "{} {} {}",
                self.warehouse,
                date.format("%-m/%-d/%Y"),
                self.transactions
            ),
            None => write!(f, "{} {} {}", self.warehouse, self.day, self.transactions),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        writeln!(f, "Unstocked Products:")?;
        for line in &self.unstocked {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "Fully-Stocked Products:")?;
        for line in &self.fully_stocked {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;

        writeln!(f, "Busiest Days:")?;
        for line in &self.busiest_days {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
FoodItem - UPC Code: 0000000001  Shelf life: 10  Name: Eggs
FoodItem - UPC Code: 0000000002  Shelf life: 2  Name: Lettuce
FoodItem - UPC Code: 0000000003  Shelf life: 30  Name: Rice
Warehouse - Columbus
Warehouse - Salt Lake City
Start date: 01/30/2014
Receive: 0000000001 5 Columbus
Receive: 0000000001 5 Salt Lake City
Receive: 0000000002 8 Columbus
Next day:
Request: 0000000001 2 Columbus
Next day:
End
";

    fn report() -> Report {
        let mut sim = Simulation::new();
        sim.run(INPUT.as_bytes()).unwrap();
        Report::build(&sim, "Report")
    }

    #[test]
    fn classifies_products_by_stock() {
        let report = report();
        let codes = |lines: &[ProductLine]| -> Vec<String> {
            lines.iter().map(|l| l.code.to_string()).collect()
        };

        // Lettuce expires on day 2, which was never closed.
        assert_eq!(codes(&report.unstocked), vec!["0000000003"]);
        assert_eq!(codes(&report.fully_stocked), vec!["0000000001"]);
    }

    #[test]
    fn renders_text_layout() {
        let text = report().render(ReportFormat::Text).unwrap();
        let expected = "\
Report

Unstocked Products:
0000000003 Rice

Fully-Stocked Products:
0000000001 Eggs

Busiest Days:
Columbus 1/30/2014 13
Salt Lake City 1/30/2014 5
";
        assert_eq!(text, expected);
    }

    #[test]
    fn busiest_day_without_start_date_prints_index() {
        let line = BusiestDayLine {
            warehouse: "Columbus".parse().unwrap(),
            day: Day::new(4),
            date: None,
            transactions: 12,
        };
        assert_eq!(line.to_string(), "Columbus day 4 12");
    }

    #[test]
    fn no_warehouses_means_nothing_is_fully_stocked() {
        let mut sim = Simulation::new();
        sim.run("FoodItem - UPC Code: 0000000001  Shelf life: 1  Name: Eggs\n".as_bytes())
            .unwrap();
        let report = Report::build(&sim, "Report");

        assert_eq!(report.unstocked.len(), 1);
        assert!(report.fully_stocked.is_empty());
        assert!(report.busiest_days.is_empty());
    }

    #[test]
    fn renders_json() {
        let json = report().render(ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Report");
        assert_eq!(value["busiest_days"][0]["warehouse"], "Columbus");
        assert_eq!(value["busiest_days"][0]["date"], "2014-01-30");
        assert_eq!(value["busiest_days"][0]["transactions"], 13);
    }
}
