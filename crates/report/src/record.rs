//! Input record parsing.
//!
//! One record per line:
//!
//! ```text
//! FoodItem - UPC Code: 0353264991  Shelf life: 7  Name: Apples
//! Warehouse - Columbus
//! Start date: 05/10/2009
//! Receive: 0353264991 40 Columbus
//! Request: 0353264991 12 Columbus
//! Next day:
//! End
//! ```

use chrono::NaiveDate;
use thiserror::Error;

use larder_core::{DomainError, ProductCode, WarehouseName};

const FOOD_ITEM: &str = "FoodItem - UPC Code:";
const SHELF_LIFE: &str = "Shelf life:";
const NAME: &str = "Name:";
const WAREHOUSE: &str = "Warehouse - ";
const START_DATE: &str = "Start date:";
const RECEIVE: &str = "Receive:";
const REQUEST: &str = "Request:";
const NEXT_DAY: &str = "Next day";
const END: &str = "End";

/// Longest accepted shelf life, in days (about a century).
pub const MAX_SHELF_LIFE: u32 = 36_500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unrecognised record: {0:?}")]
    UnknownKind(String),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid number for `{field}`: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid date {0:?} (expected MM/DD/YYYY)")]
    InvalidDate(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A stock movement into or out of a warehouse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    pub code: ProductCode,
    pub quantity: u64,
    pub warehouse: WarehouseName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    FoodItem {
        code: ProductCode,
        shelf_life: u32,
        name: String,
    },
    Warehouse {
        name: WarehouseName,
    },
    StartDate(NaiveDate),
    Receive(Movement),
    Request(Movement),
    NextDay,
    End,
}

impl Record {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Record>, RecordError> {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return Ok(None);
        }

        let record = if let Some(rest) = line.strip_prefix(FOOD_ITEM) {
            parse_food_item(rest)?
        } else if let Some(rest) = line.strip_prefix(WAREHOUSE) {
            Record::Warehouse {
                name: rest.parse()?,
            }
        } else if let Some(rest) = line.strip_prefix(START_DATE) {
            Record::StartDate(parse_date(rest.trim())?)
        } else if let Some(rest) = line.strip_prefix(RECEIVE) {
            Record::Receive(parse_movement(rest)?)
        } else if let Some(rest) = line.strip_prefix(REQUEST) {
            Record::Request(parse_movement(rest)?)
        } else if line.starts_with(NEXT_DAY) {
            Record::NextDay
        } else if line.starts_with(END) {
            Record::End
        } else {
            return Err(RecordError::UnknownKind(line.to_string()));
        };

        Ok(Some(record))
    }
}

fn parse_food_item(rest: &str) -> Result<Record, RecordError> {
    let (code, rest) = rest
        .split_once(SHELF_LIFE)
        .ok_or(RecordError::MissingField("shelf life"))?;
    let (shelf_life, name) = rest
        .split_once(NAME)
        .ok_or(RecordError::MissingField("name"))?;

    let shelf_life: u32 = parse_number("shelf life", shelf_life)?;
    if shelf_life > MAX_SHELF_LIFE {
        return Err(DomainError::validation(format!(
            "shelf life {shelf_life} exceeds {MAX_SHELF_LIFE} days"
        ))
        .into());
    }

    Ok(Record::FoodItem {
        code: code.parse()?,
        shelf_life,
        name: name.trim().to_string(),
    })
}

fn parse_movement(rest: &str) -> Result<Movement, RecordError> {
    let rest = rest.trim_start();
    let (code, rest) = rest
        .split_once(char::is_whitespace)
        .ok_or(RecordError::MissingField("quantity"))?;
    let (quantity, warehouse) = rest
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or(RecordError::MissingField("warehouse"))?;

    let quantity: u64 = parse_number("quantity", quantity)?;
    if quantity == 0 {
        return Err(DomainError::validation("quantity must be positive").into());
    }

    Ok(Movement {
        code: code.parse()?,
        quantity,
        warehouse: warehouse.parse()?,
    })
}

fn parse_number<T: core::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, RecordError> {
    let value = value.trim();
    value.parse().map_err(|_| RecordError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, RecordError> {
    NaiveDate::parse_from_str(value, "%m/%d/%Y")
        .map_err(|_| RecordError::InvalidDate(value.to_string()))
}
