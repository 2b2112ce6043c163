//! Warehouse: one ledger per product plus busiest-day bookkeeping.

use std::collections::HashMap;

use larder_core::{Day, ProductCode};

use crate::ledger::ProductLedger;

/// A collection of product ledgers with per-day transaction statistics.
///
/// A product code maps to a ledger only while that ledger holds stock:
/// `request` evicts a ledger it empties, and `advance_day` evicts ledgers
/// emptied by expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warehouse {
    ledgers: HashMap<ProductCode, ProductLedger>,
    busiest_day: Day,
    peak_transactions: u64,
    current_day_transactions: u64,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive `quantity` units of `code` on `day`.
    ///
    /// `shelf_life_if_new` is only used when this warehouse holds no ledger
    /// for the product yet. The quantity always counts toward today's
    /// transactions.
    pub fn receive(
        &mut self,
        code: &ProductCode,
        quantity: u64,
        day: Day,
        shelf_life_if_new: u32,
    ) {
        match self.ledgers.get_mut(code) {
            Some(ledger) => ledger.receive(quantity, day),
            None if quantity > 0 => {
                let mut ledger = ProductLedger::new(shelf_life_if_new);
                ledger.receive(quantity, day);
                self.ledgers.insert(code.clone(), ledger);
                tracing::debug!(
                    product = %code,
                    shelf_life = shelf_life_if_new,
                    "ledger opened"
                );
            }
            None => {}
        }

        self.current_day_transactions += quantity;
        tracing::debug!(product = %code, quantity, day = day.index(), "received");
    }

    /// Ship up to `quantity` units of `code`, oldest stock first.
    ///
    /// Returns the quantity actually shipped. Requests for products with no
    /// stock ship nothing, but the demand still counts toward today's
    /// transactions.
    pub fn request(&mut self, code: &ProductCode, quantity: u64) -> u64 {
        self.current_day_transactions += quantity;

        let Some(ledger) = self.ledgers.get_mut(code) else {
            tracing::debug!(product = %code, quantity, "request for unstocked product");
            return 0;
        };

        let shipped = ledger.consume(quantity);
        if ledger.is_empty() {
            self.ledgers.remove(code);
            tracing::debug!(product = %code, "ledger emptied by request");
        }
        shipped
    }

    /// Close out `day`: purge batches expiring today and fold today's
    /// transaction total into the busiest-day statistics.
    ///
    /// Ties go to the later day.
    pub fn advance_day(&mut self, day: Day) {
        self.ledgers.retain(|code, ledger| {
            if let Some(expired) = ledger.purge_expired(day) {
                tracing::debug!(
                    product = %code,
                    quantity = expired.quantity(),
                    day = day.index(),
                    "batch expired"
                );
            }
            !ledger.is_empty()
        });

        if self.current_day_transactions >= self.peak_transactions {
            self.busiest_day = day;
            self.peak_transactions = self.current_day_transactions;
            tracing::debug!(
                day = day.index(),
                transactions = self.peak_transactions,
                "new busiest day"
            );
        }
        self.current_day_transactions = 0;
    }

    /// True iff the warehouse holds a non-empty ledger for `code`.
    pub fn is_stocked(&self, code: &ProductCode) -> bool {
        self.ledgers
            .get(code)
            .is_some_and(|ledger| !ledger.is_empty())
    }

    pub fn busiest_day(&self) -> Day {
        self.busiest_day
    }

    pub fn peak_transactions(&self) -> u64 {
        self.peak_transactions
    }

    pub fn current_day_transactions(&self) -> u64 {
        self.current_day_transactions
    }

    /// Units of `code` on hand (0 when unstocked).
    pub fn on_hand(&self, code: &ProductCode) -> u64 {
        self.ledgers.get(code).map_or(0, ProductLedger::on_hand)
    }

    pub fn ledger(&self, code: &ProductCode) -> Option<&ProductLedger> {
        self.ledgers.get(code)
    }

    /// Number of products with a ledger in this warehouse.
    pub fn product_count(&self) -> usize {
        self.ledgers.len()
    }
}
