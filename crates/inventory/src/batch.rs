use serde::Serialize;

use larder_core::Day;

/// A quantity of one product received on one day.
///
/// Only the owning [`ProductLedger`](crate::ProductLedger) changes the
/// quantity; the dates are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Batch {
    quantity: u64,
    received_on: Day,
    expires_on: Day,
}

impl Batch {
    pub(crate) fn new(quantity: u64, received_on: Day, shelf_life: u32) -> Self {
        Self {
            quantity,
            received_on,
            expires_on: received_on.plus(shelf_life),
        }
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn received_on(&self) -> Day {
        self.received_on
    }

    pub fn expires_on(&self) -> Day {
        self.expires_on
    }

    pub(crate) fn add(&mut self, quantity: u64) {
        self.quantity += quantity;
    }

    /// Take up to `wanted` units out of the batch, returning how many were taken.
    pub(crate) fn take(&mut self, wanted: u64) -> u64 {
        let taken = wanted.min(self.quantity);
        self.quantity -= taken;
        taken
    }

    pub(crate) fn is_depleted(&self) -> bool {
        self.quantity == 0
    }
}
